//! Error taxonomy for builder and helper operations
//!
//! Every failure is raised at the call that introduced the bad value. None of
//! them are transient, so nothing here is retried.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout winforge
pub type Result<T> = std::result::Result<T, BuildError>;

/// Boxed error produced by a toolkit or a fallible factory
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which geometric constraint a value broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryViolation {
    /// A size or coordinate was zero or negative
    NotPositive,
    /// Value is larger than the usable screen width (the limit)
    ExceedsScreenWidth(i32),
    /// Value is larger than the usable screen height (the limit)
    ExceedsScreenHeight(i32),
}

impl fmt::Display for GeometryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryViolation::NotPositive => write!(f, "must be positive"),
            GeometryViolation::ExceedsScreenWidth(limit) => {
                write!(f, "cannot be greater than screen width {}", limit)
            }
            GeometryViolation::ExceedsScreenHeight(limit) => {
                write!(f, "cannot be greater than screen height {}", limit)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    /// A numeric argument is outside its declared domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A size or position does not fit the screen
    #[error("invalid geometry: {name} = {value} {violation}")]
    InvalidGeometry {
        name: &'static str,
        value: i32,
        violation: GeometryViolation,
    },

    /// The host toolkit (or a fallible factory) rejected the configuration
    #[error("construction failed: {message}")]
    Construction {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl BuildError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        BuildError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn invalid_geometry(name: &'static str, value: i32, violation: GeometryViolation) -> Self {
        BuildError::InvalidGeometry {
            name,
            value,
            violation,
        }
    }

    pub fn construction(message: impl Into<String>) -> Self {
        BuildError::Construction {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error as the cause of a construction failure
    pub fn wrap<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        BuildError::Construction {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, BuildError::InvalidGeometry { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BuildError::InvalidArgument { .. })
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, BuildError::Construction { .. })
    }
}
