//! winforge-core: Geometry, color and host traits for winforge.
//!
//! This crate contains the error taxonomy, the capabilities consumed from a
//! host toolkit (DisplayProvider, WindowHost), the cached screen geometry
//! service, color helpers and shared constants.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
mod host;
pub mod random;

pub use color::{
    contrasting_color, contrasting_color_with_gap, random_color, random_color_with,
    random_color_with_floor, random_color_with_floor_with,
};
pub use constants::{
    DEFAULT_CONTRAST_GAP, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_RECTANGLE_RATIO,
};
pub use error::{BoxedSource, BuildError, GeometryViolation, Result};
pub use geometry::{
    center_within, global_geometry, global_geometry_or_init, init_global_geometry, random_rectangle, random_rectangle_with,
    random_rectangle_with_ratio, GeometryService,
};
pub use host::{DisplayProvider, FixedDisplay, WindowHost};

// Re-export types used in trait signatures for convenience
pub use winforge_types::{Dimension, Rect, ScreenBounds, Window};
