//! Screen geometry service
//!
//! The maximum usable window bounds are asked from the [`DisplayProvider`]
//! once, on first use, and cached for the lifetime of the service. The cache
//! is a [`OnceCell`], so concurrent first calls compute the bounds only once.
//!
//! A process-wide instance can be installed with [`init_global_geometry`];
//! tests construct their own service with [`GeometryService::with_bounds`].

use log::debug;
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::constants::DEFAULT_RECTANGLE_RATIO;
use crate::error::{BuildError, GeometryViolation, Result};
use crate::host::{DisplayProvider, FixedDisplay};
use crate::random::require_positive;
use winforge_types::{Dimension, Rect, ScreenBounds};

pub struct GeometryService {
    provider: Box<dyn DisplayProvider>,
    bounds: OnceCell<ScreenBounds>,
}

impl GeometryService {
    pub fn new(provider: impl DisplayProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            bounds: OnceCell::new(),
        }
    }

    /// Service backed by a fixed `width` x `height` display
    pub fn with_bounds(width: i32, height: i32) -> Self {
        Self::new(FixedDisplay::new(width, height))
    }

    /// The cached maximum window bounds, computed on the first call.
    ///
    /// Every later call returns a reference to the same value.
    pub fn maximum_window_bounds(&self) -> Result<&ScreenBounds> {
        self.bounds.get_or_try_init(|| {
            let bounds = self.provider.maximum_window_bounds()?;
            debug!(
                "Cached maximum window bounds: {}x{} at ({}, {})",
                bounds.width, bounds.height, bounds.x, bounds.y
            );
            Ok(bounds)
        })
    }

    /// Whether the bounds have been computed yet
    pub fn is_cached(&self) -> bool {
        self.bounds.get().is_some()
    }

    /// Drop the cached bounds so the next query asks the provider again
    pub fn reset(&mut self) {
        self.bounds.take();
    }

    /// Full screen size, asked from the provider on every call
    pub fn screen_size(&self) -> Result<Dimension> {
        self.provider.screen_size()
    }

    /// Validate a width/height pair: both positive and within the screen
    pub fn check_bounds(&self, width: i32, height: i32) -> Result<()> {
        require_positive(&[("width", width), ("height", height)])?;
        self.check_against_screen(("width", width), ("height", height))
    }

    /// Validate a location: both coordinates positive and within the screen
    pub fn check_location(&self, x: i32, y: i32) -> Result<()> {
        require_positive(&[("x", x), ("y", y)])?;
        self.check_against_screen(("x", x), ("y", y))
    }

    fn check_against_screen(
        &self,
        (width_name, width_or_x): (&'static str, i32),
        (height_name, height_or_y): (&'static str, i32),
    ) -> Result<()> {
        let bounds = self.maximum_window_bounds()?;
        if width_or_x > bounds.width {
            return Err(BuildError::invalid_geometry(
                width_name,
                width_or_x,
                GeometryViolation::ExceedsScreenWidth(bounds.width),
            ));
        }
        if height_or_y > bounds.height {
            return Err(BuildError::invalid_geometry(
                height_name,
                height_or_y,
                GeometryViolation::ExceedsScreenHeight(bounds.height),
            ));
        }
        Ok(())
    }

    /// Validate `width` x `height` and return it centered on the screen
    pub fn centered(&self, width: i32, height: i32) -> Result<Rect> {
        self.check_bounds(width, height)?;
        let bounds = self.maximum_window_bounds()?;
        Ok(center_within(bounds, width, height))
    }
}

/// Place a `width` x `height` rectangle in the middle of `bounds`.
///
/// Only the screen dimensions matter; the screen origin is not added.
pub fn center_within(bounds: &ScreenBounds, width: i32, height: i32) -> Rect {
    let x = (bounds.width - width) / 2;
    let y = (bounds.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Random rectangle inside a parent, sized at most half of it
pub fn random_rectangle(parent_width: i32, parent_height: i32) -> Result<Rect> {
    random_rectangle_with_ratio(parent_width, parent_height, DEFAULT_RECTANGLE_RATIO)
}

/// Random rectangle whose size is at most `ratio` of the parent's
pub fn random_rectangle_with_ratio(parent_width: i32, parent_height: i32, ratio: f32) -> Result<Rect> {
    random_rectangle_with(&mut rand::thread_rng(), parent_width, parent_height, ratio)
}

/// Sample a rectangle relative to a `parent_width` x `parent_height` parent.
///
/// `x` is uniform in `[0, parent_width)`, `y` in `[0, parent_height)`,
/// `width` in `[0, parent_width * ratio)` and `height` in
/// `[0, parent_height * ratio)`. The result is not clipped to the parent, so
/// it may extend past the parent's right or bottom edge.
pub fn random_rectangle_with<R: Rng + ?Sized>(
    rng: &mut R,
    parent_width: i32,
    parent_height: i32,
    ratio: f32,
) -> Result<Rect> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(BuildError::invalid_argument(
            "ratio",
            format!("ratio must be in (0, 1], got {}", ratio),
        ));
    }
    for (name, value) in [("parent_width", parent_width), ("parent_height", parent_height)] {
        if value <= 0 {
            return Err(BuildError::invalid_argument(
                name,
                format!("parent dimension must be positive, got {}", value),
            ));
        }
    }

    let max_width = (parent_width as f32 * ratio) as i32;
    let max_height = (parent_height as f32 * ratio) as i32;
    if max_width <= 0 || max_height <= 0 {
        return Err(BuildError::invalid_argument(
            "ratio",
            format!(
                "{}x{} scaled by {} leaves no room for a rectangle",
                parent_width, parent_height, ratio
            ),
        ));
    }

    Ok(Rect::new(
        rng.gen_range(0..parent_width),
        rng.gen_range(0..parent_height),
        rng.gen_range(0..max_width),
        rng.gen_range(0..max_height),
    ))
}

static GLOBAL_GEOMETRY: OnceCell<GeometryService> = OnceCell::new();

/// Install the process-wide geometry service.
///
/// Fails if a service was already installed; the first one stays in place.
pub fn init_global_geometry(service: GeometryService) -> Result<()> {
    GLOBAL_GEOMETRY
        .set(service)
        .map_err(|_| BuildError::construction("global geometry service is already initialized"))
}

/// The process-wide geometry service, if one was installed
pub fn global_geometry() -> Option<&'static GeometryService> {
    GLOBAL_GEOMETRY.get()
}

/// The process-wide geometry service, installing the one built by `init`
/// if none is installed yet. `init` runs at most once per process.
pub fn global_geometry_or_init<F>(init: F) -> &'static GeometryService
where
    F: FnOnce() -> GeometryService,
{
    GLOBAL_GEOMETRY.get_or_init(init)
}
