//! Capabilities consumed from the host windowing toolkit

use crate::error::Result;
use winforge_types::{Dimension, ScreenBounds, Window};

/// Source of display geometry
///
/// Implementations query the windowing system. The geometry service calls
/// [`DisplayProvider::maximum_window_bounds`] once and caches the answer.
pub trait DisplayProvider: Send + Sync {
    /// Largest area a window may occupy (screen minus panels and docks)
    fn maximum_window_bounds(&self) -> Result<ScreenBounds>;

    /// Full size of the primary screen
    fn screen_size(&self) -> Result<Dimension> {
        let bounds = self.maximum_window_bounds()?;
        Ok(Dimension::new(bounds.width, bounds.height))
    }
}

/// Display with a fixed, known geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub bounds: ScreenBounds,
    pub screen: Dimension,
}

impl FixedDisplay {
    /// Display whose usable area is the whole `width` x `height` screen
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: ScreenBounds::new(0, 0, width, height),
            screen: Dimension::new(width, height),
        }
    }

    /// Display with a reserved strip (e.g. a taskbar) outside `bounds`
    pub fn with_usable_area(screen: Dimension, bounds: ScreenBounds) -> Self {
        Self { bounds, screen }
    }
}

impl DisplayProvider for FixedDisplay {
    fn maximum_window_bounds(&self) -> Result<ScreenBounds> {
        Ok(self.bounds)
    }

    fn screen_size(&self) -> Result<Dimension> {
        Ok(self.screen)
    }
}

/// Something that can make a finished window visible
///
/// Hosts are driven from the UI thread only and need not be `Send`.
pub trait WindowHost {
    /// Realize and show `window`. Toolkit failures surface as
    /// [`BuildError::Construction`](crate::BuildError::Construction).
    fn show(&mut self, window: &Window) -> Result<()>;
}
