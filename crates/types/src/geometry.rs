//! Geometric value types shared by the builders and hosts.

use serde::{Deserialize, Serialize};

/// Integer rectangle in screen coordinates (origin at top-left)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Width/height pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Screen coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maximum usable display area (screen minus panels, docks and taskbars).
///
/// Computed once per process by the geometry service and never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScreenBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<ScreenBounds> for Rect {
    fn from(bounds: ScreenBounds) -> Self {
        bounds.as_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(200, 150, 400, 300);
        assert_eq!(rect.right(), 600);
        assert_eq!(rect.bottom(), 450);
        assert_eq!(rect.size(), Dimension::new(400, 300));
        assert_eq!(rect.origin(), Point::new(200, 150));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(i32::MAX, 0, 10, 10);
        assert_eq!(rect.right(), i32::MAX);
    }
}
