//! Shared constants for builders and helpers

/// Width of a freshly created window before any sizing call
pub const DEFAULT_FRAME_WIDTH: i32 = 300;

/// Height of a freshly created window before any sizing call
pub const DEFAULT_FRAME_HEIGHT: i32 = 300;

/// Channel distance used by the contrasting-color heuristic
pub const DEFAULT_CONTRAST_GAP: u8 = 100;

/// Child rectangle size relative to its parent for random rectangles
pub const DEFAULT_RECTANGLE_RATIO: f32 = 0.5;

/// Default lower bound (inclusive) for random integers
pub const DEFAULT_LOWER_BOUND: i32 = 0;

/// Default upper bound (exclusive) for random integers
pub const DEFAULT_UPPER_BOUND: i32 = 1000;
