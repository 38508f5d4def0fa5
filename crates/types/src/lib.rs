//! winforge-types: Shared data types for winforge.
//!
//! This crate contains pure data types (colors, geometry, component trees,
//! menus and windows) shared by the builders and the host backends. They
//! have no toolkit dependencies, making them suitable as a foundation layer.

pub mod color;
pub mod component;
pub mod geometry;
pub mod menu;
pub mod window;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, RGB_MAX, RGB_MID};
pub use component::{
    position, Border, Child, Component, ComponentAttrs, ComponentRef, Container, Layout,
    Orientation, ScrollPane, ScrollPolicy, Widget, WidgetKind,
};
pub use geometry::{Dimension, Point, Rect, ScreenBounds};
pub use menu::{Menu, MenuBar, MenuEntry, MenuItem};
pub use window::{CloseOperation, LocationAnchor, Window};
