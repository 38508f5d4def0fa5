//! winforge: Fluent builders for desktop windows
//!
//! This library provides:
//! - Window, container and menu builders that validate geometry eagerly
//! - Host backends that realize finished windows (headless, and GTK4 behind
//!   the `gtk` feature)
//! - Configuration management
//! - The demo window shown by the `winforge` binary

pub mod builder;
pub mod config;
pub mod demo;
pub mod host;

// Re-export commonly used types
pub use builder::{ContainerBuilder, MenuBarBuilder, MenuBuilder, WindowBuilder};
pub use config::AppConfig;
pub use host::HeadlessHost;
pub use winforge_core::{BuildError, GeometryService, Result};
