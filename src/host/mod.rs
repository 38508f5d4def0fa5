//! Host backends that realize finished windows

mod headless;
#[cfg(feature = "gtk")]
mod gtk;

pub use headless::HeadlessHost;
#[cfg(feature = "gtk")]
pub use gtk::{describe_monitors, GtkDisplay, GtkHost};
