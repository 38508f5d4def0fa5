//! Fluent builders for windows, containers and menus
//!
//! Each builder owns a draft of exactly one artifact. Configuration calls
//! take the builder by value and hand it back, and `build`/`visualize`
//! consume it, so a finished builder cannot be reused.
//!
//! Size and position arguments are validated against the cached screen
//! bounds when they are passed in, never clamped.

mod container;
mod menu;
mod window;

pub use container::ContainerBuilder;
pub use menu::{MenuBarBuilder, MenuBuilder};
pub use window::WindowBuilder;

use log::debug;
use winforge_types::Widget;

/// Ask for initial focus on every text widget whose text is blank.
///
/// Returns how many widgets were marked. Widgets without editable text are
/// skipped.
pub fn request_focus_if_blank(widgets: &mut [&mut Widget]) -> usize {
    let mut marked = 0;
    for widget in widgets.iter_mut() {
        if widget.editable_text().is_some_and(|text| text.trim().is_empty()) {
            widget.attrs.request_focus = true;
            marked += 1;
        }
    }
    debug!("Requested focus on {} blank text widgets", marked);
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_focus_if_blank() {
        let mut name = Widget::text_field("  ", 20);
        let mut bio = Widget::text_area("Hello", 4, 40);
        let mut notes = Widget::text_area("", 4, 40);
        let mut label = Widget::label("");

        let marked = request_focus_if_blank(&mut [&mut name, &mut bio, &mut notes, &mut label]);

        assert_eq!(marked, 2);
        assert!(name.attrs.request_focus);
        assert!(!bio.attrs.request_focus);
        assert!(notes.attrs.request_focus);
        assert!(!label.attrs.request_focus);
    }
}
