//! Host without a display server
//!
//! Reports a fixed virtual display and keeps every window it is asked to
//! show. Used by tests and by the `--headless` command line mode.

use log::info;

use winforge_core::{BuildError, FixedDisplay, Result, WindowHost};
use winforge_types::{Component, LocationAnchor, Window};

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    display: FixedDisplay,
    shown: Vec<Window>,
}

impl HeadlessHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            display: FixedDisplay::new(width, height),
            shown: Vec::new(),
        }
    }

    /// The display this host reports, for use as a geometry provider
    pub fn display(&self) -> FixedDisplay {
        self.display
    }

    /// Windows shown so far, oldest first
    pub fn shown(&self) -> &[Window] {
        &self.shown
    }
}

impl WindowHost for HeadlessHost {
    fn show(&mut self, window: &Window) -> Result<()> {
        if let Some(LocationAnchor::Component(anchor)) = &window.location_anchor {
            if window.find_component(anchor.as_str()).is_none() {
                return Err(BuildError::construction(format!(
                    "location anchor {:?} does not name a component of window {:?}",
                    anchor.as_str(),
                    window.title
                )));
            }
        }
        info!(
            "Headless host showing {:?} ({} components)",
            window.title,
            window
                .content
                .children
                .iter()
                .map(|child| count_components(&child.component))
                .sum::<usize>()
        );
        self.shown.push(window.clone());
        Ok(())
    }
}

/// Number of components in the tree rooted at `component`, itself included
fn count_components(component: &Component) -> usize {
    1 + match component {
        Component::Widget(_) => 0,
        Component::Container(container) => container
            .children
            .iter()
            .map(|child| count_components(&child.component))
            .sum(),
        Component::ScrollPane(pane) => count_components(&pane.view),
    }
}
