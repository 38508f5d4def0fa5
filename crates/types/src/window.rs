//! Finalized top-level window description.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::component::{Component, ComponentRef, Container, Layout};
use crate::geometry::Rect;
use crate::menu::MenuBar;

/// What happens when the user closes the window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CloseOperation {
    /// Destroy the window, keep the process running
    DisposeOnClose,
    /// Exit the process
    #[default]
    ExitOnClose,
    /// Hide the window without destroying it
    HideOnClose,
    /// Ignore the close request
    DoNothing,
}

/// What a window is placed relative to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "anchor", content = "component", rename_all = "snake_case")]
pub enum LocationAnchor {
    /// Centered on the screen
    Screen,
    /// Centered over a named component, resolved by the host at show time
    Component(ComponentRef),
}

/// A fully configured window, ready to be shown by a host.
///
/// Produced by the window builder; immutable from then on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Window {
    pub title: String,
    pub bounds: Rect,
    pub content: Container,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_bar: Option<MenuBar>,
    #[serde(default)]
    pub close_operation: CloseOperation,
    pub resizable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_anchor: Option<LocationAnchor>,
}

impl Window {
    pub fn layout(&self) -> &Layout {
        &self.content.layout
    }

    pub fn background(&self) -> Option<Color> {
        self.content.attrs.background
    }

    /// Find a named component anywhere in the content tree
    pub fn find_component(&self, name: &str) -> Option<&Component> {
        self.content
            .children
            .iter()
            .find_map(|child| child.component.find(name))
    }
}
