//! Component tree types: widgets, containers and scroll panes.
//!
//! These are toolkit-independent descriptions. A host backend turns a
//! finished tree into real widgets; the builders only assemble it.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Dimension, Point};

/// Well-known position keys for [`Layout::Border`].
///
/// Position keys are opaque strings; other layouts may ignore them.
pub mod position {
    pub const NORTH: &str = "north";
    pub const SOUTH: &str = "south";
    pub const EAST: &str = "east";
    pub const WEST: &str = "west";
    pub const CENTER: &str = "center";
}

/// Stacking direction for box layouts and separators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Layout strategy of a container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Layout {
    /// Children laid out left to right in insertion order
    #[default]
    Flow,
    /// Five regions addressed by the keys in [`position`]
    Border,
    /// Fixed grid filled row by row
    Grid { rows: u32, columns: u32 },
    /// Single row or column
    Box { orientation: Orientation },
    /// Children placed at their explicit locations
    Absolute,
}

/// Decorative border drawn around a component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "border", rename_all = "snake_case")]
pub enum Border {
    Empty {
        top: i32,
        left: i32,
        bottom: i32,
        right: i32,
    },
    Line {
        color: Color,
        thickness: i32,
    },
    Titled {
        title: String,
    },
    Etched,
}

impl Border {
    /// Equal empty padding on all four sides
    pub fn empty(padding: i32) -> Self {
        Border::Empty {
            top: padding,
            left: padding,
            bottom: padding,
            right: padding,
        }
    }

    pub fn line(color: Color, thickness: i32) -> Self {
        Border::Line { color, thickness }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Border::Titled {
            title: title.into(),
        }
    }
}

/// Scroll bar display policy of a scroll pane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPolicy {
    AlwaysShow,
    NeverShow,
    #[default]
    ShowAsNeeded,
}

/// Name of a component, used to refer to it from elsewhere in the tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ComponentRef(pub String);

impl ComponentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Attributes every component carries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ComponentAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_size: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Ask the host to give this component keyboard focus when shown
    #[serde(default)]
    pub request_focus: bool,
}

/// Leaf widget variants understood by the hosts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum WidgetKind {
    Label {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        foreground: Option<Color>,
    },
    Button {
        label: String,
    },
    TextField {
        text: String,
        columns: u32,
    },
    TextArea {
        text: String,
        rows: u32,
        columns: u32,
        #[serde(default)]
        wrap: bool,
    },
    Separator {
        orientation: Orientation,
    },
    /// Host-specific widget; `properties` is passed through untouched
    Custom {
        kind: String,
        #[serde(default)]
        properties: serde_json::Value,
    },
}

/// A leaf component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Widget {
    #[serde(default)]
    pub attrs: ComponentAttrs,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            attrs: ComponentAttrs::default(),
            kind,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(WidgetKind::Label {
            text: text.into(),
            foreground: None,
        })
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(WidgetKind::Button {
            label: label.into(),
        })
    }

    pub fn text_field(text: impl Into<String>, columns: u32) -> Self {
        Self::new(WidgetKind::TextField {
            text: text.into(),
            columns,
        })
    }

    pub fn text_area(text: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self::new(WidgetKind::TextArea {
            text: text.into(),
            rows,
            columns,
            wrap: false,
        })
    }

    pub fn separator(orientation: Orientation) -> Self {
        Self::new(WidgetKind::Separator { orientation })
    }

    pub fn custom(kind: impl Into<String>, properties: serde_json::Value) -> Self {
        Self::new(WidgetKind::Custom {
            kind: kind.into(),
            properties,
        })
    }

    /// Give the widget a name so it can be found with [`Component::find`]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.attrs.name = Some(name.into());
        self
    }

    /// Set the text color of a label; other widgets are left unchanged
    pub fn with_foreground(mut self, color: Color) -> Self {
        if let WidgetKind::Label { foreground, .. } = &mut self.kind {
            *foreground = Some(color);
        }
        self
    }

    /// Editable text content, for text fields and text areas
    pub fn editable_text(&self) -> Option<&str> {
        match &self.kind {
            WidgetKind::TextField { text, .. } | WidgetKind::TextArea { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A child placed in a container, optionally at a layout position key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Child {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub component: Component,
}

/// A component that lays out children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Container {
    #[serde(default)]
    pub attrs: ComponentAttrs,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl Container {
    pub fn new(layout: Layout) -> Self {
        Self {
            attrs: ComponentAttrs::default(),
            layout,
            children: Vec::new(),
        }
    }

    /// Plain panel with flow layout
    pub fn panel() -> Self {
        Self::new(Layout::Flow)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.attrs.name = Some(name.into());
        self
    }

    /// Append a child; insertion order is layout order
    pub fn add(&mut self, position: Option<String>, component: Component) {
        self.children.push(Child {
            position,
            component,
        });
    }
}

/// Scrollable frame wrapping exactly one view component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollPane {
    #[serde(default)]
    pub attrs: ComponentAttrs,
    pub view: Box<Component>,
    #[serde(default)]
    pub vertical_policy: ScrollPolicy,
    #[serde(default)]
    pub horizontal_policy: ScrollPolicy,
}

impl ScrollPane {
    /// Wrap `view` with both scroll bars shown as needed
    pub fn new(view: Component) -> Self {
        Self {
            attrs: ComponentAttrs::default(),
            view: Box::new(view),
            vertical_policy: ScrollPolicy::default(),
            horizontal_policy: ScrollPolicy::default(),
        }
    }
}

/// Any node of a component tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Widget(Widget),
    Container(Container),
    ScrollPane(ScrollPane),
}

impl Component {
    pub fn attrs(&self) -> &ComponentAttrs {
        match self {
            Component::Widget(w) => &w.attrs,
            Component::Container(c) => &c.attrs,
            Component::ScrollPane(s) => &s.attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut ComponentAttrs {
        match self {
            Component::Widget(w) => &mut w.attrs,
            Component::Container(c) => &mut c.attrs,
            Component::ScrollPane(s) => &mut s.attrs,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.attrs().name.as_deref()
    }

    /// Depth-first search for a component with the given name, including self
    pub fn find(&self, name: &str) -> Option<&Component> {
        if self.name() == Some(name) {
            return Some(self);
        }
        match self {
            Component::Widget(_) => None,
            Component::Container(c) => c.children.iter().find_map(|child| child.component.find(name)),
            Component::ScrollPane(s) => s.view.find(name),
        }
    }
}

impl From<Widget> for Component {
    fn from(widget: Widget) -> Self {
        Component::Widget(widget)
    }
}

impl From<Container> for Component {
    fn from(container: Container) -> Self {
        Component::Container(container)
    }
}

impl From<ScrollPane> for Component {
    fn from(pane: ScrollPane) -> Self {
        Component::ScrollPane(pane)
    }
}
