//! Menu bar, menu and menu item types.
//!
//! Order of entries is insertion order and is the visual order.

use serde::{Deserialize, Serialize};

/// A clickable menu entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Keyboard shortcut in host notation, e.g. `<Control>q`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    /// Action name the host dispatches when the item is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accelerator: None,
            action: None,
            enabled: true,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One entry in a menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
    Submenu(Menu),
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

impl From<Menu> for MenuEntry {
    fn from(menu: Menu) -> Self {
        MenuEntry::Submenu(menu)
    }
}

/// A named, ordered list of entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Clickable items only, skipping separators and submenus
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            _ => None,
        })
    }
}

/// An ordered list of menus shown along the top of a window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MenuBar {
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl MenuBar {
    pub fn menu(&self, name: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.name == name)
    }
}
