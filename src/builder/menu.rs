//! Menu and menu bar builders

use winforge_types::{Menu, MenuBar, MenuEntry};

/// Accumulates entries into one named menu.
///
/// ```ignore
/// let file = MenuBuilder::new("File")
///     .with_menu_item(|| MenuItem::new("Open").with_action("app.open"))
///     .with_separator()
///     .with_menu_item(|| MenuItem::new("Quit").with_action("app.quit"))
///     .build();
/// ```
pub struct MenuBuilder {
    menu: Menu,
}

impl MenuBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            menu: Menu::new(name),
        }
    }

    /// Append the entry produced by `item_factory`, evaluated immediately
    pub fn with_menu_item<F, E>(mut self, item_factory: F) -> Self
    where
        F: FnOnce() -> E,
        E: Into<MenuEntry>,
    {
        self.menu.entries.push(item_factory().into());
        self
    }

    pub fn with_separator(mut self) -> Self {
        self.menu.entries.push(MenuEntry::Separator);
        self
    }

    pub fn build(self) -> Menu {
        self.menu
    }
}

/// Accumulates menus into a menu bar, in call order
#[derive(Default)]
pub struct MenuBarBuilder {
    menu_bar: MenuBar,
}

impl MenuBarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the menu produced by `menu_factory`, evaluated immediately
    pub fn with_menu<F>(mut self, menu_factory: F) -> Self
    where
        F: FnOnce() -> Menu,
    {
        self.menu_bar.menus.push(menu_factory());
        self
    }

    pub fn build(self) -> MenuBar {
        self.menu_bar
    }
}
