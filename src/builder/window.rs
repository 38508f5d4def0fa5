//! Builder for top-level windows
//!
//! A window starts at 300x300, centered on the screen, and exits the
//! process when closed. Layout and content pane can only be chosen through
//! the constructors, because components are added to the content pane and
//! it has to exist first.
//!
//! ```ignore
//! let geometry = GeometryService::with_bounds(800, 600);
//! let window = WindowBuilder::with_layout(&geometry, || Layout::Border)?
//!     .with_title("Notes")
//!     .with_component_at(position::NORTH, || Widget::label("Today"))
//!     .with_frame_size(400, 300)?
//!     .visualize(&mut host)?;
//! ```

use log::{debug, info};

use winforge_core::{
    center_within, BoxedSource, BuildError, GeometryService, Result, WindowHost,
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
};
use winforge_types::{
    CloseOperation, Color, Component, ComponentRef, Container, Layout, LocationAnchor, MenuBar,
    ScreenBounds, Window,
};

pub struct WindowBuilder<'g> {
    geometry: &'g GeometryService,
    /// Screen bounds captured when the builder was created
    screen: ScreenBounds,
    draft: Window,
}

impl<'g> WindowBuilder<'g> {
    /// Builder with a flow-layout content pane
    pub fn new(geometry: &'g GeometryService) -> Result<Self> {
        let screen = *geometry.maximum_window_bounds()?;
        let draft = Window {
            title: String::new(),
            bounds: geometry.centered(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)?,
            content: Container::panel(),
            menu_bar: None,
            close_operation: CloseOperation::ExitOnClose,
            resizable: true,
            location_anchor: None,
        };
        Ok(Self {
            geometry,
            screen,
            draft,
        })
    }

    /// Builder whose content pane uses the layout from `layout_factory`
    pub fn with_layout<L>(geometry: &'g GeometryService, layout_factory: L) -> Result<Self>
    where
        L: FnOnce() -> Layout,
    {
        let mut builder = Self::new(geometry)?;
        builder.draft.content.layout = layout_factory();
        Ok(builder)
    }

    /// Builder using the container from `content_pane_factory` as content pane
    pub fn with_content_pane<P>(geometry: &'g GeometryService, content_pane_factory: P) -> Result<Self>
    where
        P: FnOnce() -> Container,
    {
        let mut builder = Self::new(geometry)?;
        builder.draft.content = content_pane_factory();
        Ok(builder)
    }

    /// Builder with a custom content pane laid out by `layout_factory`.
    ///
    /// The layout is set on the supplied pane, replacing whatever layout it
    /// came with, so it survives the pane swap.
    pub fn with_layout_and_content_pane<L, P>(
        geometry: &'g GeometryService,
        layout_factory: L,
        content_pane_factory: P,
    ) -> Result<Self>
    where
        L: FnOnce() -> Layout,
        P: FnOnce() -> Container,
    {
        let layout = layout_factory();
        let mut builder = Self::with_content_pane(geometry, content_pane_factory)?;
        builder.draft.content.layout = layout;
        Ok(builder)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = title.into();
        self
    }

    /// Background of the content pane
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.draft.content.attrs.background = Some(color);
        self
    }

    /// Resize the window and re-center it on the screen.
    ///
    /// Every call re-centers, overriding any earlier position.
    pub fn with_frame_size(mut self, width: i32, height: i32) -> Result<Self> {
        self.geometry.check_bounds(width, height)?;
        self.draft.bounds = center_within(&self.screen, width, height);
        debug!(
            "Window frame set to {}x{} at ({}, {})",
            width, height, self.draft.bounds.x, self.draft.bounds.y
        );
        Ok(self)
    }

    /// Add a component to the content pane
    pub fn with_component<F, C>(mut self, child_factory: F) -> Self
    where
        F: FnOnce() -> C,
        C: Into<Component>,
    {
        self.draft.content.add(None, child_factory().into());
        self
    }

    /// Add a component to the content pane at a layout position key
    pub fn with_component_at<F, C>(mut self, position: impl Into<String>, child_factory: F) -> Self
    where
        F: FnOnce() -> C,
        C: Into<Component>,
    {
        self.draft
            .content
            .add(Some(position.into()), child_factory().into());
        self
    }

    /// Add a component from a fallible factory; its error becomes the source
    /// of a construction error.
    pub fn try_with_component<F, C, E>(mut self, child_factory: F) -> Result<Self>
    where
        F: FnOnce() -> std::result::Result<C, E>,
        C: Into<Component>,
        E: Into<BoxedSource>,
    {
        let child = child_factory().map_err(|e| BuildError::wrap("child factory failed", e))?;
        self.draft.content.add(None, child.into());
        Ok(self)
    }

    pub fn with_default_close_operation(mut self, operation: CloseOperation) -> Self {
        self.draft.close_operation = operation;
        self
    }

    pub fn with_menu_bar<F>(mut self, menu_bar_factory: F) -> Self
    where
        F: FnOnce() -> MenuBar,
    {
        self.draft.menu_bar = Some(menu_bar_factory());
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.draft.resizable = resizable;
        self
    }

    /// Place the window relative to a named component, or center it on the
    /// screen when `component` is `None`.
    ///
    /// Component anchors are resolved by the host when the window is shown.
    pub fn with_location_relative_to(mut self, component: Option<ComponentRef>) -> Self {
        match component {
            Some(component) => {
                self.draft.location_anchor = Some(LocationAnchor::Component(component));
            }
            None => {
                let size = self.draft.bounds.size();
                self.draft.bounds = center_within(&self.screen, size.width, size.height);
                self.draft.location_anchor = Some(LocationAnchor::Screen);
            }
        }
        self
    }

    /// Freeze the configuration into a finished window
    pub fn build(self) -> Window {
        let window = self.draft;
        debug!(
            "Finalized window {:?}: {}x{} at ({}, {}), {} top-level components",
            window.title,
            window.bounds.width,
            window.bounds.height,
            window.bounds.x,
            window.bounds.y,
            window.content.children.len()
        );
        window
    }

    /// Finalize and hand the window to `host` to be shown
    pub fn visualize<H>(self, host: &mut H) -> Result<Window>
    where
        H: WindowHost + ?Sized,
    {
        let window = self.build();
        host.show(&window)?;
        info!("Window {:?} is visible", window.title);
        Ok(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ContainerBuilder, MenuBarBuilder, MenuBuilder};
    use crate::host::HeadlessHost;
    use winforge_types::{position, Border, MenuItem, Rect, ScrollPolicy, Widget};

    fn geometry() -> GeometryService {
        GeometryService::with_bounds(800, 600)
    }

    #[test]
    fn test_defaults() {
        let geometry = geometry();
        let window = WindowBuilder::new(&geometry).unwrap().build();

        assert_eq!(window.bounds, Rect::new(250, 150, 300, 300));
        assert_eq!(window.close_operation, CloseOperation::ExitOnClose);
        assert!(window.resizable);
        assert_eq!(window.layout(), &Layout::Flow);
        assert!(window.menu_bar.is_none());
        assert!(window.location_anchor.is_none());
    }

    #[test]
    fn test_screen_smaller_than_default_frame() {
        let geometry = GeometryService::with_bounds(200, 600);
        let err = WindowBuilder::new(&geometry).err().unwrap();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_frame_size_recenters_every_call() {
        let geometry = geometry();
        let window = WindowBuilder::new(&geometry)
            .unwrap()
            .with_frame_size(100, 100)
            .unwrap()
            .with_frame_size(400, 300)
            .unwrap()
            .build();
        assert_eq!(window.bounds, Rect::new(200, 150, 400, 300));
    }

    #[test]
    fn test_frame_size_rejects_out_of_range() {
        let geometry = geometry();
        for (w, h) in [(801, 100), (100, 601), (0, 100), (100, -1)] {
            let err = WindowBuilder::new(&geometry)
                .unwrap()
                .with_frame_size(w, h)
                .err()
                .unwrap();
            assert!(err.is_invalid_geometry(), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_layout_and_content_pane_entry_points() {
        let geometry = geometry();

        let window = WindowBuilder::with_layout(&geometry, || Layout::Border)
            .unwrap()
            .build();
        assert_eq!(window.layout(), &Layout::Border);

        let window = WindowBuilder::with_content_pane(&geometry, || Container::panel().named("pane"))
            .unwrap()
            .build();
        assert_eq!(window.content.attrs.name.as_deref(), Some("pane"));

        let window = WindowBuilder::with_layout_and_content_pane(
            &geometry,
            || Layout::Grid { rows: 2, columns: 2 },
            || Container::new(Layout::Flow).named("grid"),
        )
        .unwrap()
        .build();
        assert_eq!(window.layout(), &Layout::Grid { rows: 2, columns: 2 });
        assert_eq!(window.content.attrs.name.as_deref(), Some("grid"));
    }

    #[test]
    fn test_setters() {
        let geometry = geometry();
        let window = WindowBuilder::new(&geometry)
            .unwrap()
            .with_title("Settings")
            .with_background_color(Color::new(10, 20, 30))
            .with_resizable(false)
            .with_default_close_operation(CloseOperation::HideOnClose)
            .with_menu_bar(|| {
                MenuBarBuilder::new()
                    .with_menu(|| {
                        MenuBuilder::new("File")
                            .with_menu_item(|| MenuItem::new("Close"))
                            .build()
                    })
                    .build()
            })
            .build();

        assert_eq!(window.title, "Settings");
        assert_eq!(window.background(), Some(Color::new(10, 20, 30)));
        assert!(!window.resizable);
        assert_eq!(window.close_operation, CloseOperation::HideOnClose);
        assert_eq!(window.menu_bar.unwrap().menus[0].name, "File");
    }

    #[test]
    fn test_location_relative_to() {
        let geometry = geometry();
        let window = WindowBuilder::new(&geometry)
            .unwrap()
            .with_location_relative_to(Some(ComponentRef::new("sidebar")))
            .build();
        assert_eq!(
            window.location_anchor,
            Some(LocationAnchor::Component(ComponentRef::new("sidebar")))
        );

        let window = WindowBuilder::new(&geometry)
            .unwrap()
            .with_frame_size(200, 100)
            .unwrap()
            .with_location_relative_to(None)
            .build();
        assert_eq!(window.location_anchor, Some(LocationAnchor::Screen));
        assert_eq!(window.bounds, Rect::new(300, 250, 200, 100));
    }

    #[test]
    fn test_fallible_component_factory() {
        let geometry = geometry();
        let err = WindowBuilder::new(&geometry)
            .unwrap()
            .try_with_component(|| -> std::result::Result<Widget, String> {
                Err("font not available".to_string())
            })
            .err()
            .unwrap();
        assert!(err.is_construction());
    }

    #[test]
    fn test_end_to_end_visualize() {
        let geometry = geometry();
        let mut host = HeadlessHost::new(800, 600);

        let window = WindowBuilder::with_layout(&geometry, || Layout::Border)
            .unwrap()
            .with_title("Editor")
            .with_component_at(position::NORTH, || Widget::label("Status").named("status"))
            .with_frame_size(400, 300)
            .unwrap()
            .visualize(&mut host)
            .unwrap();

        assert_eq!(window.title, "Editor");
        assert_eq!(window.bounds, Rect::new(200, 150, 400, 300));
        assert_eq!(window.content.children.len(), 1);
        assert_eq!(window.content.children[0].position.as_deref(), Some(position::NORTH));
        assert!(window.find_component("status").is_some());

        assert_eq!(host.shown().len(), 1);
        assert_eq!(host.shown()[0], window);
    }

    #[test]
    fn test_nested_scrollable_panel() {
        let geometry = geometry();
        let notes = ContainerBuilder::new(&geometry, || Widget::text_area("", 20, 60).named("notes"))
            .with_vertical_scroll_bar_policy(ScrollPolicy::AlwaysShow)
            .with_horizontal_scroll_bar_policy(ScrollPolicy::NeverShow)
            .with_border(|| Border::titled("Notes"))
            .build();

        let window = WindowBuilder::with_layout(&geometry, || Layout::Border)
            .unwrap()
            .with_component_at(position::CENTER, move || notes)
            .build();

        let Some(Component::ScrollPane(pane)) = window.content.children.first().map(|c| &c.component) else {
            panic!("expected the scroll pane at the center");
        };
        assert_eq!(pane.attrs.border, Some(Border::titled("Notes")));
        assert!(window.find_component("notes").is_some());
    }
}
