//! GTK4 host backend
//!
//! Realizes finished windows as `ApplicationWindow`s. Everything here must
//! run on the GTK main thread.
//!
//! GTK4 cannot place toplevel windows, so the window position computed by
//! the builder is advisory; only its size is applied.

use gtk4::prelude::*;
use gtk4::{gio, glib, Application, ApplicationWindow, CssProvider, PolicyType};
use log::{debug, info, warn};

use winforge_core::{BuildError, DisplayProvider, Result, WindowHost};
use winforge_types::{
    position, Border, CloseOperation, Component, ComponentAttrs, Container, Layout,
    LocationAnchor, Menu, MenuBar, MenuEntry, Orientation, ScreenBounds, ScrollPolicy, Widget,
    WidgetKind, Window,
};

/// Display geometry of the first monitor
#[derive(Debug, Clone, Copy, Default)]
pub struct GtkDisplay;

impl DisplayProvider for GtkDisplay {
    fn maximum_window_bounds(&self) -> Result<ScreenBounds> {
        // GTK4 has no work-area query; the monitor geometry is the closest.
        let geometry = first_monitor()?.geometry();
        Ok(ScreenBounds::new(
            geometry.x(),
            geometry.y(),
            geometry.width(),
            geometry.height(),
        ))
    }
}

fn first_monitor() -> Result<gdk4::Monitor> {
    let display = gdk4::Display::default()
        .ok_or_else(|| BuildError::construction("could not connect to a display"))?;
    display
        .monitors()
        .item(0)
        .and_then(|obj| obj.downcast::<gdk4::Monitor>().ok())
        .ok_or_else(|| BuildError::construction("display reports no monitors"))
}

/// One line per connected monitor, for `--list-displays`
pub fn describe_monitors() -> Result<Vec<String>> {
    let display = gdk4::Display::default()
        .ok_or_else(|| BuildError::construction("could not connect to a display"))?;
    let monitors = display.monitors();
    let mut lines = Vec::new();
    for i in 0..monitors.n_items() {
        if let Some(monitor) = monitors
            .item(i)
            .and_then(|obj| obj.downcast::<gdk4::Monitor>().ok())
        {
            let geometry = monitor.geometry();
            let connector = monitor
                .connector()
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("Monitor {}", i));
            lines.push(format!(
                "{} - {} {}x{} at ({}, {})",
                i,
                connector,
                geometry.width(),
                geometry.height(),
                geometry.x(),
                geometry.y()
            ));
        }
    }
    Ok(lines)
}

/// CSS rules for the widgets of the window being realized
#[derive(Debug, Default)]
struct StyleSheet {
    next_id: u32,
    pending: String,
}

impl StyleSheet {
    /// Record a rule for the given colors and line border. Returns the widget
    /// name the rule selects, or `None` if there is nothing to style.
    fn add(&mut self, attrs: &ComponentAttrs, foreground: Option<winforge_types::Color>) -> Option<String> {
        let mut declarations = Vec::new();
        if let Some(background) = attrs.background {
            declarations.push(format!("background-color: {};", background.to_hex()));
        }
        if let Some(foreground) = foreground {
            declarations.push(format!("color: {};", foreground.to_hex()));
        }
        if let Some(Border::Line { color, thickness }) = &attrs.border {
            declarations.push(format!("border: {}px solid {};", thickness, color.to_hex()));
        }
        if declarations.is_empty() {
            return None;
        }

        let id = format!("winforge-{}", self.next_id);
        self.next_id += 1;
        self.pending
            .push_str(&format!("#{} {{ {} }}\n", id, declarations.join(" ")));
        Some(id)
    }

    /// Rules recorded since the last call. Ids keep counting up across calls.
    fn take(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }
}

pub struct GtkHost {
    app: Application,
    display: gdk4::Display,
    styles: StyleSheet,
    windows: Vec<ApplicationWindow>,
}

impl GtkHost {
    pub fn new(app: &Application) -> Result<Self> {
        let display = gdk4::Display::default()
            .ok_or_else(|| BuildError::construction("could not connect to a display"))?;
        Ok(Self {
            app: app.clone(),
            display,
            styles: StyleSheet::default(),
            windows: Vec::new(),
        })
    }

    /// Windows realized so far
    pub fn windows(&self) -> &[ApplicationWindow] {
        &self.windows
    }

    /// Give the widget a CSS id and register its colors and line border
    fn style(
        &mut self,
        widget: &gtk4::Widget,
        attrs: &ComponentAttrs,
        foreground: Option<winforge_types::Color>,
    ) {
        if let Some(id) = self.styles.add(attrs, foreground) {
            widget.set_widget_name(&id);
        }
    }

    fn realize(&mut self, component: &Component, focus: &mut Vec<gtk4::Widget>) -> Result<gtk4::Widget> {
        let widget = match component {
            Component::Widget(widget) => self.realize_widget(widget)?,
            Component::Container(container) => self.realize_container(container, focus)?,
            Component::ScrollPane(pane) => {
                let scrolled = gtk4::ScrolledWindow::new();
                scrolled.set_policy(
                    policy_type(pane.horizontal_policy),
                    policy_type(pane.vertical_policy),
                );
                let view = self.realize(&pane.view, focus)?;
                scrolled.set_child(Some(&view));
                scrolled.upcast()
            }
        };

        let attrs = component.attrs();
        let foreground = match component {
            Component::Widget(Widget {
                kind: WidgetKind::Label { foreground, .. },
                ..
            }) => *foreground,
            _ => None,
        };
        self.style(&widget, attrs, foreground);
        if attrs.request_focus {
            focus.push(widget.clone());
        }
        Ok(apply_attrs(widget, attrs))
    }

    fn realize_widget(&mut self, widget: &Widget) -> Result<gtk4::Widget> {
        let realized: gtk4::Widget = match &widget.kind {
            WidgetKind::Label { text, .. } => gtk4::Label::new(Some(text.as_str())).upcast(),
            WidgetKind::Button { label } => gtk4::Button::with_label(label).upcast(),
            WidgetKind::TextField { text, columns } => {
                let entry = gtk4::Entry::new();
                entry.set_text(text);
                entry.set_width_chars(*columns as i32);
                entry.upcast()
            }
            WidgetKind::TextArea { text, wrap, .. } => {
                let view = gtk4::TextView::new();
                view.buffer().set_text(text);
                if *wrap {
                    view.set_wrap_mode(gtk4::WrapMode::Word);
                }
                view.upcast()
            }
            WidgetKind::Separator { orientation } => {
                gtk4::Separator::new(gtk_orientation(*orientation)).upcast()
            }
            WidgetKind::Custom { kind, .. } => {
                return Err(BuildError::construction(format!(
                    "GTK host has no widget for custom kind {:?}",
                    kind
                )));
            }
        };
        Ok(realized)
    }

    fn realize_container(
        &mut self,
        container: &Container,
        focus: &mut Vec<gtk4::Widget>,
    ) -> Result<gtk4::Widget> {
        let mut children = Vec::with_capacity(container.children.len());
        for child in &container.children {
            let location = child.component.attrs().location;
            let widget = self.realize(&child.component, focus)?;
            children.push((child.position.as_deref(), location, widget));
        }

        let realized: gtk4::Widget = match &container.layout {
            Layout::Flow => {
                let flow = gtk4::FlowBox::new();
                flow.set_selection_mode(gtk4::SelectionMode::None);
                for (_, _, widget) in &children {
                    flow.append(widget);
                }
                flow.upcast()
            }
            Layout::Box { orientation } => {
                let row = gtk4::Box::new(gtk_orientation(*orientation), 6);
                for (_, _, widget) in &children {
                    row.append(widget);
                }
                row.upcast()
            }
            Layout::Grid { rows, columns } => {
                let grid = gtk4::Grid::new();
                let columns = (*columns).max(1) as i32;
                for (i, (_, _, widget)) in children.iter().enumerate() {
                    let i = i as i32;
                    grid.attach(widget, i % columns, i / columns, 1, 1);
                }
                if *rows > 0 && children.len() as u32 > rows * columns as u32 {
                    warn!(
                        "Grid of {}x{} holds {} children; extra rows were added",
                        rows,
                        columns,
                        children.len()
                    );
                }
                grid.upcast()
            }
            Layout::Border => {
                let grid = gtk4::Grid::new();
                for (key, _, widget) in &children {
                    let (column, row, width) = match key.unwrap_or(position::CENTER) {
                        position::NORTH => (0, 0, 3),
                        position::WEST => (0, 1, 1),
                        position::CENTER => (1, 1, 1),
                        position::EAST => (2, 1, 1),
                        position::SOUTH => (0, 2, 3),
                        other => {
                            return Err(BuildError::construction(format!(
                                "border layout has no position {:?}",
                                other
                            )));
                        }
                    };
                    if row == 1 && column == 1 {
                        widget.set_hexpand(true);
                        widget.set_vexpand(true);
                    }
                    grid.attach(widget, column, row, width, 1);
                }
                grid.upcast()
            }
            Layout::Absolute => {
                let fixed = gtk4::Fixed::new();
                for (_, location, widget) in &children {
                    let (x, y) = location.map(|p| (p.x, p.y)).unwrap_or((0, 0));
                    fixed.put(widget, x as f64, y as f64);
                }
                fixed.upcast()
            }
        };
        Ok(realized)
    }

    fn menu_bar(&self, menu_bar: &MenuBar) -> gtk4::PopoverMenuBar {
        let root = gio::Menu::new();
        for menu in &menu_bar.menus {
            root.append_submenu(Some(menu.name.as_str()), &self.menu_model(menu));
        }
        gtk4::PopoverMenuBar::from_model(Some(&root))
    }

    fn menu_model(&self, menu: &Menu) -> gio::Menu {
        let model = gio::Menu::new();
        let mut section = gio::Menu::new();
        for entry in &menu.entries {
            match entry {
                MenuEntry::Item(item) => {
                    let action = item.action.as_deref().filter(|_| item.enabled);
                    section.append(Some(item.label.as_str()), action);
                    if let (Some(action), Some(accelerator)) = (action, item.accelerator.as_deref()) {
                        self.app.set_accels_for_action(action, &[accelerator]);
                    }
                }
                MenuEntry::Separator => {
                    model.append_section(None, &section);
                    section = gio::Menu::new();
                }
                MenuEntry::Submenu(submenu) => {
                    section.append_submenu(Some(submenu.name.as_str()), &self.menu_model(submenu));
                }
            }
        }
        model.append_section(None, &section);
        model
    }
}

impl WindowHost for GtkHost {
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

        let mut focus = Vec::new();
        let content = self.realize(&Component::Container(window.content.clone()), &mut focus)?;
        content.set_hexpand(true);
        content.set_vexpand(true);

        let root = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        if let Some(menu_bar) = &window.menu_bar {
            root.append(&self.menu_bar(menu_bar));
        }
        root.append(&content);

        let gtk_window = ApplicationWindow::builder()
            .application(&self.app)
            .title(window.title.as_str())
            .default_width(window.bounds.width)
            .default_height(window.bounds.height)
            .resizable(window.resizable)
            .build();
        gtk_window.set_child(Some(&root));
        if let Some(LocationAnchor::Component(anchor)) = &window.location_anchor {
            warn!(
                "GTK4 cannot place toplevels; ignoring placement relative to {:?}",
                anchor.as_str()
            );
        } else {
            debug!(
                "Requested position ({}, {}) is advisory under GTK4",
                window.bounds.x, window.bounds.y
            );
        }

        let app = self.app.clone();
        let operation = window.close_operation;
        gtk_window.connect_close_request(move |w| match operation {
            CloseOperation::DisposeOnClose => glib::Propagation::Proceed,
            CloseOperation::ExitOnClose => {
                app.quit();
                glib::Propagation::Proceed
            }
            CloseOperation::HideOnClose => {
                w.set_visible(false);
                glib::Propagation::Stop
            }
            CloseOperation::DoNothing => glib::Propagation::Stop,
        });

        // One provider per window, holding only that window's rules
        let rules = self.styles.take();
        if !rules.is_empty() {
            let css = CssProvider::new();
            css.load_from_data(&rules);
            gtk4::style_context_add_provider_for_display(
                &self.display,
                &css,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        gtk_window.present();
        for widget in focus {
            widget.grab_focus();
        }

        info!("GTK host presented {:?}", window.title);
        self.windows.push(gtk_window);
        Ok(())
    }
}

/// Apply size, margins and frame borders; may wrap `widget` in a frame
fn apply_attrs(widget: gtk4::Widget, attrs: &ComponentAttrs) -> gtk4::Widget {
    if let Some(size) = attrs.size.or(attrs.preferred_size) {
        widget.set_size_request(size.width, size.height);
    }
    match &attrs.border {
        Some(Border::Empty {
            top,
            left,
            bottom,
            right,
        }) => {
            widget.set_margin_top(*top);
            widget.set_margin_start(*left);
            widget.set_margin_bottom(*bottom);
            widget.set_margin_end(*right);
            widget
        }
        Some(Border::Titled { title }) => {
            let frame = gtk4::Frame::new(Some(title.as_str()));
            frame.set_child(Some(&widget));
            frame.upcast()
        }
        Some(Border::Etched) => {
            let frame = gtk4::Frame::new(None);
            frame.set_child(Some(&widget));
            frame.upcast()
        }
        Some(Border::Line { .. }) | None => widget,
    }
}

fn policy_type(policy: ScrollPolicy) -> PolicyType {
    match policy {
        ScrollPolicy::AlwaysShow => PolicyType::Always,
        ScrollPolicy::NeverShow => PolicyType::Never,
        ScrollPolicy::ShowAsNeeded => PolicyType::Automatic,
    }
}

fn gtk_orientation(orientation: Orientation) -> gtk4::Orientation {
    match orientation {
        Orientation::Horizontal => gtk4::Orientation::Horizontal,
        Orientation::Vertical => gtk4::Orientation::Vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winforge_types::Color;

    fn with_background(color: Color) -> ComponentAttrs {
        ComponentAttrs {
            background: Some(color),
            ..ComponentAttrs::default()
        }
    }

    #[test]
    fn test_style_sheet_skips_unstyled_widgets() {
        let mut styles = StyleSheet::default();
        assert_eq!(styles.add(&ComponentAttrs::default(), None), None);
        assert!(styles.take().is_empty());
    }

    #[test]
    fn test_style_sheet_rules_do_not_carry_over_between_windows() {
        let mut styles = StyleSheet::default();

        let first = styles.add(&with_background(Color::BLACK), None).unwrap();
        let first_rules = styles.take();
        assert!(first_rules.contains(&format!("#{}", first)));
        assert!(first_rules.contains("background-color: #000000;"));

        let second = styles.add(&with_background(Color::WHITE), Some(Color::BLACK)).unwrap();
        let second_rules = styles.take();
        assert_ne!(first, second);
        assert!(!second_rules.contains(&format!("#{} ", first)));
        assert!(second_rules.contains(&format!("#{} ", second)));
        assert!(second_rules.contains("color: #000000;"));
        assert_eq!(second_rules.lines().count(), 1);
    }
}
