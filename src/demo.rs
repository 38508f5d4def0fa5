//! The window shown by the `winforge` binary

use rand::Rng;

use crate::builder::{request_focus_if_blank, ContainerBuilder, MenuBarBuilder, MenuBuilder, WindowBuilder};
use crate::config::WindowConfig;
use winforge_core::{contrasting_color_with_gap, random_color_with_floor_with, GeometryService, Result};
use winforge_types::{position, Border, Layout, MenuBar, MenuItem, ScrollPolicy, Widget};

pub const HEADING_NAME: &str = "heading";
pub const NOTES_NAME: &str = "notes";
pub const STATUS_NAME: &str = "status";

/// Demo window configured from `config`, ready to build or visualize
pub fn build_demo_window<'g>(geometry: &'g GeometryService, config: &WindowConfig) -> Result<WindowBuilder<'g>> {
    build_demo_window_with(&mut rand::thread_rng(), geometry, config)
}

pub fn build_demo_window_with<'g, R: Rng + ?Sized>(
    rng: &mut R,
    geometry: &'g GeometryService,
    config: &WindowConfig,
) -> Result<WindowBuilder<'g>> {
    let background = random_color_with_floor_with(rng, config.brightness_floor)?;
    let foreground = contrasting_color_with_gap(background, config.contrast_gap);

    let mut notes = Widget::text_area("", 12, 48).named(NOTES_NAME);
    request_focus_if_blank(&mut [&mut notes]);

    let scroll = ContainerBuilder::new(geometry, move || notes)
        .with_name("notes-scroll")
        .with_border(|| Border::titled("Notes"))
        .with_vertical_scroll_bar_policy(ScrollPolicy::AlwaysShow)
        .with_horizontal_scroll_bar_policy(ScrollPolicy::NeverShow)
        .build();

    let builder = WindowBuilder::with_layout(geometry, || Layout::Border)?
        .with_title(config.title.as_str())
        .with_frame_size(config.width, config.height)?
        .with_resizable(config.resizable)
        .with_default_close_operation(config.close_operation)
        .with_background_color(background)
        .with_menu_bar(demo_menu_bar)
        .with_component_at(position::NORTH, || {
            Widget::label(config.title.as_str())
                .named(HEADING_NAME)
                .with_foreground(foreground)
        })
        .with_component_at(position::CENTER, move || scroll)
        .with_component_at(position::SOUTH, || {
            Widget::label(format!("Background {}", background.to_hex()))
                .named(STATUS_NAME)
                .with_foreground(foreground)
        })
        .with_location_relative_to(None);

    Ok(builder)
}

fn demo_menu_bar() -> MenuBar {
    MenuBarBuilder::new()
        .with_menu(|| {
            MenuBuilder::new("File")
                .with_menu_item(|| MenuItem::new("New").with_action("app.new").disabled())
                .with_separator()
                .with_menu_item(|| {
                    MenuItem::new("Quit")
                        .with_action("app.quit")
                        .with_accelerator("<Control>q")
                })
                .build()
        })
        .with_menu(|| {
            MenuBuilder::new("Help")
                .with_menu_item(|| MenuItem::new("About").with_action("app.about").disabled())
                .build()
        })
        .build()
}
