use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use winforge::config::AppConfig;
use winforge::demo::build_demo_window;
use winforge::host::HeadlessHost;
use winforge_core::{global_geometry_or_init, GeometryService};

#[cfg(feature = "gtk")]
const APP_ID: &str = "org.winforge.Demo";

/// winforge - Build and show a demo window from a JSON config
#[derive(Parser, Debug, Clone)]
#[command(name = "winforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the window on a virtual display instead of the desktop
    #[arg(long = "headless")]
    headless: bool,

    /// Print the finalized window as JSON
    #[arg(long = "dump")]
    dump: bool,

    /// Window title (overrides the config)
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Frame size (e.g., --size=640x480)
    #[arg(short = 's', long = "size", value_name = "WxH", value_parser = parse_size)]
    size: Option<(i32, i32)>,

    /// List available displays
    #[arg(short = 'l', long = "list-displays")]
    list_displays: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse size string "WxH" into (i32, i32)
fn parse_size(s: &str) -> std::result::Result<(i32, i32), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected format: WxH (e.g., 640x480), got: {}", s))?;
    let width = width
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid width: {}", e))?;
    let height = height
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid height: {}", e))?;
    Ok((width, height))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting winforge v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    if cli.list_displays {
        return list_displays(&cli, &config);
    }

    if cli.headless || !cfg!(feature = "gtk") {
        if !cli.headless {
            warn!("Built without the gtk feature, showing the window headless");
        }
        return run_headless(&cli, &config);
    }

    #[cfg(feature = "gtk")]
    run_gtk(cli, config);

    Ok(())
}

/// Config from `--config` or the user config directory, with CLI overrides applied
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load().context("Failed to load user config")?,
    };

    if let Some(title) = &cli.title {
        config.window.title = title.clone();
    }
    if let Some((width, height)) = cli.size {
        config.window.width = width;
        config.window.height = height;
    }
    Ok(config)
}

fn list_displays(cli: &Cli, config: &AppConfig) -> Result<()> {
    if cli.headless || !cfg!(feature = "gtk") {
        println!("Available displays (1):");
        println!();
        println!(
            "0 - virtual {}x{} at (0, 0)",
            config.display.width, config.display.height
        );
        return Ok(());
    }

    #[cfg(feature = "gtk")]
    {
        gtk4::init().context("Failed to initialize GTK")?;
        let lines = winforge::host::describe_monitors()?;
        println!("Available displays ({}):", lines.len());
        println!();
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_headless(cli: &Cli, config: &AppConfig) -> Result<()> {
    let mut host = HeadlessHost::new(config.display.width, config.display.height);
    let display = host.display();
    let geometry = global_geometry_or_init(|| GeometryService::new(display));

    let window = build_demo_window(geometry, &config.window)?.visualize(&mut host)?;

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&window)?);
    } else {
        println!(
            "Showed {:?} at {}x{}+{}+{}",
            window.title, window.bounds.width, window.bounds.height, window.bounds.x, window.bounds.y
        );
    }
    Ok(())
}

#[cfg(feature = "gtk")]
fn run_gtk(cli: Cli, config: AppConfig) {
    use gtk4::gio;
    use gtk4::prelude::*;
    use gtk4::Application;
    use log::error;
    use winforge::host::{GtkDisplay, GtkHost};

    let app = Application::builder().application_id(APP_ID).build();
    // Screen bounds are queried on first use, after GTK is up
    let geometry = global_geometry_or_init(|| GeometryService::new(GtkDisplay));

    app.connect_activate(move |app| {
        let quit = gio::SimpleAction::new("quit", None);
        let app_for_quit = app.clone();
        quit.connect_activate(move |_, _| app_for_quit.quit());
        app.add_action(&quit);

        let shown = GtkHost::new(app).and_then(|mut host| {
            build_demo_window(geometry, &config.window)?.visualize(&mut host)
        });
        match shown {
            Ok(window) if cli.dump => match serde_json::to_string_pretty(&window) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize window: {}", e),
            },
            Ok(_) => {}
            Err(e) => {
                error!("Failed to show window: {}", e);
                app.quit();
            }
        }
    });

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["winforge"]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("640x480"), Ok((640, 480)));
        assert_eq!(parse_size(" 800 X 600 "), Ok((800, 600)));
        assert!(parse_size("640").is_err());
        assert!(parse_size("wide x 480").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["winforge", "--headless", "--title", "Scratch", "--size", "400x300"]);
        let dir = std::env::temp_dir().join(format!("winforge-cli-{}", std::process::id()));
        let path = dir.join("config.json");
        AppConfig::default().save_to_path(&path).unwrap();

        let cli = Cli {
            config: Some(path),
            ..cli
        };
        let config = load_config(&cli).unwrap();
        assert_eq!(config.window.title, "Scratch");
        assert_eq!((config.window.width, config.window.height), (400, 300));

        std::fs::remove_dir_all(&dir).ok();
    }
}
