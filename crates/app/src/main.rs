use std::sync::Arc;

use checkup_core::Catalog;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::load_catalog;
use tracing::info;
use ui::{App, Format, UiApp, build_app_context};

mod cli;
mod telemetry;

use cli::Cli;

struct DesktopApp {
    catalog: Catalog,
    format: Format,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn format(&self) -> Format {
        self.format
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    telemetry::init(&cli.log_level)?;

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let format = cli.resolved_format();
    info!(%format, width = cli.width, height = cli.height, "launching legal checkup");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { catalog, format });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Legal Checkup")
            .with_inner_size(LogicalSize::new(f64::from(cli.width), f64::from(cli.height)))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}
