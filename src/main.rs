#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use majlis_core::PAGE_TITLE;
use tracing_subscriber::EnvFilter;

/// Al-Majlis - a digital welcome screen
#[derive(Parser, Debug)]
#[command(name = "majlis-desktop")]
#[command(about = "Al-Majlis - Arabic greetings with a selectable vibe")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting '{}' ({}x{})",
        PAGE_TITLE,
        args.width,
        args.height
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(PAGE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
