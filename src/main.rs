#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use shinpyu_core::{content::DEFAULT_DOCUMENT_TITLE, DEFAULT_CONTENT_PATH};

/// Global content document path, set from command line
static CONTENT_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Get the content document path (set from command line or default)
pub fn get_content_path() -> PathBuf {
    CONTENT_PATH
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_PATH))
}

/// Shinpyu Invitation - bilingual flip-book
#[derive(Parser, Debug)]
#[command(name = "shinpyu-desktop")]
#[command(about = "Myanmar Shinpyu invitation presented as a flip-book")]
struct Args {
    /// Content document to show
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 760.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let content_path = args
        .content
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_PATH));
    let _ = CONTENT_PATH.set(content_path.clone());

    tracing::info!("Starting invitation with content: {:?}", content_path);

    // The title is replaced once the content document is loaded
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(DEFAULT_DOCUMENT_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
