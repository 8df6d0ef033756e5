//! Shinpyu Invitation CLI
//!
//! Thin wrapper around shinpyu-core for checking a content document before
//! it goes out with the invitation.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the content document
//! shinpyu --content ./data/content.json check
//!
//! # Print the Myanmar ceremony page as text
//! shinpyu render --locale mm
//!
//! # Turn every page and show the book state after each flip
//! shinpyu walk
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use shinpyu_core::{
    ceremony_blocks, load, load_or_fallback, BookNavigator, InvitationContent, Locale, PageText,
    TextSlot, DEFAULT_CONTENT_PATH, TOTAL_LEAVES,
};

/// Shinpyu Invitation - bilingual flip-book content tools
#[derive(Parser)]
#[command(name = "shinpyu")]
#[command(version = "0.1.0")]
#[command(about = "Shinpyu Invitation - bilingual flip-book content tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Content document (default: ./data/content.json)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the content document strictly and summarize it
    Check,

    /// Print the ceremony page for a locale
    Render {
        /// Locale to render (mm or en)
        #[arg(short, long, default_value = "en")]
        locale: Locale,
    },

    /// Turn through the whole book, printing indicator and stacking order
    Walk,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_summary(path: &Path, content: &InvitationContent) {
    let text = PageText::from_content(content);

    println!("Content: {}", path.display());
    println!("  Title: {}", content.document_title());
    println!(
        "  Event: {}",
        if content.event.is_some() { "present" } else { "missing" }
    );
    println!(
        "  General: {}",
        if content.general.is_some() { "present" } else { "missing" }
    );
    println!("  Ceremonies: {}", content.ceremonies.as_ref().map_or(0, Vec::len));

    let empty: Vec<_> = TextSlot::ALL
        .iter()
        .filter(|slot| text.get(**slot).is_empty())
        .map(|slot| slot.element_id())
        .collect();
    if !empty.is_empty() {
        println!("  Empty slots: {}", empty.join(", "));
    }

    match content.media.as_ref() {
        Some(media) => {
            match media.music() {
                Some(plan) => println!(
                    "  Music: {} (volume {:.2}, loop {})",
                    plan.file, plan.volume, plan.looping
                ),
                None => println!("  Music: off"),
            }
            let backgrounds = media.page_backgrounds();
            let count = backgrounds.iter().filter(|b| b.is_some()).count();
            println!("  Page backgrounds: {}/{}", count, TOTAL_LEAVES);
        }
        None => println!("  Media: none"),
    }
}

fn walk() {
    let mut nav = BookNavigator::new();
    println!("start  {}  z={:?}", nav.indicator(), z_order(&nav));
    while let Some(flip) = nav.next() {
        println!(
            "leaf {}  {}  z={:?}  prev={} next={}",
            flip.leaf,
            nav.indicator(),
            z_order(&nav),
            if nav.prev_disabled() { "off" } else { "on" },
            if nav.next_disabled() { "off" } else { "on" },
        );
        nav.release();
    }
}

fn z_order(nav: &BookNavigator) -> Vec<usize> {
    (0..TOTAL_LEAVES).map(|leaf| nav.z_index(leaf)).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let path = cli
        .content
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_PATH));

    match cli.command {
        Commands::Check => {
            let content = load(&path).await?;
            print_summary(&path, &content);
            println!("OK");
        }

        Commands::Render { locale } => {
            let loaded = load_or_fallback(&path).await;
            if loaded.is_fallback() {
                eprintln!("note: showing fallback content");
            }
            for block in ceremony_blocks(loaded.content.ceremonies(), locale) {
                println!("{}", block.to_text());
                println!();
            }
        }

        Commands::Walk => walk(),
    }

    Ok(())
}
