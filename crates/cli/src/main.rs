//! Album Cart CLI - Manage the album viewer shopping cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add an album to the cart
//! album-cart add --id 1 --title "Blue Train" --artist "John Coltrane" --price 19.99
//!
//! # Show the cart with its totals
//! album-cart show
//!
//! # Check whether an album is in the cart
//! album-cart has 1
//!
//! # Remove an album, or empty the cart
//! album-cart remove 1
//! album-cart clear
//! ```
//!
//! # Commands
//!
//! - `add` - Add an album (rejected if already present)
//! - `remove` - Remove an album by ID
//! - `has` - Print `yes` or `no`
//! - `show` - Print the cart
//! - `clear` - Empty the cart
//!
//! Logs go to stderr; set `RUST_LOG` to adjust verbosity and `SENTRY_DSN` to
//! report errors to Sentry.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use album_viewer_cart::CartConfig;
use album_viewer_core::{Album, AlbumId, Price};
use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod view;

use commands::cart::{CartCommand, CommandError};

#[derive(Parser)]
#[command(name = "album-cart")]
#[command(author, version, about = "Album viewer shopping cart")]
struct Cli {
    /// Directory the cart is stored in (overrides `CART_STORAGE_DIR`)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an album to the cart
    Add {
        /// Album ID
        #[arg(long)]
        id: AlbumId,

        /// Album title
        #[arg(long)]
        title: String,

        /// Artist name
        #[arg(long)]
        artist: String,

        /// Unit price in dollars (e.g. 19.99)
        #[arg(long)]
        price: Price,

        /// Cover image URL
        #[arg(long, default_value = "")]
        image_url: String,
    },
    /// Remove an album from the cart
    Remove {
        /// Album ID
        id: AlbumId,
    },
    /// Check whether an album is in the cart
    Has {
        /// Album ID
        id: AlbumId,
    },
    /// Show the cart
    Show,
    /// Remove every album from the cart
    Clear,
}

impl From<Commands> for CartCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Add {
                id,
                title,
                artist,
                price,
                image_url,
            } => Self::Add(Album {
                id,
                title,
                artist,
                price,
                image_url,
            }),
            Commands::Remove { id } => Self::Remove(id),
            Commands::Has { id } => Self::Has(id),
            Commands::Show => Self::Show,
            Commands::Clear => Self::Clear,
        }
    }
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load .env before Sentry reads SENTRY_DSN
    let config = CartConfig::from_env();

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "album_viewer_cart=info,album_viewer_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut config: CartConfig) -> Result<(), CommandError> {
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }

    let mut stdout = std::io::stdout().lock();
    commands::cart::run(cli.command.into(), &config, &mut stdout).await
}
