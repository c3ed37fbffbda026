pub mod api;
pub mod cli;
mod commands;
pub mod format;
pub mod gallery;
pub mod models;
pub mod scheduler;
pub mod settings;
pub mod status;
mod utils;
pub mod view;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use settings::SettingsStore;

pub use api::{FetchError, HttpTransport, Transport};
pub use gallery::{Confirm, Cursor, DeleteOutcome, GalleryConfig, GallerySession};
pub use models::{GalleryItem, StatusSnapshot, SystemStatus};
pub use scheduler::RepeatingTask;
pub use status::{Dashboard, Presentation, Reconciler, TickOutcome};
pub use view::{Control, ControlState, Field, LogSink, MemorySink, RenderSink};

pub fn run() -> anyhow::Result<()> {
    // Info by default; RUST_LOG refines it
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let store = SettingsStore::new(cli.config.clone())?;
    let settings = cli.apply_overrides(store.settings());

    log::info!("Park It! dashboard starting up...");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(commands::dispatch(&cli.command, &store, settings))
}
