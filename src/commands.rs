use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;

use crate::api::HttpTransport;
use crate::cli::Command;
use crate::gallery::{Cursor, GallerySession, StdinConfirm};
use crate::scheduler::RepeatingTask;
use crate::settings::{DashboardSettings, SettingsStore};
use crate::status::{Dashboard, TickOutcome};
use crate::view::{LogSink, MemorySink};

pub async fn dispatch(
    command: &Command,
    store: &SettingsStore,
    settings: DashboardSettings,
) -> Result<()> {
    match command {
        Command::Watch => watch(&settings).await,
        Command::Status { json } => status(&settings, *json).await,
        Command::Gallery => gallery(&settings).await,
        Command::InitConfig => {
            store.update(settings)?;
            println!("wrote {}", store.path().display());
            Ok(())
        }
    }
}

fn transport(settings: &DashboardSettings) -> Result<Arc<HttpTransport>> {
    HttpTransport::new(&settings.base_url, settings.request_timeout()).map(Arc::new)
}

async fn watch(settings: &DashboardSettings) -> Result<()> {
    let transport = transport(settings)?;
    info!(
        "watching {} every {}ms",
        transport.base_url(),
        settings.poll_interval().as_millis()
    );

    let dashboard = Dashboard::new(
        transport,
        &settings.status_path,
        &settings.feed_path,
        settings.presentation,
        LogSink::new(),
    );

    let task = RepeatingTask::spawn("status-poll", settings.poll_interval(), move || {
        let dashboard = dashboard.clone();
        async move {
            dashboard.tick().await;
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    info!("stopping {}", task.name());
    task.stop().await
}

async fn status(settings: &DashboardSettings, json: bool) -> Result<()> {
    let dashboard = Dashboard::new(
        transport(settings)?,
        &settings.status_path,
        &settings.feed_path,
        settings.presentation,
        MemorySink::new(),
    );

    if dashboard.tick().await == TickOutcome::Dropped {
        bail!("no usable status snapshot from {}", settings.status_path);
    }

    let rendered = dashboard.inspect(|sink| render_view(sink, json)).await?;
    println!("{rendered}");
    Ok(())
}

fn render_view(sink: &MemorySink, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(sink).context("failed to encode view");
    }

    Ok(sink
        .fields()
        .map(|(field, text)| format!("{}: {}", field.id(), text))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GalleryAction {
    Next,
    Previous,
    Delete,
    Save,
    Quit,
}

fn parse_action(input: &str) -> Option<GalleryAction> {
    match input.trim().to_ascii_lowercase().as_str() {
        "n" | "next" => Some(GalleryAction::Next),
        "p" | "prev" | "previous" => Some(GalleryAction::Previous),
        "d" | "delete" => Some(GalleryAction::Delete),
        "s" | "save" => Some(GalleryAction::Save),
        "q" | "quit" => Some(GalleryAction::Quit),
        _ => None,
    }
}

async fn gallery(settings: &DashboardSettings) -> Result<()> {
    let mut session = GallerySession::new(
        transport(settings)?,
        settings.gallery_config(),
        LogSink::new(),
        StdinConfirm,
    );
    session.load().await;

    let stdin = io::stdin();
    loop {
        match session.cursor() {
            Cursor::Unloaded => bail!("saved graphs could not be loaded"),
            Cursor::Empty => return Ok(()),
            Cursor::At(_) => {}
        }

        print!("[n]ext [p]revious [d]elete [s]ave [q]uit > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_action(&line) {
            Some(GalleryAction::Next) => session.next(),
            Some(GalleryAction::Previous) => session.previous(),
            Some(GalleryAction::Delete) => {
                session.delete_current().await;
            }
            Some(GalleryAction::Save) => {
                session.save_current().await;
            }
            Some(GalleryAction::Quit) => return Ok(()),
            None => println!("unknown command: {}", line.trim()),
        }
    }
}
