use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::format::CaptionStyle;
use crate::settings::DashboardSettings;
use crate::status::Presentation;

#[derive(Debug, Parser)]
#[command(name = "parkit-dashboard", version, about = "Live Park It! occupancy dashboard")]
pub struct Cli {
    /// Settings file; created by `init-config`.
    #[arg(long, global = true, default_value = "parkit-dashboard.json")]
    pub config: PathBuf,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub presentation: Option<Presentation>,

    #[arg(long, global = true, value_enum)]
    pub caption_style: Option<CaptionStyle>,

    /// Status poll period in milliseconds.
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll the status endpoint until Ctrl-C.
    Watch,
    /// Run a single poll and print what the page would show.
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Browse saved graphs: n(ext), p(revious), d(elete), s(ave), q(uit).
    Gallery,
    /// Write the effective settings to the config file.
    InitConfig,
}

impl Cli {
    /// Flag overrides on top of the stored settings. Nothing is persisted.
    pub fn apply_overrides(&self, mut settings: DashboardSettings) -> DashboardSettings {
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(presentation) = self.presentation {
            settings.presentation = presentation;
        }
        if let Some(caption_style) = self.caption_style {
            settings.caption_style = caption_style;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.poll_interval_ms = interval_ms;
        }
        settings
    }
}
