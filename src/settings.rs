use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use crate::format::CaptionStyle;
use crate::gallery::GalleryConfig;
use crate::status::Presentation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Site the dashboard is attached to; every path below is relative to it.
    pub base_url: String,
    pub status_path: String,
    /// Occupancy feed the uptime is read from.
    pub feed_path: String,
    pub gallery_list_path: String,
    pub gallery_delete_path: String,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub presentation: Presentation,
    pub caption_style: CaptionStyle,
    pub download_dir: PathBuf,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".into(),
            status_path: "scripts/get_latest_data.php".into(),
            feed_path: "csv/parkit-data.csv".into(),
            gallery_list_path: "scripts/list_graphs.php".into(),
            gallery_delete_path: "scripts/delete_graph.php".into(),
            poll_interval_ms: 1000,
            request_timeout_ms: 5000,
            presentation: Presentation::Rich,
            caption_style: CaptionStyle::TwelveHour,
            download_dir: PathBuf::from("downloads"),
        }
    }
}

impl DashboardSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn gallery_config(&self) -> GalleryConfig {
        GalleryConfig {
            list_path: self.gallery_list_path.clone(),
            delete_path: self.gallery_delete_path.clone(),
            caption_style: self.caption_style,
            download_dir: self.download_dir.clone(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<DashboardSettings>,
}

impl SettingsStore {
    /// Loads `path` if it exists. A file that does not parse falls back to
    /// defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring unreadable settings in {}: {err}", path.display());
                DashboardSettings::default()
            })
        } else {
            DashboardSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> DashboardSettings {
        self.read().clone()
    }

    pub fn update(&self, settings: DashboardSettings) -> Result<()> {
        let mut guard = self.write();
        *guard = settings;
        self.persist(&guard)
    }

    fn persist(&self, data: &DashboardSettings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, DashboardSettings> {
        match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, DashboardSettings> {
        match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
