use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::{FetchError, Transport};
use crate::format::{format_graph_timestamp, CaptionStyle};
use crate::models::{DeleteResponse, GalleryItem};
use crate::view::{Control, ControlState, Field, RenderSink};
use crate::{log_error, log_info, log_warn};

use super::confirm::Confirm;

const ENABLE_LOGS: bool = true;

pub const EMPTY_GALLERY_TEXT: &str = "No Saved Graphs!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this graph?";

/// Endpoints and presentation details for a gallery session.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub list_path: String,
    pub delete_path: String,
    pub caption_style: CaptionStyle,
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// The list has not been fetched yet (or fetching it failed).
    Unloaded,
    At(usize),
    /// Terminal: nothing left to show for the rest of the session.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingSelected,
    Cancelled,
    Deleted,
    /// The backend answered but refused, with its reason.
    Rejected(String),
    /// The request or its response was unusable.
    Failed,
}

/// Browses the saved graphs one at a time.
pub struct GallerySession<T, S, C> {
    transport: Arc<T>,
    config: GalleryConfig,
    sink: S,
    confirm: C,
    items: Vec<GalleryItem>,
    cursor: Cursor,
}

impl<T: Transport, S: RenderSink, C: Confirm> GallerySession<T, S, C> {
    pub fn new(transport: Arc<T>, config: GalleryConfig, sink: S, confirm: C) -> Self {
        Self {
            transport,
            config,
            sink,
            confirm,
            items: Vec::new(),
            cursor: Cursor::Unloaded,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        match self.cursor {
            Cursor::At(index) => self.items.get(index),
            Cursor::Unloaded | Cursor::Empty => None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetches the list and shows the first graph. Only acts while unloaded;
    /// the list is read once per session.
    pub async fn load(&mut self) {
        if self.cursor != Cursor::Unloaded {
            return;
        }

        let items = match self.fetch_list().await {
            Ok(items) => items,
            Err(err) => {
                log_error!("Unable to load images: {err}");
                return;
            }
        };

        log_info!("loaded {} saved graphs", items.len());
        self.items = items;
        if self.items.is_empty() {
            self.enter_empty();
        } else {
            self.show(0);
        }
    }

    async fn fetch_list(&self) -> Result<Vec<GalleryItem>, FetchError> {
        let body = self.transport.get_text(&self.config.list_path).await?;
        serde_json::from_str(&body).map_err(|err| FetchError::parse("gallery list", err))
    }

    /// Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            log_warn!("no graph at index {index} ({} loaded)", self.items.len());
            return;
        };

        let caption = format_graph_timestamp(item.file_name(), self.config.caption_style);
        self.sink.set_text(Field::GalleryImage, item.reference());
        self.sink.set_text(Field::GalleryCaption, &caption);
        self.cursor = Cursor::At(index);
        self.update_navigation(index);
    }

    fn update_navigation(&mut self, index: usize) {
        let last = self.items.len().saturating_sub(1);
        self.sink
            .set_control(Control::PreviousButton, ControlState::visible_if(index > 0));
        self.sink
            .set_control(Control::NextButton, ControlState::visible_if(index < last));
    }

    pub fn next(&mut self) {
        if let Cursor::At(index) = self.cursor {
            if index + 1 < self.items.len() {
                self.show(index + 1);
            }
        }
    }

    pub fn previous(&mut self) {
        if let Cursor::At(index) = self.cursor {
            if index > 0 {
                self.show(index - 1);
            }
        }
    }

    /// Deletes the graph on screen after confirmation, then shows its
    /// predecessor (or the first graph). Any failure leaves the session as
    /// it was.
    pub async fn delete_current(&mut self) -> DeleteOutcome {
        let Cursor::At(index) = self.cursor else {
            log_error!("No image selected for deletion.");
            return DeleteOutcome::NothingSelected;
        };
        let reference = self.items[index].reference().to_string();

        if !self.confirm.confirm(DELETE_PROMPT) {
            log_info!("Deletion cancelled.");
            return DeleteOutcome::Cancelled;
        }

        let body = match self
            .transport
            .post_form(&self.config.delete_path, &[("file", reference.as_str())])
            .await
        {
            Ok(body) => body,
            Err(err) => {
                log_error!("Error: {err}");
                return DeleteOutcome::Failed;
            }
        };

        let response: DeleteResponse = match serde_json::from_str(&body) {
            Ok(response) => response,
            Err(err) => {
                log_error!("Error: {}", FetchError::parse("delete response", err));
                return DeleteOutcome::Failed;
            }
        };

        if !response.success {
            let reason = response.error.unwrap_or_else(|| "unknown error".to_string());
            log_error!("Failed to delete image: {reason}");
            return DeleteOutcome::Rejected(reason);
        }

        log_info!("Image deleted successfully: {reference}");
        self.items.remove(index);
        if self.items.is_empty() {
            self.enter_empty();
        } else {
            self.show(index.saturating_sub(1));
        }
        DeleteOutcome::Deleted
    }

    /// Downloads the graph on screen into the download directory. Failures
    /// are logged; the session does not depend on the result.
    pub async fn save_current(&self) -> Option<PathBuf> {
        let item = self.current()?;
        match self.download(item).await {
            Ok(path) => {
                log_info!("saved {} to {}", item.reference(), path.display());
                Some(path)
            }
            Err(err) => {
                log_error!("could not save {}: {err:#}", item.reference());
                None
            }
        }
    }

    async fn download(&self, item: &GalleryItem) -> Result<PathBuf> {
        let bytes = self.transport.get_bytes(item.reference()).await?;
        let target = download_target(&self.config.download_dir, item);

        tokio::fs::create_dir_all(&self.config.download_dir)
            .await
            .with_context(|| {
                format!("failed to create {}", self.config.download_dir.display())
            })?;
        tokio::fs::write(&target, bytes)
            .await
            .with_context(|| format!("failed to write {}", target.display()))?;

        Ok(target)
    }

    fn enter_empty(&mut self) {
        self.items.clear();
        self.cursor = Cursor::Empty;
        self.sink.set_control(Control::GalleryFrame, ControlState::Removed);
        self.sink.set_control(Control::GalleryNav, ControlState::Removed);
        self.sink.set_text(Field::GalleryPlaceholder, EMPTY_GALLERY_TEXT);
    }
}

fn download_target(dir: &Path, item: &GalleryItem) -> PathBuf {
    let name = match item.file_name() {
        "" | "." | ".." => "graph.png",
        name => name,
    };
    dir.join(name)
}
