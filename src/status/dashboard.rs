use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::Transport;
use crate::log_error;
use crate::models::SystemStatus;
use crate::view::RenderSink;

use super::fetcher::fetch_snapshot;
use super::reconciler::{Presentation, Reconciler};
use super::uptime::UptimeResolver;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fetch or parse failed; nothing on screen changed.
    Dropped,
    Applied(SystemStatus),
}

/// Status side of the page: one fetch, one reconcile and, while online, one
/// uptime lookup per tick.
///
/// Cloning is cheap and every clone drives the same display. Ticks may overlap;
/// whichever response lands last is what stays on screen.
pub struct Dashboard<T, S> {
    transport: Arc<T>,
    status_path: Arc<str>,
    uptime: UptimeResolver,
    reconciler: Arc<Mutex<Reconciler<S>>>,
}

impl<T, S> Clone for Dashboard<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            status_path: Arc::clone(&self.status_path),
            uptime: self.uptime.clone(),
            reconciler: Arc::clone(&self.reconciler),
        }
    }
}

impl<T: Transport, S: RenderSink> Dashboard<T, S> {
    pub fn new(
        transport: Arc<T>,
        status_path: &str,
        feed_path: &str,
        presentation: Presentation,
        sink: S,
    ) -> Self {
        Self {
            transport,
            status_path: Arc::from(status_path),
            uptime: UptimeResolver::new(feed_path),
            reconciler: Arc::new(Mutex::new(Reconciler::new(presentation, sink))),
        }
    }

    pub async fn tick(&self) -> TickOutcome {
        let snapshot = match fetch_snapshot(self.transport.as_ref(), &self.status_path).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log_error!("Error fetching data: {err}");
                return TickOutcome::Dropped;
            }
        };

        let wants_uptime = self.reconciler.lock().await.apply(&snapshot);

        if wants_uptime {
            if let Some(started) = self.uptime.resolve(self.transport.as_ref()).await {
                self.reconciler.lock().await.apply_uptime(&started);
            }
        }

        TickOutcome::Applied(snapshot.system_status)
    }

    pub async fn state(&self) -> Option<SystemStatus> {
        self.reconciler.lock().await.state()
    }

    /// Runs `read` against the current display.
    pub async fn inspect<R>(&self, read: impl FnOnce(&S) -> R) -> R {
        let guard = self.reconciler.lock().await;
        read(guard.sink())
    }
}
