use std::future::Future;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::log_info;

const ENABLE_LOGS: bool = true;

/// A job started on a fixed period until cancelled.
///
/// Each tick runs in its own task, so a slow run never delays the next one
/// and runs can overlap. Cancelling also abandons runs still in flight.
pub struct RepeatingTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl RepeatingTask {
    /// The first run starts immediately.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let run = job();
                        let run_token = token.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                _ = run => {}
                                _ = run_token.cancelled() => {}
                            }
                        });
                    }
                    _ = token.cancelled() => {
                        log_info!("{name} task shutting down");
                        break;
                    }
                }
            }
        });

        Self {
            name,
            handle: Some(handle),
            cancel_token,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Cancels and waits for the ticking loop to exit.
    pub async fn stop(mut self) -> Result<()> {
        self.cancel_token.cancel();
        match self.handle.take() {
            Some(handle) => handle
                .await
                .with_context(|| format!("{} task failed to join", self.name)),
            None => Ok(()),
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
