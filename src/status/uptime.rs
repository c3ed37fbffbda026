use crate::api::Transport;
use crate::{log_error, log_warn};

const ENABLE_LOGS: bool = true;

/// Column holding the sample timestamp in the occupancy feed.
const TIMESTAMP_COLUMN: usize = 2;

/// Timestamp of the first data row in the occupancy feed.
///
/// The first line is always treated as the header. Blank lines and lines
/// starting with `#` (run and restart markers) are skipped. Only the first
/// remaining line is considered; if it has no timestamp column the result is
/// `None`.
pub fn first_data_timestamp(feed: &str) -> Option<String> {
    let row = feed
        .split('\n')
        .skip(1)
        .find(|line| !line.starts_with('#') && !line.trim().is_empty())?;

    row.split(',')
        .nth(TIMESTAMP_COLUMN)
        .map(|field| field.trim().to_string())
}

/// Derives "system started at" from the occupancy feed.
#[derive(Debug, Clone)]
pub struct UptimeResolver {
    feed_path: String,
}

impl UptimeResolver {
    pub fn new(feed_path: impl Into<String>) -> Self {
        Self {
            feed_path: feed_path.into(),
        }
    }

    /// `None` leaves the displayed value as it was.
    pub async fn resolve<T: Transport>(&self, transport: &T) -> Option<String> {
        let feed = match transport.get_text(&self.feed_path).await {
            Ok(feed) => feed,
            Err(err) => {
                log_error!("Error fetching or parsing the occupancy feed: {err}");
                return None;
            }
        };

        let timestamp = first_data_timestamp(&feed);
        if timestamp.is_none() {
            log_warn!("no uptime timestamp in {}", self.feed_path);
        }
        timestamp
    }
}
