pub mod dashboard;
pub mod fetcher;
pub mod reconciler;
pub mod uptime;

pub use dashboard::{Dashboard, TickOutcome};
pub use fetcher::{fetch_snapshot, parse_snapshot};
pub use reconciler::{Presentation, Reconciler};
pub use uptime::{first_data_timestamp, UptimeResolver};
