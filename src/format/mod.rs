pub mod caption;
pub mod clock;
pub mod streak;

pub use caption::{format_graph_timestamp, parse_graph_timestamp, CaptionStyle, FormatError};
pub use clock::to_12_hour;
pub use streak::{format_streak, NO_STREAK};
