use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout of an embedded graph timestamp: `YYYY-MM-DD-HH-MM-SS`.
const STAMP_LEN: usize = 19;
const DASH_POSITIONS: [usize; 5] = [4, 7, 10, 13, 16];

const CAPTION_PREFIX: &str = "Graph generated: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid input string")]
pub struct FormatError;

/// Clock style used for gallery captions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CaptionStyle {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl CaptionStyle {
    fn pattern(self) -> &'static str {
        match self {
            CaptionStyle::TwelveHour => "%A, %B %-d, %Y at %-I:%M:%S %p",
            CaptionStyle::TwentyFourHour => "%A, %B %-d, %Y at %H:%M:%S",
        }
    }
}

/// Finds the first `YYYY-MM-DD-HH-MM-SS` run in `input` and reads it as a
/// wall-clock date and time.
pub fn parse_graph_timestamp(input: &str) -> Result<NaiveDateTime, FormatError> {
    let stamp = find_stamp(input).ok_or(FormatError)?;
    let field = |range: std::ops::Range<usize>| -> Result<u32, FormatError> {
        stamp[range].parse().map_err(|_| FormatError)
    };

    let year = field(0..4)? as i32;
    let date = NaiveDate::from_ymd_opt(year, field(5..7)?, field(8..10)?).ok_or(FormatError)?;
    date.and_hms_opt(field(11..13)?, field(14..16)?, field(17..19)?)
        .ok_or(FormatError)
}

/// Renders the caption for a saved graph, e.g.
/// `Graph generated: Friday, April 19, 2024 at 1:30:35 PM`.
///
/// A name without an embedded timestamp, or one whose fields do not form a
/// real date, yields `Invalid input string`.
pub fn format_graph_timestamp(filename: &str, style: CaptionStyle) -> String {
    match parse_graph_timestamp(filename) {
        Ok(generated) => format!("{CAPTION_PREFIX}{}", generated.format(style.pattern())),
        Err(err) => err.to_string(),
    }
}

fn find_stamp(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    if bytes.len() < STAMP_LEN {
        return None;
    }

    (0..=bytes.len() - STAMP_LEN)
        .find(|&start| is_stamp(&bytes[start..start + STAMP_LEN]))
        .map(|start| &input[start..start + STAMP_LEN])
}

fn is_stamp(window: &[u8]) -> bool {
    window.iter().enumerate().all(|(idx, byte)| {
        if DASH_POSITIONS.contains(&idx) {
            *byte == b'-'
        } else {
            byte.is_ascii_digit()
        }
    })
}
