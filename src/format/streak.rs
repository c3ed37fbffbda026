use super::clock::to_12_hour;

/// Literal the backend writes when no vacancy streak has been observed yet.
pub const NO_STREAK: &str = "No Streak Available.";

/// Renders a `startDate startTime endDate endTime HH:MM:SS` event string as
/// `From: .. To: .. Duration: ..`.
///
/// [`NO_STREAK`] and anything that does not split into five fields are
/// returned verbatim.
pub fn format_streak(event: &str) -> String {
    if event == NO_STREAK {
        return event.to_string();
    }

    let fields: Vec<&str> = event.split(' ').collect();
    let [start_date, start_time, end_date, end_time, duration] = fields[..] else {
        return event.to_string();
    };

    format!(
        "From: {start_date} {} To: {end_date} {} Duration: {}",
        to_12_hour(start_time),
        to_12_hour(end_time),
        describe_duration(duration)
    )
}

/// The hours clause needs hours, minutes and seconds all nonzero, so a streak
/// of exactly `01:00:00` reads as `0 seconds`.
fn describe_duration(duration: &str) -> String {
    let mut parts = duration.split(':');
    let hours = DurationPart::new(parts.next());
    let minutes = DurationPart::new(parts.next());
    let seconds = DurationPart::new(parts.next());

    if hours.is_nonzero() && minutes.is_nonzero() && seconds.is_nonzero() {
        format!("{hours} hours {minutes} minutes and {seconds} seconds")
    } else if minutes.is_nonzero() {
        format!("{minutes} minutes and {seconds} seconds")
    } else {
        format!("{seconds} seconds")
    }
}

struct DurationPart<'a> {
    raw: &'a str,
    value: Option<u64>,
}

impl<'a> DurationPart<'a> {
    fn new(raw: Option<&'a str>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            raw,
            value: raw.trim().parse().ok(),
        }
    }

    fn is_nonzero(&self) -> bool {
        matches!(self.value, Some(value) if value != 0)
    }
}

impl std::fmt::Display for DurationPart<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(self.raw),
        }
    }
}
