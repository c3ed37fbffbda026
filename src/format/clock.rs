/// Converts a 24-hour `HH:MM` time of day into `hh:mm AM|PM`.
///
/// Nothing is validated. A component that does not parse as a number is
/// carried through as written, and an hour past 23 still wraps modulo 12,
/// so malformed input shows up as malformed output instead of disappearing.
pub fn to_12_hour(time: &str) -> String {
    let mut parts = time.split(':');
    let hour_raw = parts.next().unwrap_or_default();
    let minute_raw = parts.next().unwrap_or_default();

    let (hour, period) = match hour_raw.trim().parse::<u32>() {
        Ok(hour) => {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display = match hour % 12 {
                0 => 12,
                other => other,
            };
            (format!("{display:02}"), period)
        }
        Err(_) => (hour_raw.to_string(), "AM"),
    };

    let minute = match minute_raw.trim().parse::<u32>() {
        Ok(minute) => format!("{minute:02}"),
        Err(_) => minute_raw.to_string(),
    };

    format!("{hour}:{minute} {period}")
}
