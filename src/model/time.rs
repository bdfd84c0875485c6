use chrono::NaiveDateTime;

/// Calendar format used by the close-approach data, e.g. `2020-Jan-01 12:30`.
pub const CALENDAR_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Parse a calendar timestamp such as `2020-Jan-01 12:30`.
pub fn parse_calendar(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), CALENDAR_FORMAT).ok()
}

/// Render a timestamp back into the calendar format.
pub fn format_calendar(time: &NaiveDateTime) -> String {
    time.format(CALENDAR_FORMAT).to_string()
}
