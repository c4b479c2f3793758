//! Local wall-clock timestamps in the classic `asctime` layout.

use chrono::{DateTime, Local, TimeZone};

/// `asctime` layout: "Wed Jun 30 21:49:08 1993\n"
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y\n";

/// Current local date and time, newline terminated
pub fn now_string() -> String {
    format_asctime(&Local::now())
}

/// Render any timestamp in the `asctime` layout
pub fn format_asctime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(ASCTIME_FORMAT).to_string()
}
