//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC 1123 http date: "Tue, 01 May 2018 23:10:18 GMT"
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Convert time into unix epoch seconds.
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}
