use chrono::{SecondsFormat, Utc};

/// Get the current UTC time in RFC 3339 format with millisecond precision
/// (e.g. `2024-01-01T10:00:00.000Z`). The textual form sorts
/// lexicographically in chronological order.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
