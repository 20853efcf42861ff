//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, `bound_at`, inspection times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp at minute precision for cards and tables.
#[must_use]
pub fn to_minutes(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
