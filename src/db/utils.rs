//! Database utility functions.

use chrono::{NaiveDateTime, Utc};

/// Current UTC time without offset, the form every timestamp column uses.
pub fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc()
}
