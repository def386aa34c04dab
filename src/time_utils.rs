// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for the date/time formats used on the wire.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a UTC timestamp as Unix epoch seconds.
pub fn format_epoch(date: DateTime<Utc>) -> String {
    date.timestamp().to_string()
}
