// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interval-to-duration collaborators.
//!
//! Formatting only consumes a [`Duration`]; turning two instants into one is
//! delegated to an [`IntervalToDuration`] implementation. [`CalendarInterval`]
//! is the default.

use crate::duration::Duration;
use chrono::{DateTime, Datelike, Months, Utc};

/// Breaks the span between two instants into a [`Duration`].
pub trait IntervalToDuration {
    fn interval_to_duration(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Duration;
}

impl<F> IntervalToDuration for F
where
    F: Fn(DateTime<Utc>, DateTime<Utc>) -> Duration,
{
    fn interval_to_duration(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
        self(start, end)
    }
}

/// Calendar-aware interval breakdown in UTC.
///
/// Counts whole calendar months from the earlier instant (adding months
/// clamps to the end of shorter months, so Jan 31 + 1 month is Feb 28/29),
/// splits them into years and months, and expresses the remainder as days,
/// hours, minutes and seconds. `weeks` is always zero and sub-second
/// precision is dropped. Argument order does not matter; every field is
/// non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarInterval;

impl IntervalToDuration for CalendarInterval {
    fn interval_to_duration(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        let (months, anchor) = whole_months(start, end);
        let rest = end.signed_duration_since(anchor);

        Duration {
            years: i64::from(months / 12),
            months: i64::from(months % 12),
            weeks: 0,
            days: rest.num_days(),
            hours: rest.num_hours() % 24,
            minutes: rest.num_minutes() % 60,
            seconds: rest.num_seconds() % 60,
        }
    }
}

/// Largest month count `n` with `start + n months <= end`, and that instant.
fn whole_months(start: DateTime<Utc>, end: DateTime<Utc>) -> (u32, DateTime<Utc>) {
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = u32::try_from(span).unwrap_or(0);
    loop {
        match start.checked_add_months(Months::new(months)) {
            Some(anchor) if anchor <= end => return (months, anchor),
            _ if months == 0 => return (0, start),
            _ => months -= 1,
        }
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
