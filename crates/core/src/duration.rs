// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-style duration broken into unit fields.

use crate::unit::{Unit, UnitTable};
use serde::{Deserialize, Serialize};

/// A duration expressed as independent unit counts.
///
/// Fields are not normalized: `{ minutes: 90, hours: 0 }` is a valid value
/// and counts may be negative. Absent fields deserialize as zero, so the
/// shape produced by interval helpers like date-fns' `intervalToDuration`
/// (which omits `weeks`) loads as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Duration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(mut self, n: i64) -> Self {
        self.years = n;
        self
    }

    pub fn months(mut self, n: i64) -> Self {
        self.months = n;
        self
    }

    pub fn weeks(mut self, n: i64) -> Self {
        self.weeks = n;
        self
    }

    pub fn days(mut self, n: i64) -> Self {
        self.days = n;
        self
    }

    pub fn hours(mut self, n: i64) -> Self {
        self.hours = n;
        self
    }

    pub fn minutes(mut self, n: i64) -> Self {
        self.minutes = n;
        self
    }

    pub fn seconds(mut self, n: i64) -> Self {
        self.seconds = n;
        self
    }

    /// Count stored for `unit`.
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Weighted sum of every field in milliseconds, weeks included.
    ///
    /// Accumulates in `i128`; seven `i64` counts times `u64` weights cannot
    /// overflow it.
    pub fn to_milliseconds(&self, table: &UnitTable) -> i128 {
        table
            .iter()
            .map(|d| i128::from(self.get(d.unit)) * i128::from(d.millis))
            .sum()
    }

    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        Unit::ALL.into_iter().all(|unit| self.get(unit) == 0)
    }
}

/// Total milliseconds of `duration` under the standard unit table.
pub fn duration_to_milliseconds(duration: &Duration) -> i128 {
    duration.to_milliseconds(UnitTable::standard())
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
