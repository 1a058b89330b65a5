// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt-core: units, durations and interval breakdown for durfmt

pub mod config;
pub mod duration;
pub mod interval;
pub mod unit;

pub use config::{load_unit_table, ConfigError, UnitWeights};
pub use duration::{duration_to_milliseconds, Duration};
pub use interval::{CalendarInterval, IntervalToDuration};
pub use unit::{
    Unit, UnitDescriptor, UnitTable, UnitTableError, DAY, HOUR, MILLISECOND, MINUTE, MONTH,
    SECOND, WEEK, YEAR,
};
