// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit weight configuration.
//!
//! Weights are expressed in milliseconds and default to the standard
//! calendar, so a config file only needs the units it overrides:
//!
//! ```toml
//! # thirty-day months, 360-day years
//! months = 2_592_000_000
//! years = 31_104_000_000
//! ```

use crate::unit::{Unit, UnitTable, UnitTableError, DAY, HOUR, MINUTE, MONTH, SECOND, WEEK, YEAR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a unit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid unit config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Table(#[from] UnitTableError),
}

/// Millisecond weight for each unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitWeights {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Default for UnitWeights {
    fn default() -> Self {
        Self {
            years: YEAR,
            months: MONTH,
            weeks: WEEK,
            days: DAY,
            hours: HOUR,
            minutes: MINUTE,
            seconds: SECOND,
        }
    }
}

impl UnitWeights {
    /// Parse weights from TOML. Missing keys keep their standard value.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn get(&self, unit: Unit) -> u64 {
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

    pub fn set(&mut self, unit: Unit, millis: u64) {
        let slot = match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        };
        *slot = millis;
    }

    /// Validate and build a [`UnitTable`].
    pub fn into_table(self) -> Result<UnitTable, UnitTableError> {
        UnitTable::from_weights(&self)
    }
}

/// Load and validate a unit table from TOML in one step.
pub fn load_unit_table(content: &str) -> Result<UnitTable, ConfigError> {
    let weights = UnitWeights::from_toml(content)?;
    Ok(weights.into_table()?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
