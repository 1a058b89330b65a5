// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit registry: token symbols, millisecond weights and cascade order.
//!
//! The registry is immutable once built. [`UnitTable::standard`] returns the
//! process-wide table backed by a `static`; custom calendars go through
//! [`UnitTable::from_weights`], which validates the weights before handing
//! out a table.

use crate::config::UnitWeights;
use std::fmt;
use thiserror::Error;

pub const MILLISECOND: u64 = 1;
pub const SECOND: u64 = MILLISECOND * 1000;
pub const MINUTE: u64 = SECOND * 60;
pub const HOUR: u64 = MINUTE * 60;
pub const DAY: u64 = HOUR * 24;
pub const WEEK: u64 = DAY * 7;
/// A month is four weeks.
pub const MONTH: u64 = WEEK * 4;
/// A year is twelve four-week months (336 days).
pub const YEAR: u64 = MONTH * 12;

/// A duration unit, declared from largest to smallest.
///
/// The derived `Ord` follows declaration order, so sorting units yields
/// cascade order (years first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// Every unit in cascade order.
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Template token character for this unit.
    pub const fn symbol(self) -> char {
        match self {
            Unit::Years => 'y',
            Unit::Months => 'M',
            Unit::Weeks => 'w',
            Unit::Days => 'd',
            Unit::Hours => 'h',
            Unit::Minutes => 'm',
            Unit::Seconds => 's',
        }
    }

    /// Field name used by [`crate::Duration`] and its serialized form.
    pub const fn field_name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }

    /// Rank in cascade order; years are 0.
    pub const fn order(self) -> usize {
        self as usize
    }

    /// Resolve a template character to a unit. Case-sensitive: `M` is
    /// months, `m` is minutes.
    pub fn from_symbol(symbol: char) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.symbol() == symbol)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Registry entry for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDescriptor {
    pub unit: Unit,
    pub symbol: char,
    pub field_name: &'static str,
    /// Milliseconds in one of this unit. Always positive.
    pub millis: u64,
    pub order: usize,
}

const fn descriptor(unit: Unit, millis: u64) -> UnitDescriptor {
    UnitDescriptor {
        unit,
        symbol: unit.symbol(),
        field_name: unit.field_name(),
        millis,
        order: unit.order(),
    }
}

static STANDARD: UnitTable = UnitTable {
    units: [
        descriptor(Unit::Years, YEAR),
        descriptor(Unit::Months, MONTH),
        descriptor(Unit::Weeks, WEEK),
        descriptor(Unit::Days, DAY),
        descriptor(Unit::Hours, HOUR),
        descriptor(Unit::Minutes, MINUTE),
        descriptor(Unit::Seconds, SECOND),
    ],
};

/// Errors building a [`UnitTable`] from custom weights.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitTableError {
    #[error("weight for {unit} must be positive")]
    NonPositiveWeight { unit: Unit },

    #[error("{larger} ({larger_ms}ms) must weigh more than {smaller} ({smaller_ms}ms)")]
    NotIncreasing {
        larger: Unit,
        larger_ms: u64,
        smaller: Unit,
        smaller_ms: u64,
    },
}

/// Immutable registry of the seven units, indexed by cascade order.
///
/// Weights strictly decrease along cascade order, so a table is always a
/// strict total order from years to seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: [UnitDescriptor; 7],
}

impl UnitTable {
    /// The built-in table (four-week months, twelve-month years).
    pub fn standard() -> &'static UnitTable {
        &STANDARD
    }

    /// Build a table from custom weights.
    pub fn from_weights(weights: &UnitWeights) -> Result<UnitTable, UnitTableError> {
        let units = Unit::ALL.map(|unit| descriptor(unit, weights.get(unit)));

        if let Some(zero) = units.iter().find(|d| d.millis == 0) {
            return Err(UnitTableError::NonPositiveWeight { unit: zero.unit });
        }
        for pair in units.windows(2) {
            let (larger, smaller) = (&pair[0], &pair[1]);
            if larger.millis <= smaller.millis {
                return Err(UnitTableError::NotIncreasing {
                    larger: larger.unit,
                    larger_ms: larger.millis,
                    smaller: smaller.unit,
                    smaller_ms: smaller.millis,
                });
            }
        }

        Ok(UnitTable { units })
    }

    /// Look up a unit by its template character.
    pub fn lookup(&self, symbol: char) -> Option<&UnitDescriptor> {
        Unit::from_symbol(symbol).map(|unit| self.descriptor(unit))
    }

    pub fn descriptor(&self, unit: Unit) -> &UnitDescriptor {
        &self.units[unit.order()]
    }

    pub fn millis(&self, unit: Unit) -> u64 {
        self.descriptor(unit).millis
    }

    pub fn is_unit_symbol(&self, symbol: char) -> bool {
        Unit::from_symbol(symbol).is_some()
    }

    /// Descriptors in cascade order, largest unit first.
    pub fn iter(&self) -> std::slice::Iter<'_, UnitDescriptor> {
        self.units.iter()
    }

    /// The weights this table was built from.
    pub fn weights(&self) -> UnitWeights {
        let mut weights = UnitWeights::default();
        for d in &self.units {
            weights.set(d.unit, d.millis);
        }
        weights
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a UnitDescriptor;
    type IntoIter = std::slice::Iter<'a, UnitDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
