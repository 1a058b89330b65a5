// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cascading unit conversion.
//!
//! Magnitudes depend on which units the template asks for. Units are peeled
//! off a millisecond total from largest to smallest, and a unit that is not
//! requested leaves its share in the residual for the next requested unit:
//! 90 minutes renders as `1` and `30` under `h m`, but as `90` under `m`.

use crate::token::Token;
use durfmt_core::{Unit, UnitTable};

/// Set of distinct units that appear in a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentUnits([bool; 7]);

impl PresentUnits {
    /// Collect the units of every unit run in `tokens`.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        tokens.iter().filter_map(Token::unit).collect()
    }

    pub fn insert(&mut self, unit: Unit) {
        self.0[unit.order()] = true;
    }

    pub fn contains(&self, unit: Unit) -> bool {
        self.0[unit.order()]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.contains(&true)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&present| present).count()
    }

    /// Present units in cascade order, regardless of template order.
    pub fn iter(&self) -> impl Iterator<Item = Unit> + '_ {
        Unit::ALL.into_iter().filter(|&unit| self.contains(unit))
    }
}

impl FromIterator<Unit> for PresentUnits {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        let mut present = PresentUnits::default();
        for unit in iter {
            present.insert(unit);
        }
        present
    }
}

/// Per-unit magnitudes for one render, plus the undistributed remainder.
///
/// Only units that were present in the template have a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeMap {
    magnitudes: [Option<i128>; 7],
    residual_ms: i128,
}

impl MagnitudeMap {
    /// Distribute `total_ms` over the `present` units.
    ///
    /// Each present unit, in table order, takes `residual / weight` and
    /// leaves `residual % weight`. Division truncates toward zero, so a
    /// negative total yields non-positive magnitudes throughout. The residual
    /// left after the smallest present unit is discarded by the renderer.
    pub fn convert(total_ms: i128, present: &PresentUnits, table: &UnitTable) -> Self {
        let mut map = MagnitudeMap {
            magnitudes: [None; 7],
            residual_ms: total_ms,
        };
        for d in table.iter().filter(|d| present.contains(d.unit)) {
            let weight = i128::from(d.millis);
            map.magnitudes[d.order] = Some(map.residual_ms / weight);
            map.residual_ms %= weight;
        }
        map
    }

    pub fn get(&self, unit: Unit) -> Option<i128> {
        self.magnitudes[unit.order()]
    }

    /// Milliseconds not absorbed by any present unit.
    pub fn residual_ms(&self) -> i128 {
        self.residual_ms
    }

    /// Units that received a magnitude.
    pub fn units(&self) -> PresentUnits {
        self.iter().map(|(unit, _)| unit).collect()
    }

    /// `(unit, magnitude)` pairs in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, i128)> + '_ {
        Unit::ALL
            .into_iter()
            .filter_map(|unit| self.get(unit).map(|m| (unit, m)))
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
