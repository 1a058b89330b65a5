// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting entry points.
//!
//! A call runs the whole pipeline: the duration is folded into milliseconds,
//! the template is lexed, present units are cascaded, and tokens are
//! rendered. Nothing is cached between calls.

use crate::cascade::{MagnitudeMap, PresentUnits};
use crate::error::FormatError;
use crate::lexer::Lexer;
use crate::render::render;
use chrono::{DateTime, Utc};
use durfmt_core::{CalendarInterval, Duration, IntervalToDuration, UnitTable};

/// Duration formatter bound to a unit table.
///
/// # Examples
///
/// ```ignore
/// use durfmt_format::{Duration, Formatter};
///
/// let d = Duration::new().hours(1).minutes(30);
/// let fmt = Formatter::default();
/// assert_eq!(fmt.format(&d, "m 'minutes'")?, Some("90 minutes".into()));
/// assert_eq!(fmt.format(&d, "h 'hour' m 'minutes'")?, Some("1 hour 30 minutes".into()));
/// # Ok::<(), durfmt_format::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'t> {
    table: &'t UnitTable,
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new(UnitTable::standard())
    }
}

impl<'t> Formatter<'t> {
    pub fn new(table: &'t UnitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t UnitTable {
        self.table
    }

    /// Render `duration` through `template`.
    ///
    /// Returns `Ok(None)` and logs a warning when the template holds no
    /// unit run, quoted literal or escaped quote. Unescaped letters are
    /// still rejected in that case.
    ///
    /// # Errors
    ///
    /// - [`FormatError::MissingDuration`] when `duration` is `None`, before
    ///   the template is looked at
    /// - [`FormatError::MissingTemplate`] when `template` is empty
    /// - [`FormatError::UnescapedLetter`] for letters outside quotes that
    ///   are not unit tokens
    pub fn format<'d>(
        &self,
        duration: impl Into<Option<&'d Duration>>,
        template: &str,
    ) -> Result<Option<String>, FormatError> {
        let duration = duration.into().ok_or(FormatError::MissingDuration)?;
        if template.is_empty() {
            return Err(FormatError::MissingTemplate);
        }

        let total_ms = duration.to_milliseconds(self.table);
        let tokens = Lexer::tokenize(template, self.table);
        let present = PresentUnits::from_tokens(&tokens);
        let magnitudes = MagnitudeMap::convert(total_ms, &present, self.table);
        tracing::debug!(
            tokens = tokens.len(),
            units = present.len(),
            total_ms = %total_ms,
            residual_ms = %magnitudes.residual_ms(),
            "cascaded duration"
        );

        let rendered = render(&tokens, &magnitudes)?;
        if !tokens.iter().any(|t| t.kind.is_recognized()) {
            tracing::warn!(template, "no token matches found");
            return Ok(None);
        }
        Ok(Some(rendered))
    }

    /// Format the interval between two instants using [`CalendarInterval`].
    pub fn format_interval(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        template: &str,
    ) -> Result<Option<String>, FormatError> {
        self.format_interval_with(&CalendarInterval, start, end, template)
    }

    /// Format the interval between two instants with a caller-supplied
    /// interval collaborator.
    pub fn format_interval_with<I>(
        &self,
        interval: &I,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        template: &str,
    ) -> Result<Option<String>, FormatError>
    where
        I: IntervalToDuration + ?Sized,
    {
        let duration = interval.interval_to_duration(start, end);
        self.format(&duration, template)
    }

    /// Format the interval between two RFC 3339 timestamps.
    ///
    /// `date` and `base_date` may be given in either order; the interval is
    /// absolute.
    pub fn format_timestamps(
        &self,
        date: &str,
        base_date: &str,
        template: &str,
    ) -> Result<Option<String>, FormatError> {
        let start = parse_timestamp(date)?;
        let end = parse_timestamp(base_date)?;
        self.format_interval(start, end, template)
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| FormatError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Render `duration` through `template` with the standard unit table.
///
/// See [`Formatter::format`].
pub fn format_duration<'d>(
    duration: impl Into<Option<&'d Duration>>,
    template: &str,
) -> Result<Option<String>, FormatError> {
    Formatter::default().format(duration, template)
}

/// Format the interval between two instants with the standard unit table.
pub fn format_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    template: &str,
) -> Result<Option<String>, FormatError> {
    Formatter::default().format_interval(start, end, template)
}

/// Format the interval between two RFC 3339 timestamps with the standard
/// unit table.
pub fn format_timestamps(
    date: &str,
    base_date: &str,
    template: &str,
) -> Result<Option<String>, FormatError> {
    Formatter::default().format_timestamps(date, base_date, template)
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
