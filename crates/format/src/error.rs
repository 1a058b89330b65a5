// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting error types.

use crate::span::{diagnostic_context, Span};
use thiserror::Error;

/// Errors returned by the formatting entry points.
///
/// # Examples
///
/// ```ignore
/// use durfmt_format::{format_duration, Duration, FormatError};
///
/// let result = format_duration(&Duration::new().minutes(10), "h hours");
/// assert!(matches!(result, Err(FormatError::UnescapedLetter { letter: 'o', .. })));
///
/// let result = format_duration(None, "s");
/// assert!(matches!(result, Err(FormatError::MissingDuration)));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No duration was supplied.
    #[error("parameter `duration` is required")]
    MissingDuration,

    /// The template is empty.
    #[error("parameter `template` is required")]
    MissingTemplate,

    /// The template contains a letter that is neither a unit token nor
    /// inside quotes.
    ///
    /// ```text
    /// h hours
    ///    ^
    /// ```
    #[error("format string contains an unescaped latin alphabet character `{letter}`")]
    UnescapedLetter {
        /// The offending character.
        letter: char,
        /// Location of the character in the template.
        span: Span,
    },

    /// A timestamp passed to an interval entry point could not be parsed.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl FormatError {
    /// True for errors caused by missing or malformed arguments rather than
    /// template syntax.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FormatError::MissingDuration
                | FormatError::MissingTemplate
                | FormatError::InvalidTimestamp { .. }
        )
    }

    /// True for template syntax errors.
    pub fn is_syntax(&self) -> bool {
        matches!(self, FormatError::UnescapedLetter { .. })
    }

    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            FormatError::UnescapedLetter { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// Generate a diagnostic with a caret under the offending character, or
    /// `None` if the error has no location.
    pub fn diagnostic(&self, template: &str) -> Option<String> {
        Some(diagnostic_context(template, self.span()?, &self.to_string()))
    }
}
