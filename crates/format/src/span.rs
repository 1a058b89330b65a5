// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for format templates.

/// A span representing a range in the template text.
///
/// Spans use byte offsets for efficient slicing and work with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Generate a diagnostic pointing at `span` inside a single-line template.
///
/// ```text
/// error: format string contains an unescaped latin alphabet character `o`
///   --> column 4
///    |
///    | h hours
///    |    ^
/// ```
///
/// Templates containing newlines are shown whole; the column counts
/// characters from the start of the template.
pub fn diagnostic_context(template: &str, span: Span, message: &str) -> String {
    let start = span.start.min(template.len());
    let col = template.get(..start).map(|s| s.chars().count()).unwrap_or(0);
    let width = span.slice(template).chars().count().max(1);

    format!(
        "error: {}\n  --> column {}\n   |\n   | {}\n   | {}{}",
        message,
        col + 1, // 1-indexed for user display
        template,
        " ".repeat(col),
        "^".repeat(width)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
