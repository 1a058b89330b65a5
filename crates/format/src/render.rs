// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token rendering.

use crate::cascade::MagnitudeMap;
use crate::error::FormatError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Render `tokens` in template order, substituting unit runs from
/// `magnitudes`.
///
/// Fails on the first unescaped ASCII letter. A unit run whose unit has no
/// magnitude is treated the same way, reported at the run's first character.
pub fn render(tokens: &[Token], magnitudes: &MagnitudeMap) -> Result<String, FormatError> {
    let mut out = String::with_capacity(tokens.len() * 2);

    for token in tokens {
        match &token.kind {
            TokenKind::EscapedQuote => out.push('\''),
            TokenKind::QuotedLiteral(text) => out.push_str(text),
            TokenKind::UnitRun { unit, len } => match magnitudes.get(*unit) {
                Some(magnitude) => out.push_str(&pad_magnitude(magnitude, *len)),
                None => {
                    let start = token.span.start;
                    let letter = unit.symbol();
                    return Err(FormatError::UnescapedLetter {
                        letter,
                        span: Span::new(start, start + letter.len_utf8()),
                    });
                }
            },
            TokenKind::PassThrough(c) if c.is_ascii_alphabetic() => {
                return Err(FormatError::UnescapedLetter {
                    letter: *c,
                    span: token.span,
                });
            }
            TokenKind::PassThrough(c) => out.push(*c),
        }
    }

    Ok(out)
}

/// Left-pad the digits of `value` with zeros to at least `width`.
///
/// The sign is prepended outside the padding: `pad_magnitude(-5, 3)` is
/// `"-005"`.
pub fn pad_magnitude(value: i128, width: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{:0>width$}", value.unsigned_abs())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
