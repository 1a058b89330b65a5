// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template lexer.
//!
//! Scans left to right with a fixed rule priority at each position:
//!
//! 1. a maximal run of one unit character (`y M w d h m s`) → `UnitRun`
//! 2. `''` → `EscapedQuote`
//! 3. `'` up to the next lone `'` (or end of input) → `QuotedLiteral`,
//!    with `''` inside collapsed to `'`
//! 4. anything else → `PassThrough`, one character at a time
//!
//! The lexer never fails. Unknown letters come out as pass-through tokens
//! and are rejected by the renderer.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use durfmt_core::{Unit, UnitTable};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

const QUOTE: char = '\'';

/// Streaming tokenizer over a format template.
///
/// # Examples
///
/// ```ignore
/// use durfmt_format::{Lexer, TokenKind};
/// use durfmt_core::{Unit, UnitTable};
///
/// let tokens = Lexer::tokenize("ss 'sec'", UnitTable::standard());
/// assert_eq!(tokens[0].kind, TokenKind::UnitRun { unit: Unit::Seconds, len: 2 });
/// assert_eq!(tokens[2].kind, TokenKind::QuotedLiteral("sec".into()));
/// ```
pub struct Lexer<'a, 't> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    table: &'t UnitTable,
}

impl<'a, 't> Lexer<'a, 't> {
    pub fn new(input: &'a str, table: &'t UnitTable) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            table,
        }
    }

    /// Tokenize the whole template.
    pub fn tokenize(input: &'a str, table: &'t UnitTable) -> Vec<Token> {
        Lexer::new(input, table).collect()
    }

    /// Byte offset of the next unread character.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn eat(&mut self, ch: char) -> bool {
        self.chars.next_if(|&(_, c)| c == ch).is_some()
    }

    fn lex_unit_run(&mut self, start: usize, symbol: char, unit: Unit) -> Token {
        let mut len = 1;
        while self.eat(symbol) {
            len += 1;
        }
        Token::new(
            TokenKind::UnitRun { unit, len },
            Span::new(start, self.offset()),
        )
    }

    /// Lex from an opening quote at `start` (already consumed).
    fn lex_quoted(&mut self, start: usize) -> Token {
        if self.eat(QUOTE) {
            return Token::new(TokenKind::EscapedQuote, Span::new(start, self.offset()));
        }

        let mut content = String::new();
        while let Some((_, c)) = self.chars.next() {
            if c != QUOTE {
                content.push(c);
            } else if self.eat(QUOTE) {
                content.push(QUOTE);
            } else {
                break;
            }
        }
        Token::new(
            TokenKind::QuotedLiteral(content),
            Span::new(start, self.offset()),
        )
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (start, c) = self.chars.next()?;

        if c == QUOTE {
            return Some(self.lex_quoted(start));
        }
        if let Some(d) = self.table.lookup(c) {
            let unit = d.unit;
            return Some(self.lex_unit_run(start, c, unit));
        }
        Some(Token::new(
            TokenKind::PassThrough(c),
            Span::new(start, start + c.len_utf8()),
        ))
    }
}

impl FusedIterator for Lexer<'_, '_> {}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
