// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template tokens produced by the [`Lexer`](crate::Lexer).

use crate::span::Span;
use durfmt_core::Unit;
use std::fmt;

/// Kinds of template tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of one unit character, e.g. `ss` → `{ Seconds, 2 }`.
    ///
    /// The run length is the minimum number of digits rendered.
    UnitRun { unit: Unit, len: usize },
    /// Quoted literal text with `''` pairs already collapsed to `'`.
    QuotedLiteral(String),
    /// `''` outside a literal: one literal quote.
    EscapedQuote,
    /// Any other single character.
    PassThrough(char),
}

impl TokenKind {
    /// Unit runs, quoted literals and escaped quotes are recognized tokens;
    /// pass-through characters are not.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, TokenKind::PassThrough(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::UnitRun { unit, len } => {
                let symbol = unit.symbol().to_string();
                write!(f, "unit run '{}'", symbol.repeat(*len))
            }
            TokenKind::QuotedLiteral(s) => write!(f, "literal {:?}", s),
            TokenKind::EscapedQuote => write!(f, "escaped quote"),
            TokenKind::PassThrough(c) => write!(f, "'{}'", c),
        }
    }
}

/// A token with its location in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The unit of a unit run, if this is one.
    pub fn unit(&self) -> Option<Unit> {
        match self.kind {
            TokenKind::UnitRun { unit, .. } => Some(unit),
            _ => None,
        }
    }
}
