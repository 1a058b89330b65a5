// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Token-based duration formatting.
//!
//! Renders a [`Duration`] through a template, the way date formatters render
//! calendar dates, but for elapsed time.
//!
//! # Quick Start
//!
//! ```ignore
//! use durfmt_format::{format_duration, Duration};
//!
//! let d = Duration::new().days(3).hours(13).minutes(33).seconds(2);
//! let s = format_duration(&d, "d 'days' h 'hour(s)' m 'minutes' ss 'seconds'")?;
//! assert_eq!(s.as_deref(), Some("3 days 13 hour(s) 33 minutes 02 seconds"));
//! # Ok::<(), durfmt_format::FormatError>(())
//! ```
//!
//! # Template Grammar
//!
//! - **Unit tokens**: `y` years, `M` months, `w` weeks, `d` days, `h` hours,
//!   `m` minutes, `s` seconds. Repeat a token to set a minimum digit width
//!   (`ss` → `02`).
//! - **Literals**: text in single quotes is copied verbatim. An unterminated
//!   quote runs to the end of the template.
//! - **Quote escapes**: `''` renders one `'`, inside or outside a literal.
//! - **Other characters** pass through, except ASCII letters, which must be
//!   quoted.
//!
//! # Dynamic Recalculation
//!
//! Magnitudes are computed from the total length of the duration and the
//! units the template asks for. A unit missing from the template is folded
//! into the next smaller unit that is present, so 1h30m renders as
//! `90` under `m` and as `1`/`30` under `h m`.

mod cascade;
mod error;
mod formatter;
mod lexer;
mod render;
pub mod span;
mod token;

pub use cascade::{MagnitudeMap, PresentUnits};
pub use error::FormatError;
pub use formatter::{format_duration, format_interval, format_timestamps, Formatter};
pub use lexer::Lexer;
pub use render::{pad_magnitude, render};
pub use span::{diagnostic_context, Span};
pub use token::{Token, TokenKind};

// Core types callers need alongside the formatter
pub use durfmt_core::{
    duration_to_milliseconds, CalendarInterval, Duration, IntervalToDuration, Unit, UnitTable,
    UnitWeights,
};
