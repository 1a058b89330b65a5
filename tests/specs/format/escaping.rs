//! Literal quoting specs
//!
//! Single quotes protect text from being read as tokens; `''` is a literal
//! quote both inside and outside quoted text.

use crate::prelude::*;

fn any() -> Spec {
    duration(Duration::new().minutes(3).seconds(9))
}

#[yare::parameterized(
    two   = { 2 },
    four  = { 4 },
    six   = { 6 },
    ten   = { 10 },
)]
fn doubled_quotes_halve(n: usize) {
    let template = "'".repeat(n);
    any().template(&template).renders(&"'".repeat(n / 2));
}

#[test]
fn token_letters_inside_quotes_are_literal() {
    any()
        .template("m 'minutes' s 'seconds'")
        .renders("3 minutes 9 seconds");
}

#[test]
fn quote_inside_literal() {
    any().template("m 'min''s'").renders("3 min's");
}

#[test]
fn quote_outside_literal() {
    any().template("m''s").renders("3'9");
}

#[test]
fn unterminated_literal_runs_to_end() {
    any()
        .template("s 'seconds, more or less")
        .renders("189 seconds, more or less");
}

#[test]
fn trailing_lone_quote_renders_nothing() {
    any().template("s'").renders("189");
}

#[test]
fn punctuation_and_unicode_pass_through() {
    any().template("m:ss → ✓").renders("3:09 → ✓");
}

#[test]
fn literal_only_template_renders_literal() {
    any().template("'just now'").renders("just now");
}
