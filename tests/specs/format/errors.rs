//! Error handling specs
//!
//! Missing arguments and template syntax errors are reported; templates with
//! nothing to render produce no result instead of failing.

use crate::prelude::*;

#[test]
fn malformed_template_cites_letter() {
    duration(Duration::new().minutes(10))
        .template("h hours")
        .rejects_letter('o')
        .error_has("unescaped latin alphabet character `o`")
        .diagnostic_has("--> column 4");
}

#[yare::parameterized(
    uppercase_hour = { "H:mm",       'H' },
    unknown_unit   = { "x 'units'",  'x' },
    unquoted_word  = { "s seconds",  'e' },
    day_of_year    = { "D",          'D' },
)]
fn unknown_letters_rejected(template: &str, letter: char) {
    duration(Duration::new().seconds(1))
        .template(template)
        .rejects_letter(letter);
}

#[test]
fn missing_duration_fails_before_tokenizing() {
    no_duration()
        .template("h hours")
        .is_invalid_argument()
        .error_has("`duration` is required");
}

#[test]
fn missing_template_fails() {
    duration(Duration::new().hours(3))
        .template("")
        .is_invalid_argument()
        .error_has("`template` is required");
}

#[yare::parameterized(
    spaces      = { "   " },
    punctuation = { " - " },
    newline     = { "\n" },
)]
fn template_without_tokens_has_no_result(template: &str) {
    duration(Duration::new().seconds(1))
        .template(template)
        .is_absent();
}

#[test]
fn zero_and_negative_counts_are_accepted() {
    duration(Duration::new().seconds(0))
        .template("s")
        .renders("0");
    duration(Duration::new().seconds(-3))
        .template("s")
        .renders("-3");
}
