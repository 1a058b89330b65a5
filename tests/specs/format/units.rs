//! Unit token specs
//!
//! Each unit token is replaced by its magnitude; repeating a token sets the
//! minimum number of digits.

use crate::prelude::*;

const START: &str = "2020-07-26T00:00:00Z";

#[yare::parameterized(
    seconds       = { "2020-07-26T00:00:26Z", "s 'seconds'", "26 seconds" },
    seconds_ago   = { "2020-07-26T00:00:26Z", "s 'seconds ago'", "26 seconds ago" },
    zero_minutes  = { "2020-07-26T00:00:26Z", "m 'minutes,' s 'seconds ago'", "0 minutes, 26 seconds ago" },
    minutes       = { "2020-07-26T00:07:26Z", "m 'minutes'", "7 minutes" },
    min_ago       = { "2020-07-26T00:07:26Z", "m 'min ago'", "7 min ago" },
    min_sec       = { "2020-07-26T00:07:26Z", "m 'minutes,' s 'seconds ago'", "7 minutes, 26 seconds ago" },
    hour          = { "2020-07-26T01:07:26Z", "h 'hour'", "1 hour" },
    hr_ago        = { "2020-07-26T01:07:26Z", "h 'hr ago'", "1 hr ago" },
    hour_min_sec  = { "2020-07-26T01:07:26Z", "h 'hour(s)' m 'minutes' s 'seconds'", "1 hour(s) 7 minutes 26 seconds" },
    days          = { "2020-07-29T13:33:02Z", "d 'days'", "3 days" },
    days_ago      = { "2020-07-29T13:33:02Z", "d 'days ago'", "3 days ago" },
    days_full     = { "2020-07-29T13:33:02Z", "d 'days' h 'hour(s)' m 'minutes' ss 'seconds'", "3 days 13 hour(s) 33 minutes 02 seconds" },
    months        = { "2020-12-16T09:45:55Z", "M 'months'", "4 months" },
    months_ago    = { "2020-12-16T09:45:55Z", "M 'months ago'", "4 months ago" },
    months_full   = { "2020-12-16T09:45:55Z", "M 'months' d 'days' h 'hour(s)' m 'minutes' s 'seconds'", "4 months 20 days 9 hour(s) 45 minutes 55 seconds" },
)]
fn calendar_interval(end: &str, template: &str, expected: &str) {
    between(START, end).template(template).renders(expected);
}

#[test]
fn years_over_two_decades() {
    let spec = between("2001-07-26T00:00:00Z", "2020-12-16T09:45:55Z");
    spec.template("y 'years'").renders("19 years");
    spec.template("y 'years ago'").renders("19 years ago");
    spec.template("y 'years' M 'months' d 'days' h 'hour(s)' m 'minutes' s 'seconds'")
        .renders("19 years 4 months 20 days 9 hour(s) 45 minutes 55 seconds");
}

#[test]
fn repeated_tokens_add_leading_zeros() {
    between(START, "2020-07-26T06:05:03Z")
        .template("hh 'hours' mmm 'minutes' ss 'seconds'")
        .renders("06 hours 005 minutes 03 seconds");
}

#[test]
fn repeated_tokens_never_truncate() {
    between(START, "2020-07-26T14:20:11Z")
        .template("hh 'hours' mm 'minutes' ss 'seconds'")
        .renders("14 hours 20 minutes 11 seconds");
    duration(Duration::new().seconds(12_345))
        .template("s")
        .renders("12345");
}

#[yare::parameterized(
    seconds_w1 = { "s",    1 },
    seconds_w4 = { "ssss", 4 },
    minutes_w3 = { "mmm",  3 },
    hours_w2   = { "hh",   2 },
    days_w5    = { "ddddd", 5 },
)]
fn single_unit_width_and_value(template: &str, width: usize) {
    let d = Duration::new().days(2).hours(3).minutes(4).seconds(5);
    let total = durfmt_format::duration_to_milliseconds(&d);
    let unit = UnitTable::standard()
        .lookup(template.chars().next().unwrap())
        .unwrap();
    let expected = total / i128::from(unit.millis);

    let out = duration(d).template(template).output();
    assert!(out.len() >= width, "{out:?} narrower than {width}");
    assert_eq!(out.parse::<i128>().unwrap(), expected);
}

#[test]
fn weeks_are_a_unit_token() {
    duration(Duration::new().days(23))
        .template("w 'weeks' d 'days'")
        .renders("3 weeks 2 days");
    duration(Duration::new().weeks(1))
        .template("h 'hours'")
        .renders("168 hours");
}

#[test]
fn zero_duration_renders_zeros() {
    duration(Duration::new())
        .template("hh:mm:ss")
        .renders("00:00:00");
}

#[test]
fn negative_duration_renders_signed() {
    duration(Duration::new().hours(-2).minutes(-5))
        .template("hh 'h' mm 'm'")
        .renders("-02 h -05 m");
}

#[test]
fn custom_calendar_table() {
    let table = durfmt_format::UnitWeights {
        months: 30 * durfmt_core::DAY,
        ..Default::default()
    }
    .into_table()
    .unwrap();
    duration(Duration::new().days(61))
        .table(table)
        .template("M 'months' d 'day'")
        .renders("2 months 1 day");
}
