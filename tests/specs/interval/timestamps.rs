//! Interval entry point specs
//!
//! Two timestamps are broken into a duration by the calendar collaborator
//! and then formatted.

use crate::prelude::*;
use chrono::{DateTime, Utc};
use durfmt_format::{format_interval, format_timestamps};

#[test]
fn timestamps_in_either_order() {
    let template = "d 'days', s 'seconds,' h 'hours'";
    let forward = format_timestamps("2020-10-19T00:08:29Z", "2020-10-20T04:10:00Z", template);
    let backward = format_timestamps("2020-10-20T04:10:00Z", "2020-10-19T00:08:29Z", template);
    similar_asserts::assert_eq!(
        forward.clone().unwrap().as_deref(),
        Some("1 days, 91 seconds, 4 hours")
    );
    assert_eq!(forward, backward);
}

#[test]
fn offsets_are_normalized_to_utc() {
    let out = format_timestamps(
        "2020-07-26T02:00:00+02:00",
        "2020-07-26T00:00:26Z",
        "s 'seconds'",
    )
    .unwrap();
    assert_eq!(out.as_deref(), Some("26 seconds"));
}

#[test]
fn invalid_timestamp_is_invalid_argument() {
    let err = format_timestamps("not a date", "2020-07-26T00:00:00Z", "s").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("\"not a date\""), "{err}");
}

#[test]
fn instants_entry_point() {
    let out = format_interval(
        at("2020-07-26T00:00:00Z"),
        at("2020-07-29T13:33:02Z"),
        "d 'days' h 'hour(s)' m 'minutes' ss 'seconds'",
    )
    .unwrap();
    assert_eq!(
        out.as_deref(),
        Some("3 days 13 hour(s) 33 minutes 02 seconds")
    );
}

#[test]
fn template_errors_surface_through_interval_entry_points() {
    let err = format_interval(
        at("2020-07-26T00:00:00Z"),
        at("2020-07-26T01:00:00Z"),
        "h hours",
    )
    .unwrap_err();
    assert!(matches!(err, FormatError::UnescapedLetter { letter: 'o', .. }));
}

#[test]
fn custom_collaborator() {
    let always_a_week = |_: DateTime<Utc>, _: DateTime<Utc>| Duration::new().weeks(1);
    let out = Formatter::default()
        .format_interval_with(
            &always_a_week,
            at("2020-01-01T00:00:00Z"),
            at("2020-01-01T00:00:00Z"),
            "d 'days'",
        )
        .unwrap();
    assert_eq!(out.as_deref(), Some("7 days"));
}
