// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveDateTime};

/// A course calendar: a weekly lecture on Tuesdays 9-10 running three weeks,
/// a one-off midterm and a weekly lab on Thursdays, in CRLF form.
pub const COURSES_ICS: &str = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//UVic//Course Calendar//EN\r
BEGIN:VEVENT\r
DTSTART:20230103T090000\r
DTEND:20230103T100000\r
LOCATION:ECS 125\r
SUMMARY:CSC 360 Lecture\r
RRULE:FREQ=WEEKLY;UNTIL=20230124T090000\r
END:VEVENT\r
BEGIN:VEVENT\r
SUMMARY:Midterm\r
LOCATION:DTB A110\r
DTSTART:20230117T083000\r
DTEND:20230117T085000\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART:20230105T143000\r
DTEND:20230105T162000\r
LOCATION:ECS 242\r
SUMMARY:CSC 360 Lab\r
RRULE:FREQ=WEEKLY;UNTIL=20230119T235959\r
END:VEVENT\r
END:VCALENDAR\r
";

/// Creates the text of a single `VEVENT` block.
#[must_use]
pub fn vevent(start: &str, end: &str, summary: &str, location: &str) -> String {
    format!(
        "BEGIN:VEVENT\nDTSTART:{start}\nDTEND:{end}\nLOCATION:{location}\nSUMMARY:{summary}\nEND:VEVENT\n"
    )
}

/// A date in 2023.
#[must_use]
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).expect("valid date")
}

/// A timestamp in 2023.
#[must_use]
pub fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}
