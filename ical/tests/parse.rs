// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for parsing whole calendars into components

#![expect(clippy::indexing_slicing)]

use icsagenda_ical::keyword::{KW_DTEND, KW_DTSTART, KW_RRULE, KW_VEVENT};
use icsagenda_ical::{IcalError, ValueRecurrenceRule, parse, parse_date_time};

const COURSES: &str = "\
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
DTEND:20230215T120000\r
DTSTART:20230215T103000\r
END:VEVENT\r
END:VCALENDAR\r
";

#[test]
fn test_parse_calendar_with_events() {
    let roots = parse(COURSES).unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "VCALENDAR");

    let events: Vec<_> = roots[0].children_named(KW_VEVENT).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].line, 4);
    assert_eq!(events[1].line, 11);

    let first = events[0];
    let start = parse_date_time(&first.find_prop(KW_DTSTART).unwrap().value).unwrap();
    let end = parse_date_time(&first.find_prop(KW_DTEND).unwrap().value).unwrap();
    assert_eq!(end - start, chrono::TimeDelta::hours(1));

    let rule: ValueRecurrenceRule = first.find_prop(KW_RRULE).unwrap().value.parse().unwrap();
    assert_eq!(rule.until, parse_date_time("20230124T090000").unwrap());

    assert!(events[1].find_prop(KW_RRULE).is_none());
}

#[test]
fn test_parse_lf_only_calendar() {
    let src = COURSES.replace("\r\n", "\n");
    assert_eq!(parse(&src).unwrap(), parse(COURSES).unwrap());
}

#[test]
fn test_parse_bare_events() {
    let src = "\
BEGIN:VEVENT
SUMMARY:a
END:VEVENT
BEGIN:VEVENT
SUMMARY:b
END:VEVENT
";
    let roots = parse(src).unwrap();
    assert_eq!(roots.len(), 2);
    assert!(roots.iter().all(|c| c.name == KW_VEVENT));
}

#[test]
fn test_parse_empty_source() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\r\n\r\n").unwrap().is_empty());
}

#[test]
fn test_parse_reports_line_of_bad_content_line() {
    let src = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nthis line has no separator\nEND:VEVENT\nEND:VCALENDAR\n";
    match parse(src) {
        Err(IcalError::Syntax { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unterminated_event() {
    let src = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:x\nEND:VCALENDAR\n";
    assert!(matches!(parse(src), Err(IcalError::Syntax { .. })));
}
