// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use icsagenda_ical::keyword::{
    KW_DTEND, KW_DTSTART, KW_LOCATION, KW_RRULE, KW_SUMMARY, KW_VCALENDAR, KW_VEVENT,
};
use icsagenda_ical::{Component, ContentLine, IcalError, ValueRecurrenceRule, parse_date_time};

use crate::error::{Error, Result};
use crate::recurrence::RecurrenceRule;

/// A single calendar event.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: String,
    summary: String,
    rule: Option<RecurrenceRule>,
}

impl Event {
    /// Create a non-recurring event.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::EndBeforeStart`] if `end` is before `start`.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<Self> {
        let summary = summary.into();
        if end < start {
            return Err(Error::EndBeforeStart {
                summary,
                start,
                end,
            });
        }

        Ok(Self {
            start,
            end,
            location: location.into(),
            summary,
            rule: None,
        })
    }

    /// Attach a recurrence rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RecurrenceRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Read an event from a `VEVENT` component.
    ///
    /// `DTSTART`, `DTEND`, `LOCATION` and `SUMMARY` are required, `RRULE` is
    /// optional. Other properties are ignored.
    ///
    /// ## Errors
    ///
    /// - [`Error::MissingField`] for the first absent required property
    /// - [`Error::InvalidProperty`] for a malformed timestamp or `RRULE`
    /// - [`Error::EndBeforeStart`] if `DTEND` lies before `DTSTART`
    pub fn from_component(component: &Component) -> Result<Self> {
        let required = |field: &'static str| {
            component.find_prop(field).ok_or(Error::MissingField {
                field,
                line: component.line,
            })
        };

        let dtstart = required(KW_DTSTART)?;
        let dtend = required(KW_DTEND)?;
        let location = required(KW_LOCATION)?;
        let summary = required(KW_SUMMARY)?;

        let start = read_prop(KW_DTSTART, dtstart, parse_date_time)?;
        let end = read_prop(KW_DTEND, dtend, parse_date_time)?;
        let rule = component
            .find_prop(KW_RRULE)
            .map(|prop| read_prop(KW_RRULE, prop, ValueRecurrenceRule::parse))
            .transpose()?
            .map(RecurrenceRule::from);

        let event = Self::new(start, end, &location.value, &summary.value)?;
        Ok(match rule {
            Some(rule) => event.with_rule(rule),
            None => event,
        })
    }

    /// Start of the event.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// End of the event.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Calendar date the event starts on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Time between start and end.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Where the event takes place.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Short description of the event.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The recurrence rule, if the event repeats.
    #[must_use]
    pub const fn rule(&self) -> Option<RecurrenceRule> {
        self.rule
    }

    /// Copy of this event moved to new start and end times.
    pub(crate) fn with_times(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}

fn read_prop<T>(
    field: &'static str,
    prop: &ContentLine,
    parse: impl FnOnce(&str) -> Result<T, IcalError>,
) -> Result<T> {
    parse(&prop.value).map_err(|source| Error::InvalidProperty {
        field,
        line: prop.line,
        source,
    })
}

impl FromStr for Event {
    type Err = Error;

    /// Parse the text of exactly one `VEVENT` block, optionally wrapped in a
    /// `VCALENDAR`.
    fn from_str(s: &str) -> Result<Self> {
        let roots = icsagenda_ical::parse(s)?;
        let mut events = roots.iter().flat_map(|root| match root.name.as_str() {
            KW_VEVENT => vec![root],
            KW_VCALENDAR => root.children_named(KW_VEVENT).collect(),
            _ => Vec::new(),
        });

        match (events.next(), events.next()) {
            (Some(component), None) => Self::from_component(component),
            (None, _) => Err(IcalError::Syntax {
                line: 1,
                message: "no VEVENT block found".to_owned(),
            }
            .into()),
            (Some(_), Some(second)) => Err(IcalError::Syntax {
                line: second.line,
                message: "expected a single VEVENT block".to_owned(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LECTURE: &str = "\
BEGIN:VEVENT
DTSTART:20230103T090000
DTEND:20230103T100000
LOCATION:ECS 125
SUMMARY:CSC 360 Lecture
RRULE:FREQ=WEEKLY;UNTIL=20230124T090000
END:VEVENT
";

    fn dt(s: &str) -> NaiveDateTime {
        parse_date_time(s).unwrap()
    }

    #[test]
    fn parses_event_block() {
        let event: Event = LECTURE.parse().unwrap();
        assert_eq!(event.start(), dt("20230103T090000"));
        assert_eq!(event.end(), dt("20230103T100000"));
        assert_eq!(event.location(), "ECS 125");
        assert_eq!(event.summary(), "CSC 360 Lecture");
        assert_eq!(event.duration(), TimeDelta::hours(1));
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert_eq!(event.rule().unwrap().until(), dt("20230124T090000"));
    }

    #[test]
    fn fields_may_come_in_any_order() {
        let src = "\
BEGIN:VEVENT
SUMMARY:Midterm
RRULE:FREQ=WEEKLY;UNTIL=20230301T000000
LOCATION:DTB A110
DTEND:20230215T120000
DTSTART:20230215T103000
END:VEVENT
";
        let event: Event = src.parse().unwrap();
        assert_eq!(event.summary(), "Midterm");
        assert_eq!(event.duration(), TimeDelta::minutes(90));
        assert!(event.rule().is_some());
    }

    #[test]
    fn accepts_calendar_wrapper() {
        let src = format!("BEGIN:VCALENDAR\n{LECTURE}END:VCALENDAR\n");
        let event: Event = src.parse().unwrap();
        assert_eq!(event.summary(), "CSC 360 Lecture");
    }

    #[test]
    fn reports_each_missing_field() {
        for field in [KW_DTSTART, KW_DTEND, KW_LOCATION, KW_SUMMARY] {
            let src: String = LECTURE
                .lines()
                .filter(|l| !l.starts_with(&format!("{field}:")))
                .map(|l| format!("{l}\n"))
                .collect();
            match src.parse::<Event>() {
                Err(Error::MissingField { field: f, line }) => {
                    assert_eq!(f, field);
                    assert_eq!(line, 1);
                }
                other => panic!("{field}: expected missing field, got {other:?}"),
            }
        }
    }

    #[test]
    fn rrule_is_optional() {
        let src = LECTURE.replace("RRULE:FREQ=WEEKLY;UNTIL=20230124T090000\n", "");
        let event: Event = src.parse().unwrap();
        assert_eq!(event.rule(), None);
    }

    #[test]
    fn reports_malformed_timestamp_with_line() {
        let src = LECTURE.replace("DTEND:20230103T100000", "DTEND:2023-01-03 10:00");
        match src.parse::<Event>() {
            Err(Error::InvalidProperty {
                field,
                line,
                source: IcalError::Format { .. },
            }) => {
                assert_eq!(field, KW_DTEND);
                assert_eq!(line, 3);
            }
            other => panic!("expected invalid property, got {other:?}"),
        }
    }

    #[test]
    fn reports_rrule_without_until() {
        let src = LECTURE.replace(";UNTIL=20230124T090000", "");
        assert!(matches!(
            src.parse::<Event>(),
            Err(Error::InvalidProperty {
                source: IcalError::ParseBoundary { .. },
                ..
            })
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        let src = LECTURE.replace("DTEND:20230103T100000", "DTEND:20230103T080000");
        assert!(matches!(
            src.parse::<Event>(),
            Err(Error::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn allows_zero_length_event() {
        let start = dt("20230103T090000");
        let event = Event::new(start, start, "", "Deadline").unwrap();
        assert_eq!(event.duration(), TimeDelta::zero());
    }

    #[test]
    fn rejects_text_without_event() {
        assert!(matches!("".parse::<Event>(), Err(Error::Ical(_))));
        let two = format!("{LECTURE}{LECTURE}");
        assert!(matches!(
            two.parse::<Event>(),
            Err(Error::Ical(IcalError::Syntax { line: 8, .. }))
        ));
    }
}
