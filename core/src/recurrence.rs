// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly recurrence bounded by `UNTIL`.

use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use icsagenda_ical::{RecurrenceFrequency, ValueRecurrenceRule};

use crate::datetime::add_weeks;
use crate::error::{Error, Result};
use crate::event::Event;

/// A weekly recurrence rule.
///
/// Every occurrence is one week after the previous one; the series stops
/// before the first occurrence that would start at or after `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    until: NaiveDateTime,
}

impl RecurrenceRule {
    /// Weekly recurrence ending strictly before `until`.
    #[must_use]
    pub const fn weekly_until(until: NaiveDateTime) -> Self {
        Self { until }
    }

    /// Exclusive upper bound of the series.
    #[must_use]
    pub const fn until(&self) -> NaiveDateTime {
        self.until
    }

    /// Number of occurrences after one starting at `start` and lasting
    /// `duration`.
    fn remaining_after(&self, start: NaiveDateTime, duration: TimeDelta) -> usize {
        let span = self.until - start;
        if span <= TimeDelta::zero() {
            return 0;
        }

        // Occurrences at start + k weeks for k >= 1 while strictly before `until`.
        let weeks = span.num_weeks();
        let exact = TimeDelta::try_weeks(weeks).is_some_and(|w| w == span);
        let before_until = if exact { weeks - 1 } else { weeks };

        // Later starts would end past the last representable instant.
        let representable = NaiveDateTime::MAX
            .checked_sub_signed(duration)
            .map_or(0, |latest| (latest - start).num_weeks().max(0));

        usize::try_from(before_until.min(representable)).unwrap_or(usize::MAX)
    }
}

impl From<ValueRecurrenceRule> for RecurrenceRule {
    fn from(value: ValueRecurrenceRule) -> Self {
        match value.freq {
            Some(RecurrenceFrequency::Weekly) => {}
            Some(freq) => tracing::warn!(%freq, "only weekly recurrence is supported, treating as WEEKLY"),
            None => tracing::warn!("recurrence rule without a known FREQ, treating as WEEKLY"),
        }
        Self::weekly_until(value.until)
    }
}

impl FromStr for RecurrenceRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(ValueRecurrenceRule::parse(s)?.into())
    }
}

impl Event {
    /// The next occurrence in this event's series, one week later with the same
    /// duration, or `None` if the event does not recur or the series has ended.
    #[must_use]
    pub fn next_occurrence(&self) -> Option<Event> {
        let rule = self.rule()?;
        let start = add_weeks(self.start(), 1)?;
        if start >= rule.until() {
            return None;
        }
        let end = start.checked_add_signed(self.duration())?;
        tracing::trace!(summary = self.summary(), %start, "expanded occurrence");
        Some(self.with_times(start, end))
    }

    /// All occurrences of this event, beginning with the event itself.
    #[must_use]
    pub fn occurrences(&self) -> Recurrence {
        Recurrence {
            next: Some(self.clone()),
        }
    }
}

/// Iterator over the occurrences of an event, see [`Event::occurrences`].
///
/// Each item is an independent [`Event`] value.
#[derive(Debug, Clone)]
pub struct Recurrence {
    next: Option<Event>,
}

impl Iterator for Recurrence {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_occurrence();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.next {
            None => 0,
            Some(event) => event
                .rule()
                .map_or(0, |rule| rule.remaining_after(event.start(), event.duration()))
                .saturating_add(1),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Recurrence {}

impl FusedIterator for Recurrence {}
