// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day-grouped agenda text.
//!
//! ```text
//! January 03, 2023 (Tue)
//! ----------------------
//!  9:00 AM to 10:00 AM: CSC 360 Lecture {ECS 125}
//! ```

use std::fmt;

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

use crate::event::Event;

/// Default `strftime` pattern of a day header, e.g. `January 03, 2023 (Tue)`.
pub const DAY_HEADER_FORMAT: &str = "%B %d, %Y (%a)";

/// Default `strftime` pattern of event times, a space-padded 12-hour clock.
pub const TIME_FORMAT: &str = "%l:%M %p";

/// Renders events as day-grouped text blocks.
#[derive(Debug, Clone, Copy)]
pub struct AgendaFormatter {
    header_format: &'static str,
    time_format: &'static str,
}

impl Default for AgendaFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AgendaFormatter {
    /// Formatter with the default header and time patterns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            header_format: DAY_HEADER_FORMAT,
            time_format: TIME_FORMAT,
        }
    }

    #[cfg(test)]
    const fn with_header_format(mut self, format: &'static str) -> Self {
        self.header_format = format;
        self
    }

    #[cfg(test)]
    const fn with_time_format(mut self, format: &'static str) -> Self {
        self.time_format = format;
        self
    }

    /// One event as `<start> to <end>: <summary> {<location>}`.
    #[must_use]
    pub fn format_event<'a>(&'a self, event: &'a Event) -> EventLine<'a> {
        EventLine {
            event,
            formatter: self,
        }
    }

    /// Header, underline and one line per event for `date`.
    ///
    /// Returns `None` when `events` is empty.
    pub fn format_day<'a>(
        &self,
        date: NaiveDate,
        events: impl IntoIterator<Item = &'a Event>,
    ) -> Option<String> {
        let mut events = events.into_iter().peekable();
        events.peek()?;

        let mut out = self.header(date);
        for event in events {
            out.push('\n');
            out.push_str(&self.format_event(event).to_string());
        }
        Some(out)
    }

    /// Events grouped by the day they start on, with a header whenever the day
    /// changes and a blank line between days.
    ///
    /// `events` must be sorted by start time. Returns `None` when it is empty.
    pub fn format_range<'a>(&self, events: impl IntoIterator<Item = &'a Event>) -> Option<String> {
        let mut out = String::new();
        let mut current: Option<NaiveDate> = None;
        for event in events {
            let date = event.date();
            if current != Some(date) {
                if current.is_some() {
                    out.push_str("\n\n");
                }
                out.push_str(&self.header(date));
                current = Some(date);
            }
            out.push('\n');
            out.push_str(&self.format_event(event).to_string());
        }
        current.map(|_| out)
    }

    fn header(&self, date: NaiveDate) -> String {
        let title = date.format(self.header_format).to_string();
        let underline = "-".repeat(title.width());
        format!("{title}\n{underline}")
    }
}

/// Display wrapper returned by [`AgendaFormatter::format_event`].
#[derive(Debug)]
pub struct EventLine<'a> {
    event: &'a Event,
    formatter: &'a AgendaFormatter,
}

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time_format = self.formatter.time_format;
        write!(
            f,
            "{} to {}: {} {{{}}}",
            self.event.start().format(time_format),
            self.event.end().format(time_format),
            self.event.summary(),
            self.event.location(),
        )
    }
}
