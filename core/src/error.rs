// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use icsagenda_ical::IcalError;

/// Errors raised while loading, querying or formatting a calendar.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The calendar text is not well-formed iCalendar.
    #[error(transparent)]
    Ical(#[from] IcalError),

    /// A required property is absent from an event block.
    #[error("event starting on line {line} is missing required property {field}")]
    MissingField {
        /// Property name, e.g. `DTSTART`
        field: &'static str,
        /// Line of the event's `BEGIN:VEVENT`
        line: usize,
    },

    /// A property is present but its value cannot be read.
    #[error("invalid {field} on line {line}: {source}")]
    InvalidProperty {
        /// Property name, e.g. `DTEND`
        field: &'static str,
        /// Line of the property
        line: usize,
        /// What was wrong with the value
        #[source]
        source: IcalError,
    },

    /// A date argument or range does not match the accepted pattern.
    #[error("invalid date '{input}', expected {expected}")]
    Format {
        /// The text as given
        input: String,
        /// Human readable description of the accepted pattern
        expected: &'static str,
    },

    /// An event whose end lies before its start.
    #[error("event '{summary}' ends at {end} before it starts at {start}")]
    EndBeforeStart {
        /// Summary of the offending event
        summary: String,
        /// Start of the event
        start: NaiveDateTime,
        /// End of the event
        end: NaiveDateTime,
    },

    /// The calendar file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the calendar file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
