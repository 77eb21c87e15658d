// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::datetime::util::{end_of_day_naive, start_of_day_naive};
use crate::error::{Error, Result};

const LOOSE_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

const LOOSE_DATE_EXPECTED: &str = "Y/M/D (e.g. 2023/1/3) or YYYY-MM-DD";

/// A calendar date as typed by a user, e.g. `2023/1/3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LooseDate(NaiveDate);

impl LooseDate {
    /// Parse `Y/M/D` with 1-4 digit year and 1-2 digit month and day, or the
    /// ISO form `YYYY-MM-DD`.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Format`] if the text has another shape or names a date
    /// that does not exist.
    pub fn parse(s: &str) -> Result<Self> {
        let input = s.trim();
        let err = || Error::Format {
            input: input.to_owned(),
            expected: LOOSE_DATE_EXPECTED,
        };

        // chrono reads a leading sign as part of the year
        if !input.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(err());
        }

        LOOSE_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .map(Self)
            .ok_or_else(err)
    }

    /// The calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// 00:00:00 on this date.
    #[must_use]
    pub fn start_of_day(self) -> NaiveDateTime {
        NaiveDateTime::new(self.0, start_of_day_naive())
    }

    /// The last instant of this date, see [`end_of_day_naive`](crate::end_of_day_naive).
    #[must_use]
    pub fn end_of_day(self) -> NaiveDateTime {
        NaiveDateTime::new(self.0, end_of_day_naive())
    }
}

impl FromStr for LooseDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for LooseDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for LooseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y/%m/%d"))
    }
}

/// An open interval of timestamps: both bounds are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Exclusive lower bound
    pub start: NaiveDateTime,
    /// Exclusive upper bound
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range between two explicit timestamps.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Range from the start of `start` to the end of `end`.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Format`] if `start` is after `end`.
    pub fn from_loose(start: LooseDate, end: LooseDate) -> Result<Self> {
        if start > end {
            return Err(Error::Format {
                input: format!("{start}..{end}"),
                expected: "a start date not after the end date",
            });
        }
        Ok(Self::new(start.start_of_day(), end.end_of_day()))
    }

    /// Whether `t` lies strictly between the bounds.
    #[must_use]
    pub fn contains(&self, t: &NaiveDateTime) -> bool {
        self.start < *t && *t < self.end
    }
}
