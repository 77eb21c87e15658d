// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compact `DATE` and `DATE-TIME` values.
//!
//! Times are always floating; a trailing `Z` is accepted but not interpreted.

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::IcalError;
use crate::value::miscellaneous::{ValueExpected, digits};

/// `strftime` pattern of a compact `DATE-TIME` value.
pub const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// `strftime` pattern of a compact `DATE` value.
pub const DATE_FORMAT: &str = "%Y%m%d";

const DATE_TIME_EXPECTED: &str = "YYYYMMDDTHHMMSS";
const DATE_EXPECTED: &str = "YYYYMMDD";

/// Parse a compact `YYYYMMDDTHHMMSS` timestamp.
///
/// ## Errors
///
/// Returns [`IcalError::Format`] if the value does not have exactly that shape
/// or does not name a real calendar date and time.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, IcalError> {
    let value = value.trim();
    value_date_time::<'_, &str, extra::Err<Rich<'_, char>>>()
        .parse(value)
        .into_result()
        .map_err(|_| IcalError::Format {
            value: value.to_owned(),
            expected: DATE_TIME_EXPECTED,
        })
}

/// Parse a compact `YYYYMMDD` date.
///
/// ## Errors
///
/// Returns [`IcalError::Format`] if the value is not eight digits naming a
/// real calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, IcalError> {
    let value = value.trim();
    value_date::<'_, &str, extra::Err<Rich<'_, char>>>()
        .parse(value)
        .into_result()
        .map_err(|_| IcalError::Format {
            value: value.to_owned(),
            expected: DATE_EXPECTED,
        })
}

/// Render a timestamp in the compact `YYYYMMDDTHHMMSS` form.
#[must_use]
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// ```txt
/// date          = date-fullyear date-month date-mday
/// date-fullyear = 4DIGIT
/// date-month    = 2DIGIT        ;01-12
/// date-mday     = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
/// ```
pub(crate) fn value_date<'src, I, E>() -> impl Parser<'src, I, NaiveDate, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    digits(4)
        .then(digits(2))
        .then(digits(2))
        .try_map(|((year, month), day), span| {
            i32::try_from(year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
                .ok_or_else(|| E::Error::expected_found([ValueExpected::Date], None, span))
        })
}

/// ```txt
/// date-time = date "T" time-hour time-minute time-second [time-utc]
/// ```
pub(crate) fn value_date_time<'src, I, E>() -> impl Parser<'src, I, NaiveDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .then_ignore(just('Z').or_not())
        .map(|(date, time)| date.and_time(time))
}

fn value_time<'src, I, E>() -> impl Parser<'src, I, NaiveTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    digits(2)
        .then(digits(2))
        .then(digits(2))
        .try_map(|((hour, minute), second), span| {
            NaiveTime::from_hms_opt(hour, minute, second)
                .ok_or_else(|| E::Error::expected_found([ValueExpected::Time], None, span))
        })
}
