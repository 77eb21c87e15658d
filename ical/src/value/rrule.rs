// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule values.
//!
//! Only the parts needed to bound a series are read: `FREQ` and `UNTIL`.
//! Other rule parts (`INTERVAL`, `BYDAY`, ...) are accepted and ignored.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::error::IcalError;
use crate::keyword::{
    KW_RRULE_FREQ, KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_HOURLY, KW_RRULE_FREQ_MINUTELY,
    KW_RRULE_FREQ_MONTHLY, KW_RRULE_FREQ_SECONDLY, KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY,
    KW_RRULE_UNTIL,
};
use crate::value::datetime::{format_date_time, value_date, value_date_time};
use crate::value::miscellaneous::ValueExpected;

const FREQ_EXPECTED: &str = "one of SECONDLY, MINUTELY, HOURLY, DAILY, WEEKLY, MONTHLY, YEARLY";

/// Recurrence rule bounded by `UNTIL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRecurrenceRule {
    /// Frequency of recurrence, if present and recognised
    pub freq: Option<RecurrenceFrequency>,
    /// Exclusive upper bound of the series
    pub until: NaiveDateTime,
}

impl ValueRecurrenceRule {
    /// Parse a `RECUR` value such as `FREQ=WEEKLY;UNTIL=20230124T090000`.
    ///
    /// ## Errors
    ///
    /// Returns [`IcalError::ParseBoundary`] if `UNTIL` is missing, repeated, or
    /// is neither a compact date-time nor a compact date.
    pub fn parse(value: &str) -> Result<Self, IcalError> {
        let value = value.trim();
        value_rrule::<'_, &str, extra::Err<Rich<'_, char>>>()
            .parse(value)
            .into_result()
            .map_err(|errs| IcalError::ParseBoundary {
                rule: value.to_owned(),
                reason: errs
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            })
    }
}

/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ; Rule part names are case-insensitive and unordered.
///                 ; UNTIL is REQUIRED; FREQ and UNTIL MUST NOT occur
///                 ; more than once. Other parts are skipped.
/// ```
fn value_rrule<'src, I, E>() -> impl Parser<'src, I, ValueRecurrenceRule, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    recur_rule_part()
        .separated_by(just(';'))
        .allow_trailing()
        .at_least(1)
        .collect()
        .try_map(build_from_parts::<I, E::Error>)
}

fn build_from_parts<'src, I, Er>(
    parts: Vec<Part>,
    span: I::Span,
) -> Result<ValueRecurrenceRule, Er>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    Er: LabelError<'src, I, ValueExpected>,
{
    let mut freq = None;
    let mut until = None;
    for part in parts {
        match part {
            Part::Freq(f) => match freq {
                Some(_) => {
                    return Err(Er::expected_found(
                        [ValueExpected::RRuleDuplicatePart],
                        None,
                        span,
                    ));
                }
                None => freq = Some(f),
            },
            Part::Until(u) => match until {
                Some(_) => {
                    return Err(Er::expected_found(
                        [ValueExpected::RRuleDuplicatePart],
                        None,
                        span,
                    ));
                }
                None => until = Some(u),
            },
            Part::Other(name) => {
                tracing::debug!(part = %name, "ignoring unsupported recurrence rule part");
            }
        }
    }

    let until = until
        .ok_or_else(|| Er::expected_found([ValueExpected::RRuleRequiredUntil], None, span))?;
    let freq = freq.and_then(|f: String| {
        f.parse::<RecurrenceFrequency>()
            .inspect_err(|e| tracing::warn!(error = %e, "ignoring unknown recurrence frequency"))
            .ok()
    });
    Ok(ValueRecurrenceRule { freq, until })
}

#[derive(Debug, Clone)]
enum Part {
    Freq(String),
    Until(NaiveDateTime),
    Other(String),
}

/// ```txt
/// recur-rule-part = ( "FREQ" "=" *VALUE-CHAR )
///                 / ( "UNTIL" "=" enddate )
///                 / ( name "=" *VALUE-CHAR )
/// ```
fn recur_rule_part<'src, I, E>() -> impl Parser<'src, I, Part, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let name = select! { c if char::is_ascii_alphanumeric(&c) || c == '-' => c }
        .repeated()
        .at_least(1)
        .collect::<String>();

    let text = select! { c if char::ne(&c, &';') => c }
        .repeated()
        .collect::<String>();

    let kw = |kw: &'static str| {
        name.clone()
            .filter(move |n: &String| n.eq_ignore_ascii_case(kw))
            .then_ignore(just('='))
    };

    // FREQ is only informational, an unknown value must not fail the rule
    let freq = kw(KW_RRULE_FREQ).ignore_then(text.clone()).map(Part::Freq);

    let until = kw(KW_RRULE_UNTIL).ignore_then(enddate()).map(Part::Until);

    let other = name
        .filter(|n: &String| {
            !n.eq_ignore_ascii_case(KW_RRULE_FREQ) && !n.eq_ignore_ascii_case(KW_RRULE_UNTIL)
        })
        .then_ignore(just('='))
        .then_ignore(text)
        .map(Part::Other);

    choice((freq, until, other))
}

/// ```txt
/// enddate     = date / date-time
/// ```
fn enddate<'src, I, E>() -> impl Parser<'src, I, NaiveDateTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    choice((
        value_date_time(),
        value_date().map(|date| date.and_time(NaiveTime::MIN)),
    ))
}

/// ```txt
/// freq        = "SECONDLY" / "MINUTELY" / "HOURLY" / "DAILY"
///             / "WEEKLY" / "MONTHLY" / "YEARLY"
/// ```
fn freq<'src, I, E>() -> impl Parser<'src, I, RecurrenceFrequency, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_RRULE_FREQ_SECONDLY).to(RecurrenceFrequency::Secondly),
        just(KW_RRULE_FREQ_MINUTELY).to(RecurrenceFrequency::Minutely),
        just(KW_RRULE_FREQ_HOURLY).to(RecurrenceFrequency::Hourly),
        just(KW_RRULE_FREQ_DAILY).to(RecurrenceFrequency::Daily),
        just(KW_RRULE_FREQ_WEEKLY).to(RecurrenceFrequency::Weekly),
        just(KW_RRULE_FREQ_MONTHLY).to(RecurrenceFrequency::Monthly),
        just(KW_RRULE_FREQ_YEARLY).to(RecurrenceFrequency::Yearly),
    ))
}

impl FromStr for ValueRecurrenceRule {
    type Err = IcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ValueRecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(freq) = self.freq {
            write!(f, "{KW_RRULE_FREQ}={freq};")?;
        }
        write!(f, "{KW_RRULE_UNTIL}={}", format_date_time(&self.until))
    }
}

/// Frequency of recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RecurrenceFrequency {
    type Err = IcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let upper = s.to_ascii_uppercase();
        freq::<'_, &str, extra::Default>()
            .parse(upper.as_str())
            .into_result()
            .map_err(|_| IcalError::Format {
                value: s.to_owned(),
                expected: FREQ_EXPECTED,
            })
    }
}

impl Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceFrequency::Secondly => write!(f, "{KW_RRULE_FREQ_SECONDLY}"),
            RecurrenceFrequency::Minutely => write!(f, "{KW_RRULE_FREQ_MINUTELY}"),
            RecurrenceFrequency::Hourly => write!(f, "{KW_RRULE_FREQ_HOURLY}"),
            RecurrenceFrequency::Daily => write!(f, "{KW_RRULE_FREQ_DAILY}"),
            RecurrenceFrequency::Weekly => write!(f, "{KW_RRULE_FREQ_WEEKLY}"),
            RecurrenceFrequency::Monthly => write!(f, "{KW_RRULE_FREQ_MONTHLY}"),
            RecurrenceFrequency::Yearly => write!(f, "{KW_RRULE_FREQ_YEARLY}"),
        }
    }
}
