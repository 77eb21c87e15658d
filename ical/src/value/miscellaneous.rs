// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared pieces of the value parsers.

use std::borrow::Cow;

use chumsky::Parser;
use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

/// Failure reasons when a specific value was expected but not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// Digits that do not name a real calendar date
    Date,
    /// Digits that do not name a real time of day
    Time,
    /// A rule part that may only occur once was repeated
    RRuleDuplicatePart,
    /// The rule has no `UNTIL` part
    RRuleRequiredUntil,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::Date => Self::Label(Cow::Borrowed("valid calendar date")),
            ValueExpected::Time => Self::Label(Cow::Borrowed("valid time of day")),
            ValueExpected::RRuleDuplicatePart => {
                Self::Label(Cow::Borrowed("each rule part at most once"))
            }
            ValueExpected::RRuleRequiredUntil => Self::Label(Cow::Borrowed("UNTIL rule part")),
        }
    }
}

/// Exactly `n` ASCII digits, read as a decimal number.
pub(crate) fn digits<'src, I, E>(n: usize) -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .exactly(n)
        .collect::<String>()
        .map(|s| s.parse::<u32>().unwrap_or_default())
}
