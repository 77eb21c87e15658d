// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while reading iCalendar text.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IcalError {
    /// The text is not well-formed: bad content line, unbalanced `BEGIN`/`END`.
    #[error("syntax error on line {line}: {message}")]
    Syntax {
        /// 1-based line number in the source text
        line: usize,
        /// What went wrong
        message: String,
    },

    /// A value does not match the expected pattern, e.g. a malformed timestamp.
    #[error("invalid value '{value}', expected {expected}")]
    Format {
        /// The offending value
        value: String,
        /// Human readable description of the accepted pattern
        expected: &'static str,
    },

    /// A recurrence rule without a usable `UNTIL` boundary.
    #[error("invalid recurrence rule '{rule}': {reason}")]
    ParseBoundary {
        /// The full `RRULE` value
        rule: String,
        /// Why the boundary could not be read
        reason: String,
    },
}

impl IcalError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}
