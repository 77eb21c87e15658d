// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lex, scan and parse the subset of iCalendar used by `icsagenda`.
//!
//! The crate stops at the syntax level plus the two value types the agenda
//! needs: compact date-times (`YYYYMMDDTHHMMSS`) and `RRULE` values. Turning
//! components into events is left to `icsagenda-core`.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod keyword;
mod parser;
pub mod syntax;
pub mod value;

pub use crate::error::IcalError;
pub use crate::parser::parse;
pub use crate::syntax::{Component, ContentLine};
pub use crate::value::{
    DATE_FORMAT, DATE_TIME_FORMAT, RecurrenceFrequency, ValueRecurrenceRule, format_date_time,
    parse_date, parse_date_time,
};
