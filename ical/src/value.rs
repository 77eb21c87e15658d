// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value type parsing module for iCalendar property values.
//!
//! Only the value types needed by events are handled: the compact
//! `DATE`/`DATE-TIME` forms of RFC 5545 Section 3.3.4/3.3.5 and the
//! `RECUR` value of Section 3.3.10.

mod datetime;
mod miscellaneous;
mod rrule;

pub use datetime::{DATE_FORMAT, DATE_TIME_FORMAT, format_date_time, parse_date, parse_date_time};
pub use rrule::{RecurrenceFrequency, ValueRecurrenceRule};
