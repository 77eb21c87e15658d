// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

/// The first instant of a day (00:00:00).
#[must_use]
pub const fn start_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// The last representable instant of a day (23:59:59.999999999).
///
/// An event starting at 23:59:59 still lies strictly before it.
#[must_use]
pub const fn end_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("23:59:59.999999999 must exist in NaiveTime")
}

/// Shift a timestamp by `n` whole weeks, keeping its wall-clock time.
///
/// Returns `None` if the result is out of the representable range.
#[must_use]
pub fn add_weeks(dt: NaiveDateTime, n: i64) -> Option<NaiveDateTime> {
    dt.checked_add_signed(TimeDelta::try_weeks(n)?)
}
