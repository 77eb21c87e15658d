// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events, weekly recurrence expansion, a per-day calendar index and the
//! agenda text format.

mod datetime;
mod error;
mod event;
mod formatter;
mod recurrence;
mod store;

pub use crate::datetime::{DateRange, LooseDate, add_weeks, end_of_day_naive, start_of_day_naive};
pub use crate::error::{Error, Result};
pub use crate::event::Event;
pub use crate::formatter::{AgendaFormatter, EventLine};
pub use crate::recurrence::{Recurrence, RecurrenceRule};
pub use crate::store::CalendarStore;

/// The name of the application.
pub const APP_NAME: &str = "icsagenda";
