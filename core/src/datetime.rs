// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod loose;
mod util;

pub use self::loose::{DateRange, LooseDate};
pub use self::util::{add_weeks, end_of_day_naive, start_of_day_naive};
