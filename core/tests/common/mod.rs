// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Sample calendar sources (fixtures)
//! - Temporary calendar files with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{COURSES_ICS, at, date, vevent};
#[allow(unused_imports)]
pub use temp_dir::TempCalendar;
