// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of `icsagenda`: print the events of an iCalendar
//! file for a day or a range of days.

mod arg;
mod cli;
mod cmd_agenda;
mod cmd_generate_completion;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_agenda::{CmdDay, CmdRange};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::config::{Config, parse_config, resolve_calendar_path};
