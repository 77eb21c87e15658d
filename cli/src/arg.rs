// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use icsagenda_core::LooseDate;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn config() -> Arg {
        arg!(-c --config <CONFIG> "Path to the configuration file")
            .long_help(
                "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/icsagenda/config.toml on Linux and \
MacOS, %APPDATA%/icsagenda/config.toml on Windows. Can also be set with ICSAGENDA_CONFIG.",
            )
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_config(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("config").cloned()
    }

    pub fn verbose() -> Arg {
        arg!(-v --verbose "Log what is being loaded to stderr")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AgendaArgs;

impl AgendaArgs {
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const DAY: &str = "day";

    pub fn start() -> Arg {
        arg!(--start <DATE> "First day of the range, as Y/M/D")
            .value_parser(value_parser!(LooseDate))
            .requires(Self::END)
    }

    pub fn get_start(matches: &ArgMatches) -> Option<LooseDate> {
        matches.get_one(Self::START).copied()
    }

    pub fn end() -> Arg {
        arg!(--end <DATE> "Last day of the range, as Y/M/D")
            .value_parser(value_parser!(LooseDate))
            .requires(Self::START)
    }

    pub fn get_end(matches: &ArgMatches) -> Option<LooseDate> {
        matches.get_one(Self::END).copied()
    }

    pub fn day() -> Arg {
        arg!(--day <DATE> "Show a single day, as Y/M/D")
            .value_parser(value_parser!(LooseDate))
            .conflicts_with_all([Self::START, Self::END])
    }

    pub fn get_day(matches: &ArgMatches) -> Option<LooseDate> {
        matches.get_one(Self::DAY).copied()
    }

    pub fn file() -> Arg {
        arg!(-f --file <FILE> "The iCalendar file to read")
            .long_help(
                "The iCalendar file to read. Overrides `calendar_path` from the configuration file.",
            )
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("file").cloned()
    }
}
