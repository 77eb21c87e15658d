// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgGroup, ArgMatches, Command, builder::styling, crate_version};
use colored::Colorize;
use icsagenda_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::arg::{AgendaArgs, CommonArgs};
use crate::cmd_agenda::{CmdDay, CmdRange};
use crate::cmd_generate_completion::CmdGenerateCompletion;

const LOG_ENV: &str = "ICSAGENDA_LOG";

/// Run the `icsagenda` command-line interface.
#[must_use]
pub fn run() -> ExitCode {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Whether to log debug output
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    #[must_use]
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Print the events of an iCalendar file for a day or a range of days.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .args_conflicts_with_subcommands(true)
            .subcommand_negates_reqs(true)
            .arg(CommonArgs::config())
            .arg(CommonArgs::verbose())
            .arg(AgendaArgs::start())
            .arg(AgendaArgs::end())
            .arg(AgendaArgs::day())
            .arg(AgendaArgs::file())
            .group(
                ArgGroup::new("mode")
                    .args([AgendaArgs::START, AgendaArgs::DAY])
                    .required(true),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    ///
    /// ## Errors
    ///
    /// Fails if the matched arguments do not form a command.
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    ///
    /// ## Errors
    ///
    /// Fails on invalid arguments, including malformed dates.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    ///
    /// ## Errors
    ///
    /// Fails if the matches lack the arguments of the selected mode.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdGenerateCompletion::NAME, matches)) => {
                Commands::GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            Some((name, _)) => return Err(format!("unknown command: {name}").into()),
            None if AgendaArgs::get_day(matches).is_some() => Commands::Day(CmdDay::from(matches)?),
            None => Commands::Range(CmdRange::from(matches)?),
        };

        Ok(Cli {
            config: CommonArgs::get_config(matches),
            verbose: CommonArgs::get_verbose(matches),
            command,
        })
    }

    /// Run the command
    ///
    /// ## Errors
    ///
    /// Returns the first configuration, loading or query error.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Print the events between two days
    Range(CmdRange),

    /// Print the events of one day
    Day(CmdDay),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration file
    ///
    /// ## Errors
    ///
    /// Returns the first configuration, loading or query error.
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Range(a) => a.run(config),
            Commands::Day(a) => a.run(config),
            Commands::GenerateCompletion(a) => a.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use icsagenda_core::LooseDate;

    use super::*;

    fn date(s: &str) -> LooseDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_range() {
        let cli = Cli::try_parse_from([
            "icsagenda",
            "--start=2023/1/1",
            "--end=2023/1/31",
            "--file=calendar.ics",
        ])
        .unwrap();
        assert_eq!(cli.config, None);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Range(cmd) => {
                assert_eq!(cmd.start, date("2023/1/1"));
                assert_eq!(cmd.end, date("2023/1/31"));
                assert_eq!(cmd.file, Some(PathBuf::from("calendar.ics")));
            }
            _ => panic!("Expected Range command"),
        }
    }

    #[test]
    fn test_parse_day() {
        let cli = Cli::try_parse_from(["icsagenda", "--day", "2023/1/3", "-f", "calendar.ics"])
            .unwrap();
        match cli.command {
            Commands::Day(cmd) => {
                assert_eq!(cmd.day, date("2023/1/3"));
                assert_eq!(cmd.file, Some(PathBuf::from("calendar.ics")));
            }
            _ => panic!("Expected Day command"),
        }
    }

    #[test]
    fn test_parse_file_is_optional() {
        let cli = Cli::try_parse_from(["icsagenda", "--day=2023/1/3"]).unwrap();
        assert!(matches!(cli.command, Commands::Day(CmdDay { file: None, .. })));
    }

    #[test]
    fn test_parse_config_and_verbose() {
        let cli = Cli::try_parse_from([
            "icsagenda",
            "-c",
            "/etc/icsagenda.toml",
            "-v",
            "--day=2023/1/3",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/icsagenda.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_day_with_range() {
        let args = ["icsagenda", "--day=2023/1/3", "--start=2023/1/1", "--end=2023/1/31"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_range_needs_both_ends() {
        assert!(Cli::try_parse_from(["icsagenda", "--start=2023/1/1"]).is_err());
        assert!(Cli::try_parse_from(["icsagenda", "--end=2023/1/31"]).is_err());
    }

    #[test]
    fn test_parse_requires_a_mode() {
        assert!(Cli::try_parse_from(["icsagenda"]).is_err());
        assert!(Cli::try_parse_from(["icsagenda", "--file=calendar.ics"]).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["icsagenda", "--day=2023.1.3"]).is_err());
        assert!(Cli::try_parse_from(["icsagenda", "--day=2023/2/30"]).is_err());
        let err = Cli::try_parse_from(["icsagenda", "--day=tomorrow"]).unwrap_err();
        assert!(err.to_string().contains("tomorrow"), "{err}");
    }

    #[test]
    fn test_parse_generate_completion() {
        let cli = Cli::try_parse_from(["icsagenda", "generate-completion", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateCompletion(_)));
    }

    #[test]
    fn test_generate_completion_rejects_agenda_args() {
        let args = ["icsagenda", "--day=2023/1/3", "generate-completion", "zsh"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }
}
