// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::{ArgMatches, Command, ValueEnum, arg};
use clap_complete::{Shell as ClapShell, generate};
use clap_complete_nushell::Nushell;

use crate::Cli;

const NUSHELL: &str = "nushell";

/// Write a shell completion script to stdout.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    /// Target shell
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    /// Name of the subcommand.
    pub const NAME: &str = "generate-completion";

    /// The `generate-completion` subcommand, hidden from help.
    #[must_use]
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script of icsagenda for SHELL")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Shell to complete for").value_parser(shell_parser()))
    }

    /// Read the command from its subcommand matches.
    ///
    /// ## Errors
    ///
    /// Fails if no shell was given.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .ok_or("a shell is required")?;
        Ok(Self { shell })
    }

    /// Print the completion script.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout().lock());
        Ok(())
    }

    /// Write the completion script to `buf`.
    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self.shell {
            Shell::Clap(shell) => generate(shell, &mut cmd, name, buf),
            Shell::Nushell => generate(Nushell, &mut cmd, name, buf),
        }
    }
}

/// Shells a completion script can be generated for: those built into
/// `clap_complete`, and Nushell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// A shell supported by `clap_complete` itself
    Clap(ClapShell),
    /// Nushell, through `clap_complete_nushell`
    Nushell,
}

fn shell_parser() -> impl TypedValueParser<Value = Shell> {
    let names = ClapShell::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .chain([PossibleValue::new(NUSHELL)]);

    PossibleValuesParser::new(names).try_map(|name: String| match name.as_str() {
        NUSHELL => Ok(Shell::Nushell),
        other => other.parse().map(Shell::Clap),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> Result<CmdGenerateCompletion, clap::Error> {
        let matches =
            Cli::command().try_get_matches_from(["icsagenda", "generate-completion", shell])?;
        let sub_matches = matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap();
        Ok(CmdGenerateCompletion::from(sub_matches).unwrap())
    }

    #[test]
    fn test_parse_generate_completion() {
        let parsed = parse("bash").unwrap();
        assert_eq!(parsed.shell, Shell::Clap(ClapShell::Bash));

        let mut output = vec![];
        parsed.generate(&mut output);
        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("icsagenda"));
        assert!(script.contains("--day"));
    }

    #[test]
    fn test_parse_shell_variants() {
        for (name, shell) in [
            ("bash", Shell::Clap(ClapShell::Bash)),
            ("elvish", Shell::Clap(ClapShell::Elvish)),
            ("fish", Shell::Clap(ClapShell::Fish)),
            ("powershell", Shell::Clap(ClapShell::PowerShell)),
            ("zsh", Shell::Clap(ClapShell::Zsh)),
            ("nushell", Shell::Nushell),
        ] {
            let parsed =
                parse(name).unwrap_or_else(|e| panic!("Failed to parse for shell '{name}': {e}"));
            assert_eq!(parsed.shell, shell);

            let mut output = vec![];
            parsed.generate(&mut output);
            assert!(!output.is_empty());
        }
    }

    #[test]
    fn test_parse_unknown_shell() {
        let err = parse("tcsh").unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
