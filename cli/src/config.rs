// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use icsagenda_core::APP_NAME;

const CONFIG_ENV: &str = "ICSAGENDA_CONFIG";

/// Load the configuration.
///
/// The file is taken from `path`, else from `ICSAGENDA_CONFIG`, else from
/// `<config dir>/icsagenda/config.toml`. Only the last one may be absent, in
/// which case the defaults are used.
///
/// ## Errors
///
/// Fails if the chosen file cannot be read or is not valid TOML.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let Some(config_dir) = get_config_dir() else {
            tracing::debug!("no user config directory, using default config");
            return Ok(Config::default());
        };
        let config = config_dir.join(APP_NAME).join("config.toml");
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using default config");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

/// Configuration for the `icsagenda` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Calendar used when `--file` is not given. A leading `~/` is expanded.
    pub calendar_path: Option<PathBuf>,
}

/// The calendar file to read: `file` if given, else `calendar_path` of the
/// configuration loaded by [`parse_config`]. The configuration is only read
/// when `file` is `None`.
///
/// ## Errors
///
/// Fails if the configuration cannot be loaded or neither is set.
pub fn resolve_calendar_path(
    file: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(file) = file {
        return Ok(file);
    }

    parse_config(config)?.calendar_path.ok_or_else(|| {
        "No calendar file given: pass --file or set calendar_path in the config file".into()
    })
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config: Config = toml::from_str(s)?;
        config.calendar_path = config.calendar_path.map(|p| expand_path(&p));
        Ok(config)
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}

fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
        tracing::warn!("Home directory not found");
    }
    path.to_path_buf()
}
