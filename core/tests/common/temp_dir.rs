// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary calendar files for integration tests.
//!
//! The backing directory is removed when the value is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A calendar file written into a fresh temporary directory.
#[derive(Debug)]
pub struct TempCalendar {
    _dir: TempDir,
    path: PathBuf,
}

impl TempCalendar {
    /// Writes `contents` to `calendar.ics` in a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn new(contents: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("calendar.ics");
        fs::write(&path, contents)?;
        Ok(Self { _dir: dir, path })
    }

    /// Path of the calendar file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
