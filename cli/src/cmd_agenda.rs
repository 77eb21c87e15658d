// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::ArgMatches;
use icsagenda_core::{AgendaFormatter, CalendarStore, DateRange, LooseDate};

use crate::arg::AgendaArgs;
use crate::config::resolve_calendar_path;

/// Print every event between two days, grouped by day.
#[derive(Debug, Clone)]
pub struct CmdRange {
    /// First day, exclusive of its 00:00:00
    pub start: LooseDate,

    /// Last day, inclusive up to its end
    pub end: LooseDate,

    /// Calendar file given on the command line
    pub file: Option<PathBuf>,
}

impl CmdRange {
    /// Read the command from matches produced by [`Cli::command`](crate::Cli::command).
    ///
    /// ## Errors
    ///
    /// Fails if `--start` or `--end` is missing.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let (Some(start), Some(end)) = (
            AgendaArgs::get_start(matches),
            AgendaArgs::get_end(matches),
        ) else {
            return Err("both --start and --end are required for a range".into());
        };

        Ok(Self {
            start,
            end,
            file: AgendaArgs::get_file(matches),
        })
    }

    /// Load the calendar and print the agenda, or nothing if no event matches.
    ///
    /// ## Errors
    ///
    /// Fails if no calendar file is configured, the file cannot be loaded, or
    /// `start` is after `end`.
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        let path = resolve_calendar_path(self.file.clone(), config)?;
        let store = CalendarStore::from_path(&path)?;
        if let Some(text) = self.render(&store)? {
            println!("{text}");
        }
        Ok(())
    }

    /// Agenda text for this range, `None` if no event falls into it.
    ///
    /// ## Errors
    ///
    /// Fails if `start` is after `end`.
    pub fn render(&self, store: &CalendarStore) -> Result<Option<String>, Box<dyn Error>> {
        let range = DateRange::from_loose(self.start, self.end)?;
        tracing::debug!(start = %range.start, end = %range.end, "querying range");
        Ok(AgendaFormatter::new().format_range(store.range(&range)))
    }
}

/// Print the events of a single day.
#[derive(Debug, Clone)]
pub struct CmdDay {
    /// The day to show
    pub day: LooseDate,

    /// Calendar file given on the command line
    pub file: Option<PathBuf>,
}

impl CmdDay {
    /// Read the command from matches produced by [`Cli::command`](crate::Cli::command).
    ///
    /// ## Errors
    ///
    /// Fails if `--day` is missing.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let day = AgendaArgs::get_day(matches).ok_or("--day is required")?;
        Ok(Self {
            day,
            file: AgendaArgs::get_file(matches),
        })
    }

    /// Load the calendar and print the day, or nothing if it has no events.
    ///
    /// ## Errors
    ///
    /// Fails if no calendar file is configured or the file cannot be loaded.
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        let path = resolve_calendar_path(self.file.clone(), config)?;
        let store = CalendarStore::from_path(&path)?;
        if let Some(text) = self.render(&store) {
            println!("{text}");
        }
        Ok(())
    }

    /// Agenda text for this day, `None` if it has no events.
    #[must_use]
    pub fn render(&self, store: &CalendarStore) -> Option<String> {
        let date = self.day.date();
        AgendaFormatter::new().format_day(date, store.events_on_day(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR: &str = "\
BEGIN:VCALENDAR
BEGIN:VEVENT
DTSTART:20230103T090000
DTEND:20230103T100000
LOCATION:Room 1
SUMMARY:Meeting
RRULE:FREQ=WEEKLY;UNTIL=20230124T090000
END:VEVENT
END:VCALENDAR
";

    fn date(s: &str) -> LooseDate {
        s.parse().unwrap()
    }

    #[test]
    fn renders_range() {
        let store = CalendarStore::load(CALENDAR).unwrap();
        let cmd = CmdRange {
            start: date("2023/1/1"),
            end: date("2023/1/31"),
            file: None,
        };
        let text = cmd.render(&store).unwrap().unwrap();
        assert_eq!(text.matches("Meeting {Room 1}").count(), 3);
        assert!(text.starts_with("January 03, 2023 (Tue)\n"));
        assert!(text.ends_with("January 17, 2023 (Tue)\n----------------------\n 9:00 AM to 10:00 AM: Meeting {Room 1}"));
    }

    #[test]
    fn renders_nothing_for_empty_range() {
        let store = CalendarStore::load(CALENDAR).unwrap();
        let cmd = CmdRange {
            start: date("2023/2/1"),
            end: date("2023/2/28"),
            file: None,
        };
        assert_eq!(cmd.render(&store).unwrap(), None);
    }

    #[test]
    fn rejects_reversed_range() {
        let store = CalendarStore::load(CALENDAR).unwrap();
        let cmd = CmdRange {
            start: date("2023/1/31"),
            end: date("2023/1/1"),
            file: None,
        };
        assert!(cmd.render(&store).is_err());
    }

    #[test]
    fn renders_day() {
        let store = CalendarStore::load(CALENDAR).unwrap();
        let cmd = CmdDay {
            day: date("2023/1/10"),
            file: None,
        };
        assert_eq!(
            cmd.render(&store).unwrap(),
            "January 10, 2023 (Tue)\n----------------------\n 9:00 AM to 10:00 AM: Meeting {Room 1}"
        );

        let cmd = CmdDay {
            day: date("2023/1/24"),
            file: None,
        };
        assert_eq!(cmd.render(&store), None);
    }

    #[test]
    fn run_reads_file_from_argument() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.ics");
        std::fs::write(&path, CALENDAR).unwrap();
        let config = dir.path().join("unreadable.toml");
        std::fs::write(&config, "not = [valid").unwrap();

        let cmd = CmdDay {
            day: date("2023/1/3"),
            file: Some(path.clone()),
        };
        cmd.run(Some(config.clone())).unwrap();

        let cmd = CmdRange {
            start: date("2023/1/1"),
            end: date("2023/1/31"),
            file: Some(path),
        };
        cmd.run(Some(config)).unwrap();
    }

    #[test]
    fn run_fails_without_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();

        let cmd = CmdDay {
            day: date("2023/1/3"),
            file: None,
        };
        assert!(cmd.run(Some(config)).is_err());
    }
}
