// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use icsagenda_ical::Component;
use icsagenda_ical::keyword::{KW_VCALENDAR, KW_VEVENT};

use crate::datetime::DateRange;
use crate::error::{Error, Result};
use crate::event::Event;

/// Events of one calendar, with recurrences expanded, indexed by the date
/// they start on.
///
/// The store is built once and is read-only afterwards. Events of a day are
/// sorted by start time; events with equal start times keep source order.
#[derive(Debug, Clone, Default)]
pub struct CalendarStore {
    days: BTreeMap<NaiveDate, Vec<Event>>,
    len: usize,
}

impl CalendarStore {
    /// Build a store from iCalendar text.
    ///
    /// Accepts `VEVENT` blocks inside a `VCALENDAR` or at the top level.
    ///
    /// ## Errors
    ///
    /// Fails on the first malformed block; no partial store is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
    pub fn load(src: &str) -> Result<Self> {
        let roots = icsagenda_ical::parse(src)?;

        let mut store = Self::default();
        for component in event_components(&roots) {
            let event = Event::from_component(component)?;
            tracing::debug!(
                summary = event.summary(),
                start = %event.start(),
                recurring = event.rule().is_some(),
                "parsed event"
            );
            for occurrence in event.occurrences() {
                store.insert(occurrence);
            }
        }

        for events in store.days.values_mut() {
            events.sort_by_key(Event::start);
        }

        tracing::debug!(
            events = store.len,
            days = store.days.len(),
            "loaded calendar"
        );
        Ok(store)
    }

    /// Read and load a calendar file.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the errors
    /// of [`CalendarStore::load`].
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&src)
    }

    fn insert(&mut self, event: Event) {
        self.days.entry(event.date()).or_default().push(event);
        self.len += 1;
    }

    /// Events starting on `date`, sorted by start time. Empty if there are none.
    #[must_use]
    pub fn events_on_day(&self, date: NaiveDate) -> &[Event] {
        self.days
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Events starting strictly after `start` and strictly before `end`,
    /// sorted by start time.
    #[must_use]
    pub fn events_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        if start >= end {
            return Vec::new();
        }

        self.days
            .range(start.date()..=end.date())
            .flat_map(|(_, events)| events)
            .filter(|event| start < event.start() && event.start() < end)
            .collect()
    }

    /// Events within `range`, see [`CalendarStore::events_in_range`].
    #[must_use]
    pub fn range(&self, range: &DateRange) -> Vec<&Event> {
        self.events_in_range(range.start, range.end)
    }

    /// All events, sorted by start time.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.days.values().flatten()
    }

    /// Dates that have at least one event, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Total number of events, counting every occurrence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no events.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn event_components(roots: &[Component]) -> Vec<&Component> {
    let mut components = Vec::new();
    for root in roots {
        match root.name.as_str() {
            KW_VEVENT => components.push(root),
            KW_VCALENDAR => components.extend(root.children_named(KW_VEVENT)),
            other => tracing::debug!(component = other, "skipping top-level component"),
        }
    }
    components
}
