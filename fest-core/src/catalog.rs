//! The festival's read-only event catalog.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{FestError, FestResult};
use crate::event::{Category, EventRecord};

static BUILTIN_CATALOG: &str = include_str!("catalog.toml");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    events: Vec<EventRecord>,
}

/// Immutable list of festival events, in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> FestResult<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file with `[[events]]` tables.
    pub fn load(path: &Path) -> FestResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FestError::Catalog(format!("Could not read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> FestResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| FestError::Catalog(e.to_string()))?;
        Self::new(file.events)
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn new(events: Vec<EventRecord>) -> FestResult<Self> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(FestError::Catalog(format!(
                    "Duplicate event id '{}'",
                    event.id
                )));
            }
        }
        Ok(Catalog { events })
    }

    pub fn get_all(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get_by_id(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn get_by_category(&self, category: Category) -> Vec<&EventRecord> {
        self.events.iter().filter(|e| e.category == category).collect()
    }

    pub fn filter(&self, filter: EventFilter) -> Vec<&EventRecord> {
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn flagship(&self) -> Vec<&EventRecord> {
        self.events.iter().filter(|e| e.is_flagship).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Countdown target for a single event: its first day at the festival's
/// opening time of day. Events without `starts_on` count down to the
/// festival start itself.
pub fn countdown_target(festival_start: NaiveDateTime, event: &EventRecord) -> NaiveDateTime {
    match event.starts_on {
        Some(day) => day.and_time(festival_start.time()),
        None => festival_start,
    }
}

/// Listing filters offered on the events page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events hosted for other colleges (first two days)
    External,
    /// The college's own events (last two days)
    Internal,
    /// Events that don't need registration
    Free,
    Category(Category),
}

impl EventFilter {
    pub fn matches(&self, event: &EventRecord) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::External => event.is_external,
            EventFilter::Internal => !event.is_external,
            EventFilter::Free => !event.requires_registration,
            EventFilter::Category(c) => event.category == *c,
        }
    }
}

impl FromStr for EventFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(EventFilter::All),
            "external" => Ok(EventFilter::External),
            "internal" => Ok(EventFilter::Internal),
            "free" => Ok(EventFilter::Free),
            other => other
                .parse::<Category>()
                .map(EventFilter::Category)
                .map_err(|_| {
                    format!(
                        "Unknown filter '{}'. Expected all, external, internal, free or a category",
                        other
                    )
                }),
        }
    }
}
