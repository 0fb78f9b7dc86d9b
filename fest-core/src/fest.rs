//! Application session: configuration, catalog and stores.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use crate::catalog::{self, Catalog};
use crate::config::FestConfig;
use crate::error::{FestError, FestResult};
use crate::event::EventRecord;
use crate::preload::{self, Preloader};
use crate::storage::{FileStore, KeyValueStore};
use crate::store::{ProfileStore, RegistrationStore, VisitedTracker};

/// Everything a command needs, loaded once at startup.
///
/// The stores are owned independently and share one storage handle.
pub struct Fest {
    pub config: FestConfig,
    pub catalog: Catalog,
    pub registrations: RegistrationStore,
    pub visited: VisitedTracker,
    pub profile: ProfileStore,
}

impl Fest {
    /// Open the file-backed stores under the configured data directory.
    pub fn load(config: FestConfig) -> FestResult<Self> {
        let store = FileStore::new(config.data_path()?);
        log::debug!("Using data directory {}", store.dir().display());
        Self::open(config, Arc::new(store))
    }

    pub fn open(config: FestConfig, storage: Arc<dyn KeyValueStore>) -> FestResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };

        Ok(Fest {
            registrations: RegistrationStore::load(storage.clone()),
            visited: VisitedTracker::load(storage.clone()),
            profile: ProfileStore::load(storage),
            catalog,
            config,
        })
    }

    pub fn event(&self, id: &str) -> FestResult<&EventRecord> {
        self.catalog
            .get_by_id(id)
            .ok_or_else(|| FestError::EventNotFound(id.to_string()))
    }

    pub fn festival_start(&self) -> NaiveDateTime {
        self.config.festival_start
    }

    pub fn festival_duration(&self) -> FestResult<Duration> {
        self.config.festival_duration()
    }

    /// Countdown target for one event, or the festival itself.
    pub fn countdown_target(&self, event: Option<&EventRecord>) -> NaiveDateTime {
        match event {
            Some(event) => catalog::countdown_target(self.festival_start(), event),
            None => self.festival_start(),
        }
    }

    /// Preloader over the configured gallery directory.
    pub fn gallery_preloader(&self) -> FestResult<Preloader> {
        let images = self
            .config
            .gallery_path()
            .map(|dir| preload::gallery_images(&dir))
            .unwrap_or_default();

        Ok(Preloader::new(
            images,
            self.config.preload_batch_size,
            self.config.preload_delay()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn open() -> Fest {
        Fest::open(FestConfig::default(), Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn stores_share_one_storage_handle() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut fest = Fest::open(FestConfig::default(), storage.clone()).unwrap();

        let item = fest.event("masterchef").unwrap().line_item();
        fest.registrations.add_to_cart(item).unwrap();
        fest.visited.mark_visited("masterchef").unwrap();

        let reopened = Fest::open(FestConfig::default(), storage).unwrap();
        assert!(reopened.registrations.is_in_cart("masterchef"));
        assert!(reopened.visited.is_visited("masterchef"));
    }

    #[test]
    fn unknown_event_is_not_found() {
        let fest = open();
        assert!(matches!(
            fest.event("no-such-event"),
            Err(FestError::EventNotFound(_))
        ));
    }

    #[test]
    fn event_countdown_targets_its_own_day() {
        let fest = open();
        let robo_wars = fest.event("robo-wars").unwrap();
        assert_eq!(
            fest.countdown_target(Some(robo_wars)),
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
        assert_eq!(fest.countdown_target(None), fest.festival_start());
    }

    #[test]
    fn no_gallery_dir_means_nothing_to_preload() {
        let fest = open();
        assert!(fest.gallery_preloader().unwrap().assets().is_empty());
    }
}
