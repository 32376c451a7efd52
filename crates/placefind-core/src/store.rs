use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::LocationStore;
use crate::types::{City, Place, PlaceKind};

/// A complete read-only copy of the location records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationSnapshot {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub places: Vec<Place>,
}

impl LocationSnapshot {
    pub fn new(cities: Vec<City>, places: Vec<Place>) -> Self {
        Self { cities, places }
    }

    /// Parses a snapshot. Commune records written without a `commune_name`
    /// get their own name there.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut snapshot: Self = serde_json::from_str(json)?;
        for place in &mut snapshot.places {
            if place.kind == PlaceKind::Commune && place.commune_name.trim().is_empty() {
                place.commune_name = place.name.clone();
            }
        }
        Ok(snapshot)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => String::from_utf8_lossy(&fs::read(path)?).to_string(),
        };
        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            cities = snapshot.cities.len(),
            places = snapshot.places.len(),
            "loaded location snapshot"
        );
        Ok(snapshot)
    }

    pub fn commune_count(&self) -> usize {
        self.places.iter().filter(|p| p.kind == PlaceKind::Commune).count()
    }
}

struct Shared {
    cities: Arc<[City]>,
    places: Arc<[Place]>,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            cities: Arc::from(Vec::new()),
            places: Arc::from(Vec::new()),
        }
    }
}

/// In-process store: holds the latest snapshot handed over by the loader.
///
/// Starts empty and loading. `replace` publishes a snapshot atomically, so a
/// reader sees either the previous snapshot or the new one, never a mix.
pub struct MemoryLocationStore {
    shared: RwLock<Shared>,
    loading: AtomicBool,
}

impl Default for MemoryLocationStore {
    fn default() -> Self {
        Self {
            shared: RwLock::new(Shared::default()),
            loading: AtomicBool::new(true),
        }
    }
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already loaded with `snapshot`.
    pub fn with_snapshot(snapshot: LocationSnapshot) -> Self {
        let store = Self::new();
        store.replace(snapshot);
        store
    }

    pub fn begin_refresh(&self) {
        self.loading.store(true, Ordering::Release);
    }

    pub fn replace(&self, snapshot: LocationSnapshot) {
        let LocationSnapshot { cities, places } = snapshot;
        tracing::info!(cities = cities.len(), places = places.len(), "location snapshot replaced");
        {
            let mut shared = self.shared.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            shared.cities = cities.into();
            shared.places = places.into();
        }
        self.loading.store(false, Ordering::Release);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Shared> {
        self.shared.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LocationStore for MemoryLocationStore {
    fn cities(&self) -> Arc<[City]> {
        Arc::clone(&self.read().cities)
    }

    fn places(&self) -> Arc<[Place]> {
        Arc::clone(&self.read().places)
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}
