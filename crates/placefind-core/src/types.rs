//! Domain types shared by the store, the scorer and the ranker.

use serde::{Deserialize, Serialize};

pub type LocationId = String;

/// Region labels the data-access layer writes when a city has no known region.
const UNSPECIFIED_REGIONS: [&str; 3] = ["non spécifié", "non specifie", "unspecified"];

/// `false` when `region` is empty or one of the "unspecified" sentinels,
/// compared trimmed and case-insensitively.
fn is_specified_region(region: &str) -> bool {
    let region = region.trim().to_lowercase();
    !region.is_empty() && !UNSPECIFIED_REGIONS.contains(&region.as_str())
}

/// A top-level place.
///
/// - `id`: stable identifier, unique across cities
/// - `name`: display name, never empty
/// - `region`: free-text administrative region, possibly the "unspecified" sentinel
/// - `latitude`/`longitude`: passed through to results, never used for ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl City {
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            latitude: None,
            longitude: None,
        }
    }
}

/// Second-level place tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Commune,
    Neighborhood,
}

/// A commune or neighborhood record.
///
/// Commune records may repeat in a snapshot (once per neighborhood citing
/// them); that is expected input and is collapsed during ranking.
/// `commune_name` is the owning commune for a neighborhood and the record's
/// own name for a commune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: LocationId,
    pub name: String,
    pub kind: PlaceKind,
    #[serde(default)]
    pub parent_city_id: Option<LocationId>,
    #[serde(default)]
    pub commune_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Place {
    pub fn commune(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            commune_name: name.clone(),
            name,
            kind: PlaceKind::Commune,
            parent_city_id: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn neighborhood(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        commune_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PlaceKind::Neighborhood,
            parent_city_id: None,
            commune_name: commune_name.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_parent_city(mut self, city_id: impl Into<LocationId>) -> Self {
        self.parent_city_id = Some(city_id.into());
        self
    }
}

/// Tag carried by every search result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    City,
    Commune,
    Neighborhood,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::City => "city",
            ResultKind::Commune => "commune",
            ResultKind::Neighborhood => "neighborhood",
        }
    }
}

impl From<PlaceKind> for ResultKind {
    fn from(kind: PlaceKind) -> Self {
        match kind {
            PlaceKind::Commune => ResultKind::Commune,
            PlaceKind::Neighborhood => ResultKind::Neighborhood,
        }
    }
}

/// The engine's output unit.
///
/// `region` is only set for cities, `commune_name` only for communes and
/// neighborhoods. For a deduplicated commune, `id` is whichever source record
/// won deduplication and must not be relied on to name a specific record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: LocationId,
    pub name: String,
    pub kind: ResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commune_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_city_id: Option<LocationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl SearchResult {
    pub fn from_city(city: &City) -> Self {
        Self {
            id: city.id.clone(),
            name: city.name.clone(),
            kind: ResultKind::City,
            region: Some(city.region.clone()),
            commune_name: None,
            parent_city_id: None,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }

    pub fn from_place(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            kind: place.kind.into(),
            region: None,
            commune_name: Some(place.commune_name.clone()),
            parent_city_id: place.parent_city_id.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }

    /// The commune a place belongs to, surfaced as a result of its own.
    ///
    /// Coordinates are dropped: they describe the source record, not the commune.
    pub fn commune_of(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.commune_name.clone(),
            kind: ResultKind::Commune,
            region: None,
            commune_name: Some(place.commune_name.clone()),
            parent_city_id: place.parent_city_id.clone(),
            latitude: None,
            longitude: None,
        }
    }

    /// Region for cities, commune for places. A city whose region is the
    /// "unspecified" sentinel has no label.
    pub fn secondary_label(&self) -> Option<&str> {
        match self.kind {
            ResultKind::City => self.region.as_deref().filter(|r| is_specified_region(r)),
            ResultKind::Commune | ResultKind::Neighborhood => self.commune_name.as_deref(),
        }
    }
}

/// Type tie-break order for results with equal scores.
///
/// `CityFirst` is the general search order; `CommuneFirst` is what the
/// popular listing and the commune-oriented pickers use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypePriority {
    #[default]
    CityFirst,
    CommuneFirst,
}

impl TypePriority {
    /// Lower sorts first.
    pub fn rank(self, kind: ResultKind) -> u8 {
        match (self, kind) {
            (TypePriority::CityFirst, ResultKind::City) => 0,
            (TypePriority::CityFirst, ResultKind::Commune) => 1,
            (TypePriority::CityFirst, ResultKind::Neighborhood) => 2,
            (TypePriority::CommuneFirst, ResultKind::Commune) => 0,
            (TypePriority::CommuneFirst, ResultKind::Neighborhood) => 1,
            (TypePriority::CommuneFirst, ResultKind::City) => 2,
        }
    }
}
