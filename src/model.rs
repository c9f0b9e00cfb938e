//! Record types for the knowledge base.
//!
//! These mirror the JSON documents supplied by the data directory one to one.
//! Every text field comes in a primary/alternate pair where the alternate
//! (`*_en`) is optional; resolution of such pairs happens in the [`lang`](crate::lang)
//! module, never here. Records are immutable once loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An exact or approximate point in historical time.
///
/// `year` is authoritative when present (negative = BCE). When it is absent
/// the `display` text is the only source of chronology and must be non-empty,
/// so that the fuzzy year parser has something to work with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    pub year: Option<i32>,
    pub display: String,
    pub display_en: Option<String>,
}

/// Where a location sits in the continent > country > region hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Continent,
    Country,
    Region,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocationKind::Continent => write!(f, "continent"),
            LocationKind::Country => write!(f, "country"),
            LocationKind::Region => write!(f, "region"),
        }
    }
}

/// A geographic location. `parent` points at the location of the immediately
/// broader kind (continents have none); the parent graph is a forest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub parent: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Grain,
    Vegetable,
    Fruit,
    Legume,
    Spice,
    Beverage,
    Oil,
    Sugar,
    Nut,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Staple,
    Dish,
    Beverage,
    Dessert,
    Snack,
    Condiment,
    Preserved,
}

/// Where and when an entity is first attested.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OriginInfo {
    pub location: String,
    pub time: TimePeriod,
}

/// A recorded diffusion of an entity from one location to another.
///
/// `from` and `to` are location ids but are tolerated as free text: ids with
/// no matching record fall back to a static name table and finally to the raw
/// id at display time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadEvent {
    pub from: String,
    pub to: String,
    pub time: TimePeriod,
    pub via: Option<String>,
    pub via_en: Option<String>,
}

/// A cultivated crop. `id` is unique among crops and is the join key used by
/// search results, timeline events and food ingredient lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub alias_en: Vec<String>,
    pub category: CropCategory,
    pub origin: OriginInfo,
    #[serde(default)]
    pub spreads: Vec<SpreadEvent>,
    #[serde(default)]
    pub current_regions: Vec<String>,
    pub description: String,
    pub description_en: Option<String>,
}

/// A prepared food. Same shape as [`Crop`] plus the crops it is made from.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub alias_en: Vec<String>,
    pub category: FoodCategory,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub origin: OriginInfo,
    #[serde(default)]
    pub spreads: Vec<SpreadEvent>,
    #[serde(default)]
    pub current_regions: Vec<String>,
    pub description: String,
    pub description_en: Option<String>,
}
