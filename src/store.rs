//! The entity store owns all crop, food and location records for the process
//! lifetime and provides the lookup surfaces everything else is built on.
//!
//! Records are kept in load order in plain vectors; id lookups go through
//! hash indexes built once at construction. All lookups are pure and
//! side-effect-free. "Not found" is an empty result, never an error, so
//! callers can treat absence the same way as an empty category.

use core::hash::BuildHasherDefault;
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

use crate::error::{FoodloreError, Result};
use crate::model::{Crop, CropCategory, Food, FoodCategory, Location, LocationKind};
use seahash::SeaHasher;

pub type IdHasher = BuildHasherDefault<SeaHasher>;

/// One entry of the location→origin reverse index, listing the ids of the
/// crops and foods whose origin lies at that location.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OriginIndexEntry {
    #[serde(default)]
    pub crops: Vec<String>,
    #[serde(default)]
    pub foods: Vec<String>,
}

pub struct EntityStore {
    crops: Vec<Crop>,
    foods: Vec<Food>,
    locations: Vec<Location>,
    // id -> position indexes, built once
    crop_index: HashMap<String, usize, IdHasher>,
    food_index: HashMap<String, usize, IdHasher>,
    location_index: HashMap<String, usize, IdHasher>,
    origin_index: HashMap<String, OriginIndexEntry, IdHasher>,
}

impl EntityStore {
    /// Assemble a store from already-loaded records. Duplicate ids within a
    /// record kind violate the join-key invariant and are rejected; a parent
    /// reference to a missing location is tolerated but logged, since the
    /// hierarchy then simply ends there.
    pub fn from_records(
        crops: Vec<Crop>,
        foods: Vec<Food>,
        locations: Vec<Location>,
        origin_index: HashMap<String, OriginIndexEntry, IdHasher>,
    ) -> Result<Self> {
        let crop_index = index_by_id(crops.iter().map(|c| c.id.clone()), "crop")?;
        let food_index = index_by_id(foods.iter().map(|f| f.id.clone()), "food")?;
        let location_index = index_by_id(locations.iter().map(|l| l.id.clone()), "location")?;
        for location in &locations {
            if let Some(parent) = &location.parent {
                if !location_index.contains_key(parent) {
                    warn!(id = %location.id, parent = %parent, "location parent has no record");
                }
            }
        }
        Ok(Self {
            crops,
            foods,
            locations,
            crop_index,
            food_index,
            location_index,
            origin_index,
        })
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn crop(&self, id: &str) -> Option<&Crop> {
        self.crop_index.get(id).map(|i| &self.crops[*i])
    }
    pub fn food(&self, id: &str) -> Option<&Food> {
        self.food_index.get(id).map(|i| &self.foods[*i])
    }
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.location_index.get(id).map(|i| &self.locations[*i])
    }

    pub fn crops_in_category(&self, category: CropCategory) -> Vec<&Crop> {
        self.crops.iter().filter(|c| c.category == category).collect()
    }
    pub fn foods_in_category(&self, category: FoodCategory) -> Vec<&Food> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    pub fn continents(&self) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::Continent)
            .collect()
    }

    /// The locations of the immediately narrower kind under the given one:
    /// countries of a continent, regions of a country. Regions have no
    /// children, and an unknown id simply has none either.
    pub fn children(&self, location_id: &str) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| l.parent.as_deref() == Some(location_id))
            .collect()
    }

    /// The crops and foods whose origin lies at the given location, resolved
    /// through the precomputed reverse index. Ids in the index without a
    /// matching record are dropped.
    pub fn origins_at(&self, location_id: &str) -> (Vec<&Crop>, Vec<&Food>) {
        match self.origin_index.get(location_id) {
            Some(entry) => (
                entry.crops.iter().filter_map(|id| self.crop(id)).collect(),
                entry.foods.iter().filter_map(|id| self.food(id)).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        }
    }

    /// The foods that list the given crop among their ingredients.
    pub fn foods_using(&self, crop_id: &str) -> Vec<&Food> {
        self.foods
            .iter()
            .filter(|f| f.ingredients.iter().any(|i| i == crop_id))
            .collect()
    }
}

fn index_by_id(
    ids: impl Iterator<Item = String>,
    kind: &str,
) -> Result<HashMap<String, usize, IdHasher>> {
    let mut index = HashMap::default();
    for (position, id) in ids.enumerate() {
        match index.entry(id) {
            Entry::Vacant(e) => {
                e.insert(position);
            }
            Entry::Occupied(e) => {
                return Err(FoodloreError::Data {
                    message: format!("duplicate {} id: {}", kind, e.key()),
                });
            }
        }
    }
    Ok(index)
}
