//! Startup loading of the knowledge base from a data directory.
//!
//! The layout mirrors the published dataset: `crops/*.json`, `foods/*.json`
//! and `locations/*.json` each hold a wrapper document with one record array,
//! and `relations/origin-by-location.json` carries the precomputed reverse
//! index. Loading happens once; everything downstream works off the in-memory
//! [`EntityStore`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{FoodloreError, Result};
use crate::model::{Crop, Food, Location};
use crate::store::{EntityStore, IdHasher, OriginIndexEntry};

#[derive(Deserialize)]
struct CropDocument {
    crops: Vec<Crop>,
}
#[derive(Deserialize)]
struct FoodDocument {
    foods: Vec<Food>,
}
#[derive(Deserialize)]
struct LocationDocument {
    locations: Vec<Location>,
}

/// Read every document under the data directory and assemble the store.
pub fn load_store(data_dir: &Path) -> Result<EntityStore> {
    let crops: Vec<Crop> = read_documents(&data_dir.join("crops"), |d: CropDocument| d.crops)?;
    let foods: Vec<Food> = read_documents(&data_dir.join("foods"), |d: FoodDocument| d.foods)?;
    let locations: Vec<Location> =
        read_documents(&data_dir.join("locations"), |d: LocationDocument| d.locations)?;
    let origin_index = read_origin_index(&data_dir.join("relations").join("origin-by-location.json"))?;
    info!(
        crops = crops.len(),
        foods = foods.len(),
        locations = locations.len(),
        origins = origin_index.len(),
        "knowledge base loaded"
    );
    EntityStore::from_records(crops, foods, locations, origin_index)
}

/// Read all `*.json` wrapper documents in one directory, in file name order
/// so that the store's record order does not depend on the filesystem.
fn read_documents<D: DeserializeOwned, R>(
    dir: &Path,
    unwrap: impl Fn(D) -> Vec<R>,
) -> Result<Vec<R>> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(|e| FoodloreError::Load(format!("{}: {}", dir.display(), e)))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    let mut records = Vec::new();
    for path in paths {
        let text = fs::read_to_string(&path)?;
        let document: D = serde_json::from_str(&text)
            .map_err(|e| FoodloreError::Load(format!("{}: {}", path.display(), e)))?;
        let mut batch = unwrap(document);
        info!(file = %path.display(), records = batch.len(), "loaded");
        records.append(&mut batch);
    }
    Ok(records)
}

/// The reverse index document maps location ids to crop/food id lists. Keys
/// starting with `_` are document metadata, not locations.
fn read_origin_index(path: &Path) -> Result<HashMap<String, OriginIndexEntry, IdHasher>> {
    let text = fs::read_to_string(path)
        .map_err(|e| FoodloreError::Load(format!("{}: {}", path.display(), e)))?;
    let raw: HashMap<String, serde_json::Value> = serde_json::from_str(&text)
        .map_err(|e| FoodloreError::Load(format!("{}: {}", path.display(), e)))?;
    let mut index = HashMap::default();
    for (key, value) in raw {
        if key.starts_with('_') {
            continue;
        }
        let entry: OriginIndexEntry = serde_json::from_value(value)
            .map_err(|e| FoodloreError::Load(format!("{}: {}: {}", path.display(), key, e)))?;
        index.insert(key, entry);
    }
    Ok(index)
}
