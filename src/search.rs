//! Search across the knowledge base.
//!
//! A case-insensitive substring scan over ids, primary names and primary
//! alias lists, covering crops, then foods, then locations, in that fixed
//! order. Alternate-language text takes no part in matching. Each matching
//! record yields exactly one hit no matter how many of its fields matched.
//! There is no ranking; containment is the whole contract.

use serde::Serialize;

use crate::lang::Localizer;
use crate::store::EntityStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Crop,
    Food,
    Location,
}

/// One search result: a projection of the matching record, never the record
/// itself. The subtitle is the localized category or location-kind name.
#[derive(Clone, Debug, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub kind: HitKind,
    pub subtitle: String,
}

/// Scan the store for the keyword. An empty keyword matches nothing rather
/// than everything.
pub fn search(store: &EntityStore, localizer: &Localizer, keyword: &str) -> Vec<SearchHit> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for crop in store.crops() {
        if matches(&keyword, &crop.id, &crop.name, &crop.alias) {
            hits.push(SearchHit {
                id: crop.id.clone(),
                name: localizer.resolve(&crop.name, crop.name_en.as_deref()).to_string(),
                kind: HitKind::Crop,
                subtitle: localizer.crop_category_name(crop.category).to_string(),
            });
        }
    }
    for food in store.foods() {
        if matches(&keyword, &food.id, &food.name, &food.alias) {
            hits.push(SearchHit {
                id: food.id.clone(),
                name: localizer.resolve(&food.name, food.name_en.as_deref()).to_string(),
                kind: HitKind::Food,
                subtitle: localizer.food_category_name(food.category).to_string(),
            });
        }
    }
    for location in store.locations() {
        if matches(&keyword, &location.id, &location.name, &[]) {
            hits.push(SearchHit {
                id: location.id.clone(),
                name: localizer
                    .resolve(&location.name, location.name_en.as_deref())
                    .to_string(),
                kind: HitKind::Location,
                subtitle: localizer.location_kind_name(location.kind).to_string(),
            });
        }
    }
    hits
}

fn matches(keyword: &str, id: &str, name: &str, aliases: &[String]) -> bool {
    id.to_lowercase().contains(keyword)
        || name.to_lowercase().contains(keyword)
        || aliases.iter().any(|alias| alias.to_lowercase().contains(keyword))
}
