use std::collections::HashMap;

use foodlore::model::{
    Crop, CropCategory, Food, FoodCategory, Location, LocationKind, OriginInfo, TimePeriod,
};
use foodlore::store::{EntityStore, OriginIndexEntry};

fn time() -> TimePeriod {
    TimePeriod {
        year: Some(-2000),
        display: "公元前2000年".to_string(),
        display_en: None,
    }
}

fn crop(id: &str, category: CropCategory, origin: &str) -> Crop {
    Crop {
        id: id.to_string(),
        name: id.to_string(),
        name_en: None,
        alias: Vec::new(),
        alias_en: Vec::new(),
        category,
        origin: OriginInfo {
            location: origin.to_string(),
            time: time(),
        },
        spreads: Vec::new(),
        current_regions: Vec::new(),
        description: String::new(),
        description_en: None,
    }
}

fn food(id: &str, category: FoodCategory, ingredients: &[&str]) -> Food {
    Food {
        id: id.to_string(),
        name: id.to_string(),
        name_en: None,
        alias: Vec::new(),
        alias_en: Vec::new(),
        category,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        origin: OriginInfo {
            location: "china".to_string(),
            time: time(),
        },
        spreads: Vec::new(),
        current_regions: Vec::new(),
        description: String::new(),
        description_en: None,
    }
}

fn location(id: &str, kind: LocationKind, parent: Option<&str>) -> Location {
    Location {
        id: id.to_string(),
        name: id.to_string(),
        name_en: None,
        kind,
        parent: parent.map(str::to_string),
    }
}

fn setup() -> EntityStore {
    let crops = vec![
        crop("rice", CropCategory::Grain, "china"),
        crop("wheat", CropCategory::Grain, "fertile-crescent"),
        crop("pepper", CropCategory::Spice, "india"),
    ];
    let foods = vec![
        food("congee", FoodCategory::Staple, &["rice"]),
        food("noodles", FoodCategory::Staple, &["wheat"]),
        food("rice-wine", FoodCategory::Beverage, &["rice"]),
    ];
    let locations = vec![
        location("asia", LocationKind::Continent, None),
        location("europe", LocationKind::Continent, None),
        location("china", LocationKind::Country, Some("asia")),
        location("india", LocationKind::Country, Some("asia")),
        location("sichuan", LocationKind::Region, Some("china")),
    ];
    let mut origin_index: HashMap<String, OriginIndexEntry, _> = HashMap::default();
    origin_index.insert(
        "china".to_string(),
        OriginIndexEntry {
            crops: vec!["rice".to_string(), "long-gone".to_string()],
            foods: vec!["congee".to_string(), "rice-wine".to_string()],
        },
    );
    EntityStore::from_records(crops, foods, locations, origin_index).unwrap()
}

#[test]
fn id_lookups_return_options() {
    let store = setup();
    assert!(store.crop("rice").is_some());
    assert!(store.crop("durian").is_none());
    assert!(store.food("congee").is_some());
    assert!(store.food("rice").is_none(), "kinds have separate id spaces");
    assert!(store.location("sichuan").is_some());
    assert!(store.location("atlantis").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let crops = vec![
        crop("rice", CropCategory::Grain, "china"),
        crop("rice", CropCategory::Grain, "india"),
    ];
    let result = EntityStore::from_records(crops, Vec::new(), Vec::new(), HashMap::default());
    assert!(result.is_err());
}

#[test]
fn category_filters_preserve_load_order() {
    let store = setup();
    let grains = store.crops_in_category(CropCategory::Grain);
    let ids: Vec<&str> = grains.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["rice", "wheat"]);
    assert!(store.crops_in_category(CropCategory::Fruit).is_empty());
    let staples = store.foods_in_category(FoodCategory::Staple);
    assert_eq!(staples.len(), 2);
}

#[test]
fn hierarchy_walks_one_level_at_a_time() {
    let store = setup();
    let continents: Vec<&str> = store.continents().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(continents, vec!["asia", "europe"]);
    let asian: Vec<&str> = store.children("asia").iter().map(|l| l.id.as_str()).collect();
    assert_eq!(asian, vec!["china", "india"]);
    let chinese: Vec<&str> = store.children("china").iter().map(|l| l.id.as_str()).collect();
    assert_eq!(chinese, vec!["sichuan"]);
    assert!(store.children("sichuan").is_empty());
    assert!(store.children("atlantis").is_empty());
}

#[test]
fn origins_at_resolves_ids_and_drops_dangling_ones() {
    let store = setup();
    let (crops, foods) = store.origins_at("china");
    let crop_ids: Vec<&str> = crops.iter().map(|c| c.id.as_str()).collect();
    // "long-gone" has no record and silently disappears
    assert_eq!(crop_ids, vec!["rice"]);
    let food_ids: Vec<&str> = foods.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(food_ids, vec!["congee", "rice-wine"]);

    let (crops, foods) = store.origins_at("europe");
    assert!(crops.is_empty());
    assert!(foods.is_empty());
}

#[test]
fn foods_using_scans_ingredient_lists() {
    let store = setup();
    let users: Vec<&str> = store.foods_using("rice").iter().map(|f| f.id.as_str()).collect();
    assert_eq!(users, vec!["congee", "rice-wine"]);
    assert!(store.foods_using("pepper").is_empty());
    assert!(store.foods_using("durian").is_empty());
}
