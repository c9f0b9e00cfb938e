use std::collections::HashMap;

use foodlore::lang::{
    FileLanguageStore, Language, Localizer, MemoryLanguageStore,
};
use foodlore::model::{Location, LocationKind, SpreadEvent, TimePeriod};
use foodlore::store::EntityStore;

fn localizer(language: Language) -> Localizer {
    Localizer::new(Box::new(MemoryLanguageStore::new()), language)
}

#[test]
fn alternate_text_needs_both_the_selector_and_the_text() {
    let l = localizer(Language::Zh);
    assert_eq!(l.resolve("水稻", Some("Rice")), "水稻");
    l.set_language(Language::En);
    assert_eq!(l.resolve("水稻", Some("Rice")), "Rice");
    assert_eq!(l.resolve("水稻", None), "水稻");
    // an empty alternate counts as absent
    assert_eq!(l.resolve("水稻", Some("")), "水稻");
}

#[test]
fn list_fallback_is_all_or_nothing() {
    let l = localizer(Language::En);
    let primary = vec!["稻米".to_string(), "大米".to_string()];
    let alternate = vec!["Paddy".to_string()];
    assert_eq!(l.resolve_list(&primary, &alternate), &alternate[..]);
    assert_eq!(l.resolve_list(&primary, &[]), &primary[..]);
    l.set_language(Language::Zh);
    assert_eq!(l.resolve_list(&primary, &alternate), &primary[..]);
}

#[test]
fn time_and_via_resolve_like_any_pair() {
    let l = localizer(Language::En);
    let time = TimePeriod {
        year: None,
        display: "唐代".to_string(),
        display_en: Some("Tang dynasty".to_string()),
    };
    assert_eq!(l.time_display(&time), "Tang dynasty");
    let spread = SpreadEvent {
        from: "china".to_string(),
        to: "japan".to_string(),
        time,
        via: Some("海路".to_string()),
        via_en: None,
    };
    assert_eq!(l.via(&spread), Some("海路"));
}

#[test]
fn location_names_fall_back_record_then_table_then_id() {
    let locations = vec![Location {
        id: "china".to_string(),
        name: "中国".to_string(),
        name_en: Some("China".to_string()),
        kind: LocationKind::Country,
        parent: None,
    }];
    let store =
        EntityStore::from_records(Vec::new(), Vec::new(), locations, HashMap::default()).unwrap();
    let l = localizer(Language::Zh);
    assert_eq!(l.location_name(&store, "china"), "中国");
    // no record, but a known historical region
    assert_eq!(l.location_name(&store, "korea"), "朝鲜半岛");
    assert_eq!(l.location_name(&store, "terra-incognita"), "terra-incognita");
    l.set_language(Language::En);
    assert_eq!(l.location_name(&store, "china"), "China");
    assert_eq!(l.location_name(&store, "korea"), "Korean Peninsula");
}

#[test]
fn stored_selection_beats_the_default() {
    let l = Localizer::new(Box::new(MemoryLanguageStore::with_code("en")), Language::Zh);
    assert_eq!(l.language(), Language::En);
    // garbage in the store falls back to the default
    let l = Localizer::new(Box::new(MemoryLanguageStore::with_code("xx")), Language::Zh);
    assert_eq!(l.language(), Language::Zh);
}

#[test]
fn toggle_flips_between_the_two_languages() {
    let l = localizer(Language::Zh);
    l.toggle();
    assert_eq!(l.language(), Language::En);
    l.toggle();
    assert_eq!(l.language(), Language::Zh);
}

#[test]
fn file_store_round_trips_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("language");

    // nothing persisted yet: the default wins
    let l = Localizer::new(Box::new(FileLanguageStore::new(&path)), Language::Zh);
    assert_eq!(l.language(), Language::Zh);
    l.set_language(Language::En);

    // a fresh instance over the same file restores the selection
    let l = Localizer::new(Box::new(FileLanguageStore::new(&path)), Language::Zh);
    assert_eq!(l.language(), Language::En);
}
