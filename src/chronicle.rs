//! The timeline engine.
//!
//! A [`Chronicle`] consumes the entity store and derives one origin event per
//! entity plus one spread event per recorded spread, resolving each event's
//! year from the exact value when present or from the display text through
//! [`parse_year`]. The resulting sequence is sorted once, memoized, and only
//! ever discarded wholesale by [`Chronicle::rebuild`]. Query operations
//! (era buckets, filtering, grouping, statistics, year formatting) all work
//! over that one sequence.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::lang::{Language, Localizer};
use crate::model::{OriginInfo, SpreadEvent};
use crate::store::EntityStore;

// ------------- Fuzzy year parsing -------------

lazy_static! {
    static ref BCE_YEAR: Regex = Regex::new(r"公元前(\d+)年").unwrap();
    static ref PLAIN_YEAR: Regex = Regex::new(r"^(\d{3,4})年").unwrap();
    static ref CENTURY: Regex = Regex::new(r"(\d+)世纪").unwrap();
    static ref DECADE: Regex = Regex::new(r"(\d{4})年代").unwrap();
}

/// Named historical periods mapped to one representative year each, matched
/// by substring containment in declaration order. These are rough placements
/// for timeline display, not historical judgments; keep them as data.
static PERIOD_YEARS: &[(&str, i32)] = &[
    ("唐代", 700),
    ("宋代", 1050),
    ("元代", 1300),
    ("明代", 1500),
    ("清代", 1750),
    ("中世纪", 1200),
    ("古代", -500),
];

/// Infer a numeric year from a display text such as `公元前3000年`, `16世纪`
/// or `1920年代`. The rules are tried in order and the first match wins;
/// century and decade patterns land on the middle of their interval. Returns
/// `None` when nothing matches, which callers treat as "skip this event".
///
/// ```
/// use foodlore::chronicle::parse_year;
/// assert_eq!(parse_year("公元前3000年"), Some(-3000));
/// assert_eq!(parse_year("16世纪"), Some(1550));
/// assert_eq!(parse_year("1920年代"), Some(1925));
/// assert_eq!(parse_year("时间不详"), None);
/// ```
pub fn parse_year(display: &str) -> Option<i32> {
    if display.is_empty() {
        return None;
    }
    if let Some(captures) = BCE_YEAR.captures(display) {
        return captures[1].parse::<i32>().ok().map(|year| -year);
    }
    if let Some(captures) = PLAIN_YEAR.captures(display) {
        // 年 followed by 代 is a decade, not a year; leave it to the decade rule
        let end = captures.get(0).unwrap().end();
        if !display[end..].starts_with('代') {
            return captures[1].parse::<i32>().ok();
        }
    }
    if let Some(captures) = CENTURY.captures(display) {
        // mid-century: 16世纪 -> 1550
        let century = captures[1].parse::<i32>().ok()?;
        return Some((century - 1) * 100 + 50);
    }
    if let Some(captures) = DECADE.captures(display) {
        // mid-decade: 1920年代 -> 1925
        return captures[1].parse::<i32>().ok().map(|decade| decade + 5);
    }
    for (keyword, year) in PERIOD_YEARS {
        if display.contains(keyword) {
            return Some(*year);
        }
    }
    None
}

// ------------- Eras -------------

/// Fixed cutoff beyond which an era end year renders as "present".
pub const PRESENT_CUTOFF: i32 = 2000;

/// A named historical interval used to bucket timeline events. Membership is
/// half-open, `start_year <= year < end_year`; the last era is conceptually
/// open-ended and its end year renders as "present".
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Era {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
    pub start_year: i32,
    pub end_year: i32,
    pub description: &'static str,
    pub description_en: &'static str,
}

impl Era {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year < self.end_year
    }
}

pub static ERAS: &[Era] = &[
    Era {
        id: "prehistoric",
        name: "史前时代",
        name_en: "Prehistoric Age",
        icon: "🌾",
        start_year: -10000,
        end_year: -5000,
        description: "农业革命的开端，人类开始驯化作物",
        description_en: "The dawn of agriculture, when crops were first domesticated",
    },
    Era {
        id: "ancient",
        name: "古代文明",
        name_en: "Ancient Civilizations",
        icon: "🏛️",
        start_year: -5000,
        end_year: -1000,
        description: "四大文明古国时期，农业技术传播",
        description_en: "The great river-valley civilizations spread farming techniques",
    },
    Era {
        id: "classical",
        name: "古典时期",
        name_en: "Classical Period",
        icon: "⚔️",
        start_year: -1000,
        end_year: 500,
        description: "希腊罗马时代，丝绸之路开通",
        description_en: "Greece and Rome, and the opening of the Silk Road",
    },
    Era {
        id: "medieval",
        name: "中世纪",
        name_en: "Middle Ages",
        icon: "🏰",
        start_year: 500,
        end_year: 1500,
        description: "阿拉伯商人推动东西方交流",
        description_en: "Arab traders drive exchange between East and West",
    },
    Era {
        id: "exploration",
        name: "大航海时代",
        name_en: "Age of Exploration",
        icon: "⛵",
        start_year: 1500,
        end_year: 1800,
        description: "哥伦布大交换，新旧大陆作物互通",
        description_en: "The Columbian Exchange links the Old and New Worlds",
    },
    Era {
        id: "modern",
        name: "近现代",
        name_en: "Modern Era",
        icon: "🏭",
        start_year: 1800,
        end_year: 2100,
        description: "工业革命后的全球化时代",
        description_en: "Globalization after the Industrial Revolution",
    },
];

// ------------- Timeline events -------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Crop,
    Food,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityKind::Crop => write!(f, "crop"),
            EntityKind::Food => write!(f, "food"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Origin,
    Spread,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventKind::Origin => write!(f, "origin"),
            EventKind::Spread => write!(f, "spread"),
        }
    }
}

/// One derived historical event. Built once per chronicle build and never
/// mutated afterwards; display text is kept in primary/alternate pairs and
/// resolved by the presentation side at read time, while location references
/// stay ids so a language switch never requires a rebuild.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// `event-N`, sequence-stable within one build, no meaning beyond that.
    pub id: String,
    pub entity_id: String,
    pub entity_kind: EntityKind,
    pub event_kind: EventKind,
    pub year: i32,
    pub display_time: String,
    pub display_time_en: Option<String>,
    pub name: String,
    pub name_en: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    // origin events
    pub location_id: Option<String>,
    // spread events
    pub from_id: Option<String>,
    pub to_id: Option<String>,
    pub via: Option<String>,
    pub via_en: Option<String>,
}

/// AND-combined timeline predicates. `All` disables the respective constraint
/// and an empty keyword disables the text match.
#[derive(Clone, Debug, Default)]
pub struct TimelineFilter {
    pub entity_kind: Option<EntityKind>,
    pub event_kind: Option<EventKind>,
    pub keyword: String,
}

/// Event counts; the four sub-counts partition the total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub crop_origin: usize,
    pub crop_spread: usize,
    pub food_origin: usize,
    pub food_spread: usize,
}

// ------------- The engine -------------

#[derive(Debug, PartialEq, Eq)]
enum BuildState {
    Uninitialized,
    Built,
}

pub struct Chronicle<'a> {
    store: &'a EntityStore,
    state: BuildState,
    events: Vec<TimelineEvent>,
}

impl<'a> Chronicle<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self {
            store,
            state: BuildState::Uninitialized,
            events: Vec::new(),
        }
    }

    /// Build the event sequence from the store. Idempotent: once built, calls
    /// are no-ops until [`rebuild`](Self::rebuild).
    pub fn build(&mut self) {
        if self.state == BuildState::Built {
            return;
        }
        let mut skipped = 0usize;
        for crop in self.store.crops() {
            self.push_entity_events(
                EntityKind::Crop,
                &crop.id,
                &crop.name,
                crop.name_en.as_deref(),
                &crop.description,
                crop.description_en.as_deref(),
                &crop.origin,
                &crop.spreads,
                &mut skipped,
            );
        }
        for food in self.store.foods() {
            self.push_entity_events(
                EntityKind::Food,
                &food.id,
                &food.name,
                food.name_en.as_deref(),
                &food.description,
                food.description_en.as_deref(),
                &food.origin,
                &food.spreads,
                &mut skipped,
            );
        }
        // stable sort: equal years keep creation order
        self.events.sort_by_key(|event| event.year);
        self.state = BuildState::Built;
        info!(events = self.events.len(), skipped, "timeline built");
    }

    /// Discard the sequence and build again from scratch. Generated ids are
    /// not preserved across rebuilds.
    pub fn rebuild(&mut self) {
        self.events.clear();
        self.state = BuildState::Uninitialized;
        self.build();
    }

    /// The full chronologically sorted sequence, building it on first use.
    pub fn events(&mut self) -> &[TimelineEvent] {
        self.build();
        &self.events
    }

    pub fn eras(&self) -> &'static [Era] {
        ERAS
    }

    pub fn era(&self, era_id: &str) -> Option<&'static Era> {
        ERAS.iter().find(|era| era.id == era_id)
    }

    /// Events within the era's half-open year interval. Unknown era ids yield
    /// an empty list, not an error.
    pub fn events_in_era(&mut self, era_id: &str) -> Vec<TimelineEvent> {
        let Some(era) = self.era(era_id) else {
            return Vec::new();
        };
        self.build();
        self.events
            .iter()
            .filter(|event| era.contains(event.year))
            .cloned()
            .collect()
    }

    pub fn event_count_in_era(&mut self, era_id: &str) -> usize {
        let Some(era) = self.era(era_id) else {
            return 0;
        };
        self.build();
        self.events
            .iter()
            .filter(|event| era.contains(event.year))
            .count()
    }

    /// Apply the filter to a slice of events. The keyword matches
    /// case-insensitively against the resolved name, the origin/from/to
    /// location names and the spread route; a hit on any field keeps the
    /// event.
    pub fn filter(
        &self,
        events: &[TimelineEvent],
        filter: &TimelineFilter,
        localizer: &Localizer,
    ) -> Vec<TimelineEvent> {
        let keyword = filter.keyword.trim().to_lowercase();
        events
            .iter()
            .filter(|event| {
                if let Some(kind) = filter.entity_kind {
                    if event.entity_kind != kind {
                        return false;
                    }
                }
                if let Some(kind) = filter.event_kind {
                    if event.event_kind != kind {
                        return false;
                    }
                }
                if keyword.is_empty() {
                    return true;
                }
                self.matches_keyword(event, &keyword, localizer)
            })
            .cloned()
            .collect()
    }

    fn matches_keyword(&self, event: &TimelineEvent, keyword: &str, localizer: &Localizer) -> bool {
        let name = localizer.resolve(&event.name, event.name_en.as_deref());
        if name.to_lowercase().contains(keyword) {
            return true;
        }
        for id in [&event.location_id, &event.from_id, &event.to_id]
            .into_iter()
            .flatten()
        {
            if localizer
                .location_name(self.store, id)
                .to_lowercase()
                .contains(keyword)
            {
                return true;
            }
        }
        if let Some(via) = &event.via {
            if localizer
                .resolve(via, event.via_en.as_deref())
                .to_lowercase()
                .contains(keyword)
            {
                return true;
            }
        }
        false
    }

    /// Group events by year. Within a year the relative order of the input
    /// slice is preserved, not re-sorted.
    pub fn group_by_year(events: &[TimelineEvent]) -> BTreeMap<i32, Vec<TimelineEvent>> {
        let mut grouped: BTreeMap<i32, Vec<TimelineEvent>> = BTreeMap::new();
        for event in events {
            grouped.entry(event.year).or_default().push(event.clone());
        }
        grouped
    }

    pub fn stats(events: &[TimelineEvent]) -> EventStats {
        let mut stats = EventStats {
            total: events.len(),
            ..EventStats::default()
        };
        for event in events {
            match (event.entity_kind, event.event_kind) {
                (EntityKind::Crop, EventKind::Origin) => stats.crop_origin += 1,
                (EntityKind::Crop, EventKind::Spread) => stats.crop_spread += 1,
                (EntityKind::Food, EventKind::Origin) => stats.food_origin += 1,
                (EntityKind::Food, EventKind::Spread) => stats.food_spread += 1,
            }
        }
        stats
    }

    #[allow(clippy::too_many_arguments)]
    fn push_entity_events(
        &mut self,
        entity_kind: EntityKind,
        entity_id: &str,
        name: &str,
        name_en: Option<&str>,
        description: &str,
        description_en: Option<&str>,
        origin: &OriginInfo,
        spreads: &[SpreadEvent],
        skipped: &mut usize,
    ) {
        match resolve_year(&origin.time.year, &origin.time.display) {
            Some(year) => {
                let id = format!("event-{}", self.events.len());
                self.events.push(TimelineEvent {
                    id,
                    entity_id: entity_id.to_string(),
                    entity_kind,
                    event_kind: EventKind::Origin,
                    year,
                    display_time: origin.time.display.clone(),
                    display_time_en: origin.time.display_en.clone(),
                    name: name.to_string(),
                    name_en: name_en.map(str::to_string),
                    description: description.to_string(),
                    description_en: description_en.map(str::to_string),
                    location_id: Some(origin.location.clone()),
                    from_id: None,
                    to_id: None,
                    via: None,
                    via_en: None,
                });
            }
            None => {
                debug!(entity = entity_id, display = %origin.time.display, "origin year unresolved");
                *skipped += 1;
            }
        }
        for spread in spreads {
            match resolve_year(&spread.time.year, &spread.time.display) {
                Some(year) => {
                    let id = format!("event-{}", self.events.len());
                    self.events.push(TimelineEvent {
                        id,
                        entity_id: entity_id.to_string(),
                        entity_kind,
                        event_kind: EventKind::Spread,
                        year,
                        display_time: spread.time.display.clone(),
                        display_time_en: spread.time.display_en.clone(),
                        name: name.to_string(),
                        name_en: name_en.map(str::to_string),
                        description: description.to_string(),
                        description_en: description_en.map(str::to_string),
                        location_id: None,
                        from_id: Some(spread.from.clone()),
                        to_id: Some(spread.to.clone()),
                        via: spread.via.clone(),
                        via_en: spread.via_en.clone(),
                    });
                }
                None => {
                    debug!(entity = entity_id, display = %spread.time.display, "spread year unresolved");
                    *skipped += 1;
                }
            }
        }
    }
}

fn resolve_year(exact: &Option<i32>, display: &str) -> Option<i32> {
    exact.or_else(|| parse_year(display))
}

// ------------- Year formatting -------------

/// Format a year with the localized BCE/CE wording.
pub fn format_year(year: i32, localizer: &Localizer) -> String {
    match localizer.language() {
        Language::Zh => {
            if year < 0 {
                format!("公元前{}年", -year)
            } else {
                format!("{}年", year)
            }
        }
        Language::En => {
            if year < 0 {
                format!("{} BCE", -year)
            } else {
                format!("{} CE", year)
            }
        }
    }
}

/// The era's year range; an end year beyond the cutoff renders as the
/// localized "present" instead of a number.
pub fn era_range(era: &Era, localizer: &Localizer) -> String {
    let start = format_year(era.start_year, localizer);
    let end = if era.end_year > PRESENT_CUTOFF {
        match localizer.language() {
            Language::Zh => "至今".to_string(),
            Language::En => "present".to_string(),
        }
    } else {
        format_year(era.end_year, localizer)
    };
    format!("{} - {}", start, end)
}
