//! Bilingual text resolution.
//!
//! Every display string in the knowledge base comes as a primary/alternate
//! pair (Chinese primary, English alternate). The [`Localizer`] holds the one
//! piece of mutable state in the whole system, the current language selector,
//! and applies a uniform three-way fallback: the alternate text is used only
//! when the selector says so AND the alternate actually exists and is
//! non-empty; in every other case the primary text wins. Resolution always
//! reads the selector at call time, so a language switch is immediately
//! visible without rebuilding any derived data.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::model::{CropCategory, FoodCategory, LocationKind, SpreadEvent, TimePeriod};
use crate::store::EntityStore;

/// The two supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// External collaborator that persists the language selection across runs.
pub trait LanguageStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str);
}

/// Persists the language code as a single line of text in a file.
pub struct FileLanguageStore {
    path: PathBuf,
}
impl FileLanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
    // A failed save degrades to "selection not remembered", never to an error.
    fn save(&self, code: &str) {
        if let Err(e) = fs::write(&self.path, code) {
            warn!(path = %self.path.display(), error = %e, "could not persist language selection");
        }
    }
}

/// In-memory store, for tests and for callers that do not want persistence.
#[derive(Default)]
pub struct MemoryLanguageStore {
    code: RefCell<Option<String>>,
}
impl MemoryLanguageStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_code(code: &str) -> Self {
        Self {
            code: RefCell::new(Some(code.to_string())),
        }
    }
}
impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Option<String> {
        self.code.borrow().clone()
    }
    fn save(&self, code: &str) {
        *self.code.borrow_mut() = Some(code.to_string());
    }
}

/// Resolves primary/alternate text pairs against the current language.
///
/// Constructed once at startup; the selector is restored from the store
/// collaborator and written back synchronously on every change. Execution is
/// single-threaded, so a `Cell` is all the interior mutability needed.
pub struct Localizer {
    language: Cell<Language>,
    store: Box<dyn LanguageStore>,
}

impl Localizer {
    pub fn new(store: Box<dyn LanguageStore>, default: Language) -> Self {
        let restored = store
            .load()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(default);
        Self {
            language: Cell::new(restored),
            store,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        self.store.save(language.code());
    }

    pub fn toggle(&self) {
        let next = match self.language.get() {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        };
        self.set_language(next);
    }

    /// The uniform fallback: the alternate only when the selector is `En` and
    /// the alternate is present and non-empty, otherwise the primary.
    pub fn resolve<'a>(&self, primary: &'a str, alternate: Option<&'a str>) -> &'a str {
        match (self.language.get(), alternate) {
            (Language::En, Some(alt)) if !alt.is_empty() => alt,
            _ => primary,
        }
    }

    /// List form of the fallback: the alternate list only when non-empty.
    pub fn resolve_list<'a>(&self, primary: &'a [String], alternate: &'a [String]) -> &'a [String] {
        if self.language.get() == Language::En && !alternate.is_empty() {
            alternate
        } else {
            primary
        }
    }

    pub fn time_display<'a>(&self, time: &'a TimePeriod) -> &'a str {
        self.resolve(&time.display, time.display_en.as_deref())
    }

    pub fn via<'a>(&self, spread: &'a SpreadEvent) -> Option<&'a str> {
        spread
            .via
            .as_deref()
            .map(|via| self.resolve(via, spread.via_en.as_deref()))
    }

    /// Display name for a location id: the store record when one exists, then
    /// the static table of historical region names, then the raw id.
    pub fn location_name(&self, store: &EntityStore, id: &str) -> String {
        if let Some(location) = store.location(id) {
            return self
                .resolve(&location.name, location.name_en.as_deref())
                .to_string();
        }
        for (fallback_id, zh, en) in LOCATION_NAME_FALLBACK {
            if *fallback_id == id {
                return match self.language.get() {
                    Language::Zh => (*zh).to_string(),
                    Language::En => (*en).to_string(),
                };
            }
        }
        id.to_string()
    }

    pub fn crop_category_name(&self, category: CropCategory) -> &'static str {
        let (zh, en) = match category {
            CropCategory::Grain => ("谷物", "Grain"),
            CropCategory::Vegetable => ("蔬菜", "Vegetable"),
            CropCategory::Fruit => ("水果", "Fruit"),
            CropCategory::Legume => ("豆类", "Legume"),
            CropCategory::Spice => ("香料", "Spice"),
            CropCategory::Beverage => ("饮料作物", "Beverage Crop"),
            CropCategory::Oil => ("油料作物", "Oil Crop"),
            CropCategory::Sugar => ("糖料作物", "Sugar Crop"),
            CropCategory::Nut => ("坚果", "Nut"),
            CropCategory::Other => ("其他作物", "Other Crop"),
        };
        self.pick(zh, en)
    }

    pub fn food_category_name(&self, category: FoodCategory) -> &'static str {
        let (zh, en) = match category {
            FoodCategory::Staple => ("主食", "Staple"),
            FoodCategory::Dish => ("菜肴", "Dish"),
            FoodCategory::Beverage => ("饮品", "Beverage"),
            FoodCategory::Dessert => ("甜点", "Dessert"),
            FoodCategory::Snack => ("小吃", "Snack"),
            FoodCategory::Condiment => ("调味品", "Condiment"),
            FoodCategory::Preserved => ("腌制食品", "Preserved Food"),
        };
        self.pick(zh, en)
    }

    pub fn location_kind_name(&self, kind: LocationKind) -> &'static str {
        let (zh, en) = match kind {
            LocationKind::Continent => ("大洲", "Continent"),
            LocationKind::Country => ("国家", "Country"),
            LocationKind::Region => ("地区", "Region"),
        };
        self.pick(zh, en)
    }

    fn pick(&self, zh: &'static str, en: &'static str) -> &'static str {
        match self.language.get() {
            Language::Zh => zh,
            Language::En => en,
        }
    }
}

/// Names for location ids that have no record of their own, mostly historical
/// or loosely bounded regions referenced by spread events.
static LOCATION_NAME_FALLBACK: &[(&str, &str, &str)] = &[
    ("ireland", "爱尔兰", "Ireland"),
    ("mediterranean", "地中海地区", "Mediterranean"),
    ("mediterranean-region", "地中海地区", "Mediterranean"),
    ("andes", "安第斯山区", "Andes"),
    ("andes-region", "安第斯山区", "Andes"),
    ("central-asia", "中亚", "Central Asia"),
    ("southeast-asia", "东南亚", "Southeast Asia"),
    ("east-africa", "东非", "East Africa"),
    ("west-africa", "西非", "West Africa"),
    ("north-africa", "北非", "North Africa"),
    ("central-america", "中美洲", "Central America"),
    ("caribbean", "加勒比地区", "Caribbean"),
    ("arabia", "阿拉伯半岛", "Arabian Peninsula"),
    ("mesopotamia", "美索不达米亚", "Mesopotamia"),
    ("fertile-crescent", "新月沃土", "Fertile Crescent"),
    ("levant", "黎凡特", "Levant"),
    ("anatolia", "安纳托利亚", "Anatolia"),
    ("persia", "波斯", "Persia"),
    ("bengal", "孟加拉", "Bengal"),
    ("malabar", "马拉巴尔海岸", "Malabar Coast"),
    ("ceylon", "锡兰", "Ceylon"),
    ("java", "爪哇", "Java"),
    ("sumatra", "苏门答腊", "Sumatra"),
    ("polynesia", "波利尼西亚", "Polynesia"),
    ("melanesia", "美拉尼西亚", "Melanesia"),
    ("scandinavia", "斯堪的纳维亚", "Scandinavia"),
    ("iberia", "伊比利亚半岛", "Iberian Peninsula"),
    ("balkans", "巴尔干半岛", "Balkans"),
    ("caucasus", "高加索", "Caucasus"),
    ("siberia", "西伯利亚", "Siberia"),
    ("manchuria", "满洲", "Manchuria"),
    ("tibet", "西藏", "Tibet"),
    ("mongolia", "蒙古", "Mongolia"),
    ("korea", "朝鲜半岛", "Korean Peninsula"),
    ("indochina", "中南半岛", "Indochina"),
    ("malay-peninsula", "马来半岛", "Malay Peninsula"),
    ("philippines-region", "菲律宾群岛", "Philippine Islands"),
    ("new-world", "新大陆", "New World"),
    ("old-world", "旧大陆", "Old World"),
];
