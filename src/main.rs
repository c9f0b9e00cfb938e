use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foodlore::chronicle::{Chronicle, era_range};
use foodlore::error::Result;
use foodlore::lang::{FileLanguageStore, Language, Localizer};
use foodlore::loader::load_store;
use foodlore::search::search;
use foodlore::settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    let default_language = Language::from_code(&settings.default_language).unwrap_or(Language::Zh);
    let localizer = Localizer::new(
        Box::new(FileLanguageStore::new(&settings.language_file)),
        default_language,
    );
    let store = load_store(Path::new(&settings.data_dir))?;
    let mut chronicle = Chronicle::new(&store);

    let stats = Chronicle::stats(chronicle.events());
    info!(
        total = stats.total,
        crop_origin = stats.crop_origin,
        crop_spread = stats.crop_spread,
        food_origin = stats.food_origin,
        food_spread = stats.food_spread,
        "timeline ready"
    );
    for era in chronicle.eras() {
        let count = chronicle.event_count_in_era(era.id);
        info!(
            era = era.id,
            range = %era_range(era, &localizer),
            events = count,
            "era"
        );
    }

    // an optional keyword argument runs one search against the loaded base
    if let Some(keyword) = std::env::args().nth(1) {
        for hit in search(&store, &localizer, &keyword) {
            println!("{:?}\t{}\t{}\t{}", hit.kind, hit.id, hit.name, hit.subtitle);
        }
    }
    Ok(())
}
