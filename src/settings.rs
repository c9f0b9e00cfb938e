//! Runtime settings, layered from built-in defaults, an optional
//! `foodlore.toml` next to the binary, and `FOODLORE_`-prefixed environment
//! variables.

use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    /// Directory holding the crops/foods/locations/relations documents.
    pub data_dir: String,
    /// File the language selection is persisted in.
    pub language_file: String,
    /// Language used when no persisted selection exists: "zh" or "en".
    pub default_language: String,
}

impl Settings {
    pub fn load() -> Result<Settings> {
        let settings = config::Config::builder()
            .set_default("data_dir", "data")?
            .set_default("language_file", "language")?
            .set_default("default_language", "zh")?
            .add_source(config::File::with_name("foodlore").required(false))
            .add_source(config::Environment::with_prefix("FOODLORE"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
