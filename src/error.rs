
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodloreError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Load error: {0}")]
    Load(String),
    #[error("Data error: {message}")]
    Data { message: String },
}

pub type Result<T> = std::result::Result<T, FoodloreError>;

// Helper conversions
impl From<std::io::Error> for FoodloreError {
    fn from(e: std::io::Error) -> Self { Self::Load(e.to_string()) }
}
impl From<serde_json::Error> for FoodloreError {
    fn from(e: serde_json::Error) -> Self { Self::Load(e.to_string()) }
}
impl From<config::ConfigError> for FoodloreError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
