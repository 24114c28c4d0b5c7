//! Error type shared by the loaders that run before the first frame.
//!
//! The frame loop itself never fails; everything fallible happens while
//! reading the dataset, the config file, the font or the base map files.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Dataset is missing required column \"{0}\"")]
    MissingColumn(&'static str),
}

impl MapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MapError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
