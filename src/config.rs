//! Application configuration.
//!
//! Read from an optional TOML file; every key has a default, so an empty or
//! missing file yields the stock map. Command-line flags are applied on top
//! in `main`.

use crate::error::{MapError, Result};
use crate::projection::{MAX_GRATICULE_STEP, MIN_GRATICULE_STEP};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "volcano-map.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub dataset: PathBuf,
    /// Directory holding the Natural Earth GeoJSON layers.
    pub geodata: PathBuf,
    pub font: Option<PathBuf>,
    pub window: WindowConfig,
    pub map: MapStyle,
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1600.0, height: 1000.0 }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapStyle {
    pub title: String,
    pub margin: f32,
    pub top: f32,
    pub glyph_size: f32,
    pub pick_radius: f32,
    pub background: [u8; 3],
    pub graticule_step: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            title: "VOLCANOES OF THE WORLD".to_string(),
            margin: 50.0,
            top: 130.0,
            glyph_size: 20.0,
            pick_radius: 20.0,
            background: [25, 30, 102],
            graticule_step: 30.0,
        }
    }
}

impl MapStyle {
    pub fn background_color(&self) -> egui::Color32 {
        let [r, g, b] = self.background;
        egui::Color32::from_rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub coastlines: bool,
    pub borders: bool,
    pub graticule: bool,
    pub cities: bool,
    pub legend: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            coastlines: true,
            borders: false,
            graticule: true,
            cities: true,
            legend: true,
        }
    }
}

impl MapConfig {
    pub fn default_dataset() -> PathBuf {
        PathBuf::from("asset").join("dataset.csv")
    }

    pub fn default_geodata() -> PathBuf {
        PathBuf::from("asset").join("geodata")
    }

    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let mut config: MapConfig = toml::from_str(text).map_err(|source| MapError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        if config.dataset.as_os_str().is_empty() {
            config.dataset = Self::default_dataset();
        }
        if config.geodata.as_os_str().is_empty() {
            config.geodata = Self::default_geodata();
        }
        let step = config.map.graticule_step;
        if !(MIN_GRATICULE_STEP..=MAX_GRATICULE_STEP).contains(&step) {
            return Err(MapError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!(
                    "map.graticule_step must be between {MIN_GRATICULE_STEP} and {MAX_GRATICULE_STEP} degrees, got {step}"
                ),
            });
        }
        Ok(config)
    }

    /// A missing file is not an error: it yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::stock())
            }
            Err(e) => Err(MapError::io(path, e)),
        }
    }

    pub fn stock() -> Self {
        Self {
            dataset: Self::default_dataset(),
            geodata: Self::default_geodata(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_the_stock_config() {
        let config = MapConfig::from_toml("", Path::new("test.toml")).expect("parse");
        assert_eq!(config, MapConfig::stock());
        assert_eq!(config.map.glyph_size, 20.0);
        assert_eq!(config.map.pick_radius, 20.0);
        assert_eq!(config.map.background_color(), egui::Color32::from_rgb(25, 30, 102));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            dataset = "data/holocene.csv"

            [map]
            pick_radius = 12.0

            [overlay]
            borders = true
        "#;
        let config = MapConfig::from_toml(text, Path::new("test.toml")).expect("parse");
        assert_eq!(config.dataset, PathBuf::from("data/holocene.csv"));
        assert_eq!(config.map.pick_radius, 12.0);
        assert_eq!(config.map.margin, 50.0);
        assert!(config.overlay.borders);
        assert!(config.overlay.coastlines);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = MapConfig::from_toml("[map\npick_radius = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, MapError::Config { .. }));
    }

    #[test]
    fn graticule_step_is_range_checked() {
        for bad in ["1e-15", "0.5", "0.0", "-30.0", "120.0", "nan"] {
            let text = format!("[map]\ngraticule_step = {bad}");
            let err = MapConfig::from_toml(&text, Path::new("test.toml")).unwrap_err();
            assert!(matches!(err, MapError::InvalidConfig { .. }), "{bad}: {err}");
        }
        for good in ["1.0", "15.0", "90.0"] {
            let text = format!("[map]\ngraticule_step = {good}");
            assert!(MapConfig::from_toml(&text, Path::new("test.toml")).is_ok(), "{good}");
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = MapConfig::load(Path::new("no/such/volcano-map.toml")).expect("defaults");
        assert_eq!(config, MapConfig::stock());
    }
}
