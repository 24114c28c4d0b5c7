//! Base map overlay data.
//!
//! Natural Earth coastlines and land borders are read from local GeoJSON
//! files before the first frame and parsed into (lat, lon) polylines. The
//! reference city list is compiled in.

use crate::error::{MapError, Result};
use std::path::Path;

pub struct ReferenceCity {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub const REFERENCE_CITIES: [ReferenceCity; 12] = [
    ReferenceCity { name: "Reykjavík", lat: 64.15, lon: -21.94 },
    ReferenceCity { name: "Naples", lat: 40.85, lon: 14.27 },
    ReferenceCity { name: "Anchorage", lat: 61.22, lon: -149.90 },
    ReferenceCity { name: "Seattle", lat: 47.61, lon: -122.33 },
    ReferenceCity { name: "Mexico City", lat: 19.43, lon: -99.13 },
    ReferenceCity { name: "Quito", lat: -0.18, lon: -78.47 },
    ReferenceCity { name: "Santiago", lat: -33.45, lon: -70.67 },
    ReferenceCity { name: "Tokyo", lat: 35.68, lon: 139.69 },
    ReferenceCity { name: "Manila", lat: 14.60, lon: 120.98 },
    ReferenceCity { name: "Jakarta", lat: -6.21, lon: 106.85 },
    ReferenceCity { name: "Auckland", lat: -36.85, lon: 174.76 },
    ReferenceCity { name: "Honolulu", lat: 21.31, lon: -157.86 },
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseMapData {
    pub coastlines: Vec<Vec<(f64, f64)>>,
    pub borders: Vec<Vec<(f64, f64)>>,
}

pub const COASTLINE_FILE: &str = "ne_110m_coastline.geojson";
pub const BORDER_FILE: &str = "ne_110m_admin_0_boundary_lines_land.geojson";

/// LineString and MultiLineString features as (lat, lon) polylines. Other geometry is skipped.
pub fn parse_geojson_lines(json: &str) -> Result<Vec<Vec<(f64, f64)>>> {
    let v: serde_json::Value = serde_json::from_str(json)?;
    let features = v["features"]
        .as_array()
        .ok_or_else(|| MapError::GeoJson("no features".to_string()))?;
    let mut polylines = Vec::new();
    for feat in features {
        let geom = &feat["geometry"];
        match geom["type"].as_str() {
            Some("LineString") => {
                if let Some(line) = extract_coord_line(&geom["coordinates"]) {
                    polylines.push(line);
                }
            }
            Some("MultiLineString") => {
                if let Some(arrs) = geom["coordinates"].as_array() {
                    polylines.extend(arrs.iter().filter_map(extract_coord_line));
                }
            }
            _ => {}
        }
    }
    Ok(polylines)
}

fn extract_coord_line(arr: &serde_json::Value) -> Option<Vec<(f64, f64)>> {
    let points = arr.as_array()?;
    let coords: Vec<(f64, f64)> = points.iter().filter_map(|p| {
        let a = p.as_array()?;
        Some((a.get(1)?.as_f64()?, a.first()?.as_f64()?))
    }).collect();
    if coords.len() < 2 { None } else { Some(coords) }
}

pub fn load_polylines(path: &Path) -> Result<Vec<Vec<(f64, f64)>>> {
    let text = std::fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
    parse_geojson_lines(&text)
}

fn load_layer(dir: &Path, filename: &str) -> Vec<Vec<(f64, f64)>> {
    match load_polylines(&dir.join(filename)) {
        Ok(lines) => lines,
        Err(e) => {
            log::warn!("Base map layer skipped: {e}");
            Vec::new()
        }
    }
}

/// Reads both layers from `dir` once at startup. A missing or malformed file
/// leaves that layer empty; the map still renders without it.
pub fn load_base_map(dir: &Path) -> BaseMapData {
    let data = BaseMapData {
        coastlines: load_layer(dir, COASTLINE_FILE),
        borders: load_layer(dir, BORDER_FILE),
    };
    log::info!(
        "Base map: {} coastline and {} border polylines from {}",
        data.coastlines.len(),
        data.borders.len(),
        dir.display()
    );
    data
}
