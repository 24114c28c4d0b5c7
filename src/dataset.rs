//! Volcano dataset loading.
//!
//! Reads the CSV once at startup. Dirty rows are tolerated: missing text
//! fields become `"Unknown"` and unparseable coordinates become NaN, which
//! keeps the record off-screen and out of hit testing without failing the
//! load.

use crate::category::{classify, normalize_type, Category};
use crate::error::{MapError, Result};
use crate::glyph::GlyphKind;
use std::io::Read;
use std::path::Path;

pub const MISSING_FIELD: &str = "Unknown";

pub const COL_NAME: &str = "Volcano Name";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_TYPE: &str = "Type";
pub const COL_ELEVATION: &str = "Elevation";
pub const COL_LOCATION: &str = "Location";
pub const COL_COUNTRY: &str = "Country";
pub const COL_LAST_ERUPTION: &str = "Last Known Eruption";

#[derive(Clone, Debug, PartialEq)]
pub struct VolcanoRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Type as written in the dataset, trimmed. Empty when the column was blank.
    pub raw_type: String,
    /// Lowercased lookup key, `"unknown"` for blank types.
    pub type_key: String,
    pub elevation: String,
    pub location: String,
    pub country: String,
    pub last_eruption: String,
}

impl VolcanoRecord {
    #[cfg(test)]
    pub fn new(name: &str, latitude: f64, longitude: f64, raw_type: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            raw_type: raw_type.trim().to_string(),
            type_key: normalize_type(Some(raw_type)),
            elevation: MISSING_FIELD.to_string(),
            location: MISSING_FIELD.to_string(),
            country: MISSING_FIELD.to_string(),
            last_eruption: MISSING_FIELD.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        classify(Some(&self.type_key))
    }

    pub fn glyph_kind(&self) -> GlyphKind {
        GlyphKind::from_type_key(&self.type_key)
    }

    pub fn display_type(&self) -> &str {
        if self.raw_type.is_empty() { MISSING_FIELD } else { &self.raw_type }
    }

    pub fn has_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

struct Columns {
    name: Option<usize>,
    latitude: usize,
    longitude: usize,
    kind: Option<usize>,
    elevation: Option<usize>,
    location: Option<usize>,
    country: Option<usize>,
    last_eruption: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            name: find(COL_NAME),
            latitude: find(COL_LATITUDE).ok_or(MapError::MissingColumn(COL_LATITUDE))?,
            longitude: find(COL_LONGITUDE).ok_or(MapError::MissingColumn(COL_LONGITUDE))?,
            kind: find(COL_TYPE),
            elevation: find(COL_ELEVATION),
            location: find(COL_LOCATION),
            country: find(COL_COUNTRY),
            last_eruption: find(COL_LAST_ERUPTION),
        })
    }
}

fn field<'a>(row: &'a csv::StringRecord, idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| row.get(i)).map(str::trim).filter(|s| !s.is_empty())
}

fn text_or_unknown(row: &csv::StringRecord, idx: Option<usize>) -> String {
    field(row, idx).unwrap_or(MISSING_FIELD).to_string()
}

fn coordinate(row: &csv::StringRecord, idx: usize) -> f64 {
    field(row, Some(idx))
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn parse_row(row: &csv::StringRecord, cols: &Columns) -> VolcanoRecord {
    let raw_type = field(row, cols.kind).unwrap_or("");
    VolcanoRecord {
        name: text_or_unknown(row, cols.name),
        latitude: coordinate(row, cols.latitude),
        longitude: coordinate(row, cols.longitude),
        raw_type: raw_type.to_string(),
        type_key: normalize_type(Some(raw_type)),
        elevation: text_or_unknown(row, cols.elevation),
        location: text_or_unknown(row, cols.location),
        country: text_or_unknown(row, cols.country),
        last_eruption: text_or_unknown(row, cols.last_eruption),
    }
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<VolcanoRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let cols = Columns::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(row) => records.push(parse_row(&row, &cols)),
            Err(e) => {
                log::warn!("Skipping row {}: {}", idx + 1, e);
                skipped += 1;
            }
        }
    }

    let unplaced = records.iter().filter(|r| !r.has_position()).count();
    if unplaced > 0 {
        log::warn!("{} records have no usable coordinates and will not be drawn", unplaced);
    }
    if skipped > 0 {
        log::warn!("{} unreadable rows skipped", skipped);
    }
    Ok(records)
}

pub fn load_dataset(path: &Path) -> Result<Vec<VolcanoRecord>> {
    let file = std::fs::File::open(path).map_err(|e| MapError::io(path, e))?;
    let records = load_from_reader(std::io::BufReader::new(file))?;
    log::info!("Loaded {} volcanoes from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str =
        "Volcano Name,Country,Location,Latitude,Longitude,Elevation,Type,Status,Last Known Eruption\n";

    fn load(body: &str) -> Vec<VolcanoRecord> {
        load_from_reader(format!("{HEADER}{body}").as_bytes()).expect("load")
    }

    #[test]
    fn parses_a_complete_row() {
        let records = load("Etna,Italy,Italy,37.734,15.004,3350,Stratovolcano,Historical,D1\n");
        assert_eq!(records.len(), 1);
        let etna = &records[0];
        assert_eq!(etna.name, "Etna");
        assert_eq!(etna.country, "Italy");
        assert_eq!(etna.elevation, "3350");
        assert_eq!(etna.raw_type, "Stratovolcano");
        assert_eq!(etna.type_key, "stratovolcano");
        assert_eq!(etna.last_eruption, "D1");
        assert_eq!(etna.category(), Category::Stratovolcanoes);
        assert_eq!(etna.glyph_kind(), GlyphKind::Stratovolcano);
        assert!((etna.latitude - 37.734).abs() < 1e-9);
        assert!(etna.has_position());
    }

    #[test]
    fn missing_fields_become_unknown() {
        let records = load(",,,10.0,20.0,,,,\n");
        let r = &records[0];
        assert_eq!(r.name, MISSING_FIELD);
        assert_eq!(r.country, MISSING_FIELD);
        assert_eq!(r.location, MISSING_FIELD);
        assert_eq!(r.elevation, MISSING_FIELD);
        assert_eq!(r.last_eruption, MISSING_FIELD);
        assert_eq!(r.raw_type, "");
        assert_eq!(r.type_key, "unknown");
        assert_eq!(r.display_type(), MISSING_FIELD);
        assert_eq!(r.category(), Category::UnknownType);
    }

    #[test]
    fn bad_coordinates_become_nan() {
        let records = load("Ghost,X,Y,north,,100,Caldera,,U\n");
        let r = &records[0];
        assert!(r.latitude.is_nan());
        assert!(r.longitude.is_nan());
        assert!(!r.has_position());
        assert_eq!(r.category(), Category::Calderas);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let records = load("Short,Chile,Andes,-20.5,-68.1\n");
        let r = &records[0];
        assert_eq!(r.name, "Short");
        assert_eq!(r.type_key, "unknown");
        assert_eq!(r.last_eruption, MISSING_FIELD);
        assert!(r.has_position());
    }

    #[test]
    fn keeps_dataset_order() {
        let records = load(
            "A,X,Y,1,1,1,Maar,,D2\n\
             B,X,Y,2,2,2,Cone,,D3\n\
             C,X,Y,3,3,3,Shield,,D4\n",
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_coordinate_columns_are_an_error() {
        let err = load_from_reader("Volcano Name,Type\nEtna,Stratovolcano\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::MissingColumn(COL_LATITUDE)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }
}
