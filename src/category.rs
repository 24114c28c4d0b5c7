//! Volcano type classification.
//!
//! Maps the free-text `Type` column of the dataset onto a fixed set of
//! display categories used by the selector bar and the filter.

use std::fmt;

/// Key used for records whose type column is empty or missing.
pub const UNKNOWN_TYPE_KEY: &str = "unknown";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Stratovolcanoes,
    ShieldVolcanoes,
    CinderCones,
    Calderas,
    LavaDomes,
    ComplexVolcanoes,
    Maars,
    SubmarineVolcanoes,
    FissureVents,
    PyroclasticCones,
    TuffCones,
    TuffRings,
    VolcanicFields,
    HydrothermalFields,
    Cones,
    UnknownType,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Stratovolcanoes => "Stratovolcanoes",
            Category::ShieldVolcanoes => "Shield Volcanoes",
            Category::CinderCones => "Cinder Cones",
            Category::Calderas => "Calderas",
            Category::LavaDomes => "Lava Domes",
            Category::ComplexVolcanoes => "Complex Volcanoes",
            Category::Maars => "Maars",
            Category::SubmarineVolcanoes => "Submarine Volcanoes",
            Category::FissureVents => "Fissure Vents",
            Category::PyroclasticCones => "Pyroclastic Cones",
            Category::TuffCones => "Tuff Cones",
            Category::TuffRings => "Tuff Rings",
            Category::VolcanicFields => "Volcanic Fields",
            Category::HydrothermalFields => "Hydrothermal Fields",
            Category::Cones => "Cones",
            Category::UnknownType => "Unknown Type",
            Category::Other => "Other",
        }
    }

    #[cfg(test)]
    pub const ALL: [Category; 17] = [
        Category::Stratovolcanoes,
        Category::ShieldVolcanoes,
        Category::CinderCones,
        Category::Calderas,
        Category::LavaDomes,
        Category::ComplexVolcanoes,
        Category::Maars,
        Category::SubmarineVolcanoes,
        Category::FissureVents,
        Category::PyroclasticCones,
        Category::TuffCones,
        Category::TuffRings,
        Category::VolcanicFields,
        Category::HydrothermalFields,
        Category::Cones,
        Category::UnknownType,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercased, trimmed type key. Empty or missing input becomes `"unknown"`.
pub fn normalize_type(raw_type: Option<&str>) -> String {
    let key = raw_type.map(str::trim).unwrap_or("").to_lowercase();
    if key.is_empty() { UNKNOWN_TYPE_KEY.to_string() } else { key }
}

fn lookup(key: &str) -> Option<Category> {
    let category = match key {
        "stratovolcano" => Category::Stratovolcanoes,
        "shield" | "shield volcano" => Category::ShieldVolcanoes,
        "cinder cone" | "scoria cone" => Category::CinderCones,
        "caldera" => Category::Calderas,
        "lava dome" | "lava domes" => Category::LavaDomes,
        "complex" => Category::ComplexVolcanoes,
        "maar" => Category::Maars,
        "submarine volcano" => Category::SubmarineVolcanoes,
        "fissure vent" => Category::FissureVents,
        "pyroclastic cone" => Category::PyroclasticCones,
        "tuff cone" => Category::TuffCones,
        "tuff ring" => Category::TuffRings,
        "volcanic field" => Category::VolcanicFields,
        "hydrothermal field" => Category::HydrothermalFields,
        "cone" => Category::Cones,
        UNKNOWN_TYPE_KEY => Category::UnknownType,
        _ => return None,
    };
    Some(category)
}

/// Total over every input: unmapped types land in [`Category::Other`].
pub fn classify(raw_type: Option<&str>) -> Category {
    lookup(&normalize_type(raw_type)).unwrap_or(Category::Other)
}

/// Distinct categories sorted by display label.
pub fn sorted_categories<'a>(categories: impl IntoIterator<Item = &'a Category>) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for c in categories {
        if !out.contains(c) {
            out.push(*c);
        }
    }
    out.sort_by_key(|c| c.label());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify(Some("STRATOVOLCANO")), classify(Some("stratovolcano")));
        assert_eq!(classify(Some("Stratovolcano")), Category::Stratovolcanoes);
        assert_eq!(classify(Some("  Shield Volcano ")), Category::ShieldVolcanoes);
    }

    #[test]
    fn empty_and_missing_types_are_unknown() {
        assert_eq!(classify(None), Category::UnknownType);
        assert_eq!(classify(Some("")), Category::UnknownType);
        assert_eq!(classify(Some("   ")), Category::UnknownType);
        assert_eq!(classify(Some("Unknown")), Category::UnknownType);
    }

    #[test]
    fn unmapped_types_fall_back_to_other() {
        assert_eq!(classify(Some("Somma volcano")), Category::Other);
        assert_eq!(classify(Some("complex volcano")), Category::Other);
        assert_eq!(classify(Some("?")), Category::Other);
    }

    #[test]
    fn aliases_share_a_category() {
        assert_eq!(classify(Some("shield")), classify(Some("shield volcano")));
        assert_eq!(classify(Some("scoria cone")), Category::CinderCones);
        assert_eq!(classify(Some("Lava domes")), Category::LavaDomes);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::BTreeSet<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), Category::ALL.len());
        assert!(!labels.contains(crate::filter::ALL_LABEL));
    }

    #[test]
    fn categories_are_deduplicated_and_sorted_by_label() {
        let seen = [
            Category::Stratovolcanoes,
            Category::Calderas,
            Category::Other,
            Category::Calderas,
            Category::CinderCones,
        ];
        assert_eq!(
            sorted_categories(&seen),
            vec![Category::Calderas, Category::CinderCones, Category::Other, Category::Stratovolcanoes],
        );
    }
}
