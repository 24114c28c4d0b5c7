//! Glyph colors.
//!
//! Every distinct volcano type gets its own hue: the hue circle is split into
//! as many equal arcs as there are types, at fixed saturation and brightness.
//! Conversion from HSB is an explicit function call; nothing here carries a
//! global color mode.

use egui::Color32;
use std::collections::{BTreeMap, BTreeSet};

pub const GLYPH_SATURATION: f32 = 0.8;
pub const GLYPH_BRIGHTNESS: f32 = 0.9;
pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
pub const HIGHLIGHT_BOOST: u8 = 80;

/// HSB (a.k.a. HSV) to sRGB. `hue` in degrees, `saturation` and `brightness` in [0, 1].
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Color32 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let v = brightness.clamp(0.0, 1.0);
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// Per-channel `min(c + 80, 255)`, used for the hovered glyph.
pub fn highlight_color(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r().saturating_add(HIGHLIGHT_BOOST),
        color.g().saturating_add(HIGHLIGHT_BOOST),
        color.b().saturating_add(HIGHLIGHT_BOOST),
        color.a(),
    )
}

/// Normalized type key -> glyph color, fixed for the session.
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    colors: BTreeMap<String, Color32>,
}

impl ColorTable {
    /// Types are deduplicated and sorted first, so the same dataset always
    /// gets the same colors regardless of row order.
    pub fn assign<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = types.into_iter().map(|t| t.as_ref().to_string()).collect();
        let n = distinct.len();
        let colors = distinct
            .into_iter()
            .enumerate()
            .map(|(i, key)| {
                let hue = i as f32 * 360.0 / n as f32;
                (key, hsb_to_rgb(hue, GLYPH_SATURATION, GLYPH_BRIGHTNESS))
            })
            .collect();
        Self { colors }
    }

    pub fn color(&self, type_key: &str) -> Color32 {
        self.colors.get(type_key).copied().unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color32)> {
        self.colors.iter().map(|(k, c)| (k.as_str(), *c))
    }
}
