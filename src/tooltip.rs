//! Hover tooltip: field formatting, eruption-code decoding and placement.
//!
//! The box sits above-right of the hovered glyph. It flips to the left when
//! it would cross the right edge and below the glyph when it would cross the
//! top edge. The two flips are independent; no other marker is avoided.

use crate::dataset::VolcanoRecord;
use egui::{Color32, FontId, Pos2, Rect, Stroke};

pub const PADDING: f32 = 8.0;
pub const LINE_HEIGHT: f32 = 16.0;
pub const ANCHOR_OFFSET: f32 = 12.0;
pub const EDGE_MARGIN: f32 = 8.0;
pub const FONT_SIZE: f32 = 12.0;
pub const CORNER_RADIUS: f32 = 6.0;

/// Unmultiplied RGBA of the box fill.
pub const BOX_FILL: [u8; 4] = [255, 250, 240, 240];
pub const BOX_STROKE: Color32 = Color32::from_gray(180);
pub const TEXT_COLOR: Color32 = Color32::from_gray(20);

const ERUPTION_CODES: [(&str, &str); 10] = [
    ("D1", "1964 or later"),
    ("D2", "1900–1963"),
    ("D3", "1800–1899"),
    ("D4", "1700–1799"),
    ("D5", "1500–1699"),
    ("D6", "A.D. 1–1499"),
    ("D7", "B.C. (Holocene)"),
    ("U", "Undated, but probable Holocene eruption"),
    ("Q", "Quaternary eruption(s) with only known Holocene activity being hydrothermal"),
    ("?", "Uncertain Holocene eruption"),
];

/// Human-readable eruption date. Unrecognized codes are returned trimmed but otherwise as-is.
pub fn decode_eruption(code: &str) -> &str {
    let code = code.trim();
    ERUPTION_CODES
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |&(_, text)| text)
}

pub fn tooltip_lines(record: &VolcanoRecord) -> Vec<String> {
    vec![
        record.name.clone(),
        format!("Type: {}", record.display_type()),
        format!("Elevation: {} m", record.elevation),
        format!("Location: {}", record.location),
        format!("Country: {}", record.country),
        format!("Last Eruption: {}", decode_eruption(&record.last_eruption)),
    ]
}

/// Box for lines of the given measured widths, anchored at `anchor` inside `bounds`.
pub fn layout_tooltip(anchor: Pos2, line_widths: &[f32], bounds: Rect) -> Rect {
    let tw = line_widths.iter().copied().fold(0.0_f32, f32::max) + PADDING * 2.0;
    let th = line_widths.len() as f32 * LINE_HEIGHT + PADDING * 2.0;

    let mut tx = anchor.x + ANCHOR_OFFSET;
    let mut ty = anchor.y - th - ANCHOR_OFFSET;
    if tx + tw > bounds.right() - EDGE_MARGIN {
        tx = anchor.x - tw - ANCHOR_OFFSET;
    }
    if ty < bounds.top() + EDGE_MARGIN {
        ty = anchor.y + ANCHOR_OFFSET;
    }
    Rect::from_min_size(egui::pos2(tx, ty), egui::vec2(tw, th))
}

pub fn box_fill() -> Color32 {
    let [r, g, b, a] = BOX_FILL;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn draw_tooltip(painter: &egui::Painter, record: &VolcanoRecord, anchor: Pos2, bounds: Rect) {
    let font = FontId::proportional(FONT_SIZE);
    let galleys: Vec<_> = tooltip_lines(record)
        .into_iter()
        .map(|line| painter.layout_no_wrap(line, font.clone(), TEXT_COLOR))
        .collect();
    let widths: Vec<f32> = galleys.iter().map(|g| g.size().x).collect();
    let rect = layout_tooltip(anchor, &widths, bounds);

    painter.rect_filled(rect, CORNER_RADIUS, box_fill());
    painter.rect_stroke(rect, CORNER_RADIUS, Stroke::new(1.0, BOX_STROKE), egui::StrokeKind::Inside);
    for (i, galley) in galleys.into_iter().enumerate() {
        let pos = rect.min + egui::vec2(PADDING, PADDING + i as f32 * LINE_HEIGHT);
        painter.galley(pos, galley, TEXT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn screen() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 600.0))
    }

    const WIDTHS: [f32; 6] = [80.0, 120.0, 150.0, 90.0, 70.0, 140.0];

    #[test]
    fn box_fill_is_translucent_cream() {
        let fill = box_fill();
        assert_eq!(fill.a(), 240);
        for (got, want) in fill.to_srgba_unmultiplied().into_iter().zip(BOX_FILL) {
            assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
        }
    }

    #[test]
    fn decodes_known_codes() {
        assert_eq!(decode_eruption("D1"), "1964 or later");
        assert_eq!(decode_eruption("D7"), "B.C. (Holocene)");
        assert_eq!(decode_eruption(" U "), "Undated, but probable Holocene eruption");
        assert_eq!(decode_eruption("?"), "Uncertain Holocene eruption");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(decode_eruption("XYZ"), "XYZ");
        assert_eq!(decode_eruption("  1883  "), "1883");
        assert_eq!(decode_eruption("Unknown"), "Unknown");
        assert_eq!(decode_eruption("d1"), "d1");
    }

    #[test]
    fn lines_in_display_order() {
        let mut etna = VolcanoRecord::new("Etna", 37.75, 15.0, "Stratovolcano");
        etna.elevation = "3350".to_string();
        etna.location = "Italy".to_string();
        etna.country = "Italy".to_string();
        etna.last_eruption = "D1".to_string();
        assert_eq!(
            tooltip_lines(&etna),
            vec![
                "Etna".to_string(),
                "Type: Stratovolcano".to_string(),
                "Elevation: 3350 m".to_string(),
                "Location: Italy".to_string(),
                "Country: Italy".to_string(),
                "Last Eruption: 1964 or later".to_string(),
            ]
        );
    }

    #[test]
    fn box_size_follows_text() {
        let rect = layout_tooltip(egui::pos2(500.0, 300.0), &WIDTHS, screen());
        assert_eq!(rect.width(), 150.0 + 2.0 * PADDING);
        assert_eq!(rect.height(), 6.0 * LINE_HEIGHT + 2.0 * PADDING);
    }

    #[test]
    fn default_placement_is_above_right() {
        let anchor = egui::pos2(500.0, 300.0);
        let rect = layout_tooltip(anchor, &WIDTHS, screen());
        assert_eq!(rect.left(), anchor.x + ANCHOR_OFFSET);
        assert_eq!(rect.bottom(), anchor.y - ANCHOR_OFFSET);
    }

    #[test]
    fn flips_left_near_the_right_edge() {
        let anchor = egui::pos2(990.0, 300.0);
        let rect = layout_tooltip(anchor, &WIDTHS, screen());
        assert!(rect.right() <= 1000.0 - EDGE_MARGIN);
        assert_eq!(rect.right(), anchor.x - ANCHOR_OFFSET);
        // Vertical placement unaffected.
        assert_eq!(rect.bottom(), anchor.y - ANCHOR_OFFSET);
    }

    #[test]
    fn flips_below_near_the_top_edge() {
        let anchor = egui::pos2(500.0, 20.0);
        let rect = layout_tooltip(anchor, &WIDTHS, screen());
        assert_eq!(rect.top(), anchor.y + ANCHOR_OFFSET);
        assert_eq!(rect.left(), anchor.x + ANCHOR_OFFSET);
    }

    #[test]
    fn flips_both_in_the_top_right_corner() {
        let anchor = egui::pos2(995.0, 5.0);
        let rect = layout_tooltip(anchor, &WIDTHS, screen());
        assert!(rect.right() <= 1000.0 - EDGE_MARGIN);
        assert!(rect.top() > anchor.y);
    }
}
