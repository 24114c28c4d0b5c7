//! Map painting: title, graticule, base map, reference cities, volcano
//! glyphs and the legend.
//!
//! Everything that carries a geographic coordinate goes through
//! `projection::project_pos` with the same viewport, so overlays and glyphs
//! always line up.

use crate::category::Category;
use crate::geo::REFERENCE_CITIES;
use crate::glyph::{draw_glyph, GlyphKind, GlyphStyle};
use crate::picking::ProjectedEntity;
use crate::projection::{graticule, project_pos, Viewport};
use crate::scene::{MapScene, RenderState};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

pub const TITLE_Y: f32 = 70.0;
pub const TITLE_SIZE: f32 = 60.0;
pub const GRATICULE_COLOR: Color32 = Color32::from_rgb(40, 45, 110);
pub const COASTLINE_COLOR: Color32 = Color32::from_rgb(90, 110, 170);
pub const BORDER_COLOR: Color32 = Color32::from_rgb(60, 75, 140);
pub const CITY_COLOR: Color32 = Color32::from_rgb(220, 220, 200);

const LEGEND_ROW: f32 = 18.0;
const LEGEND_GLYPH: f32 = 12.0;

fn is_finite(p: Pos2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

pub fn draw_title(painter: &egui::Painter, screen: Rect, title: &str) {
    painter.text(
        egui::pos2(screen.center().x, screen.top() + TITLE_Y),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(TITLE_SIZE),
        Color32::WHITE,
    );
}

/// Lat/lon polylines, split wherever they jump across the antimeridian.
pub fn draw_polylines(painter: &egui::Painter, viewport: &Viewport, lines: &[Vec<(f64, f64)>], stroke: Stroke) {
    for polyline in lines {
        let mut segment: Vec<Pos2> = Vec::new();
        let mut prev_lon: Option<f64> = None;
        for &(lat, lon) in polyline {
            if prev_lon.is_some_and(|p| (lon - p).abs() > 180.0) {
                let done = std::mem::take(&mut segment);
                if done.len() > 1 {
                    painter.add(egui::Shape::line(done, stroke));
                }
            }
            segment.push(project_pos(lat, lon, viewport));
            prev_lon = Some(lon);
        }
        if segment.len() > 1 {
            painter.add(egui::Shape::line(segment, stroke));
        }
    }
}

pub fn draw_graticule(painter: &egui::Painter, viewport: &Viewport, step_deg: f64) {
    draw_polylines(painter, viewport, &graticule(step_deg), Stroke::new(1.0, GRATICULE_COLOR));
}

pub fn draw_cities(painter: &egui::Painter, viewport: &Viewport) {
    let font = FontId::proportional(10.0);
    for city in &REFERENCE_CITIES {
        let pos = project_pos(city.lat, city.lon, viewport);
        painter.circle_filled(pos, 2.0, CITY_COLOR);
        painter.text(pos + egui::vec2(4.0, 0.0), Align2::LEFT_CENTER, city.name, font.clone(), CITY_COLOR);
    }
}

pub fn draw_volcanoes(
    painter: &egui::Painter,
    scene: &MapScene,
    state: &RenderState,
    visible: &[ProjectedEntity],
    glyph_size: f32,
    background: Color32,
) {
    for entity in visible {
        if !is_finite(entity.pos) {
            continue;
        }
        let record = &scene.records[entity.index];
        let fill = scene.colors.color(&record.type_key);
        let style = if state.is_hovered(entity.index) {
            GlyphStyle::hovered(fill, background)
        } else {
            GlyphStyle::new(fill, background)
        };
        draw_glyph(painter, record.glyph_kind(), entity.pos, glyph_size, &style);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub glyph: GlyphKind,
    pub color: Color32,
}

/// One row per category in the visible set, sorted by label, using the
/// first visible record of that category as the sample glyph.
pub fn legend_entries(scene: &MapScene, visible: &[ProjectedEntity]) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = Vec::new();
    for entity in visible {
        let record = &scene.records[entity.index];
        let category = record.category();
        if entries.iter().any(|e| e.category == category) {
            continue;
        }
        entries.push(LegendEntry {
            category,
            glyph: record.glyph_kind(),
            color: scene.colors.color(&record.type_key),
        });
    }
    entries.sort_by_key(|e| e.category.label());
    entries
}

pub fn draw_legend(painter: &egui::Painter, entries: &[LegendEntry], map_rect: Rect, background: Color32) {
    if entries.is_empty() {
        return;
    }
    let font = FontId::proportional(12.0);
    let galleys: Vec<_> = entries
        .iter()
        .map(|e| painter.layout_no_wrap(e.category.label().to_string(), font.clone(), Color32::WHITE))
        .collect();
    let text_w = galleys.iter().map(|g| g.size().x).fold(0.0_f32, f32::max);
    let size = egui::vec2(LEGEND_GLYPH + 16.0 + text_w, entries.len() as f32 * LEGEND_ROW + 8.0);
    let rect = Rect::from_min_size(egui::pos2(map_rect.left() + 8.0, map_rect.bottom() - size.y - 8.0), size);
    painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(0, 0, 0, 160));

    for (i, (entry, galley)) in entries.iter().zip(galleys).enumerate() {
        let row_center_y = rect.top() + 4.0 + LEGEND_ROW * (i as f32 + 0.5);
        let glyph_center = egui::pos2(rect.left() + 4.0 + LEGEND_GLYPH / 2.0, row_center_y);
        draw_glyph(painter, entry.glyph, glyph_center, LEGEND_GLYPH, &GlyphStyle::new(entry.color, background));
        let text_pos = egui::pos2(rect.left() + LEGEND_GLYPH + 12.0, row_center_y - galley.size().y / 2.0);
        painter.galley(text_pos, galley, Color32::WHITE);
    }
}
