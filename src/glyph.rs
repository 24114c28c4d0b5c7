//! Per-type volcano glyphs.
//!
//! Each volcano type has its own vector symbol. Symbols are laid out around
//! the origin and scaled by a single `size`, so every glyph stays roughly
//! inside a `size x size` box centered on the volcano.

use crate::palette::highlight_color;
use egui::epaint::{CircleShape, CubicBezierShape, EllipseShape, QuadraticBezierShape};
use egui::{Color32, Pos2, Shape, Stroke};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GlyphKind {
    Stratovolcano,
    Shield,
    Caldera,
    LavaDome,
    CinderCone,
    Maar,
    Complex,
    SubmarineVolcano,
    FissureVent,
    PyroclasticCone,
    TuffCone,
    TuffRing,
    VolcanicField,
    HydrothermalField,
    Cone,
    /// Plain circle for every type without a dedicated symbol.
    Generic,
}

impl GlyphKind {
    /// Expects a normalized (lowercased, trimmed) type key.
    pub fn from_type_key(key: &str) -> GlyphKind {
        match key {
            "stratovolcano" => GlyphKind::Stratovolcano,
            "shield" | "shield volcano" => GlyphKind::Shield,
            "caldera" => GlyphKind::Caldera,
            "lava dome" | "lava domes" => GlyphKind::LavaDome,
            "cinder cone" | "scoria cone" => GlyphKind::CinderCone,
            "maar" => GlyphKind::Maar,
            "complex" | "complex volcano" => GlyphKind::Complex,
            "submarine volcano" => GlyphKind::SubmarineVolcano,
            "fissure vent" => GlyphKind::FissureVent,
            "pyroclastic cone" => GlyphKind::PyroclasticCone,
            "tuff cone" => GlyphKind::TuffCone,
            "tuff ring" => GlyphKind::TuffRing,
            "volcanic field" => GlyphKind::VolcanicField,
            "hydrothermal field" => GlyphKind::HydrothermalField,
            "cone" => GlyphKind::Cone,
            _ => GlyphKind::Generic,
        }
    }

    #[cfg(test)]
    pub const ALL: [GlyphKind; 16] = [
        GlyphKind::Stratovolcano,
        GlyphKind::Shield,
        GlyphKind::Caldera,
        GlyphKind::LavaDome,
        GlyphKind::CinderCone,
        GlyphKind::Maar,
        GlyphKind::Complex,
        GlyphKind::SubmarineVolcano,
        GlyphKind::FissureVent,
        GlyphKind::PyroclasticCone,
        GlyphKind::TuffCone,
        GlyphKind::TuffRing,
        GlyphKind::VolcanicField,
        GlyphKind::HydrothermalField,
        GlyphKind::Cone,
        GlyphKind::Generic,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub fill: Color32,
    /// Map background, used to punch holes (caldera pit, tuff cone crater).
    pub background: Color32,
    /// Line color of the stroke-only symbols.
    pub accent: Color32,
    pub outline: Stroke,
}

impl GlyphStyle {
    pub fn new(fill: Color32, background: Color32) -> Self {
        Self { fill, background, accent: Color32::WHITE, outline: Stroke::NONE }
    }

    /// Brightened fill plus a white outline.
    pub fn hovered(fill: Color32, background: Color32) -> Self {
        Self {
            fill: highlight_color(fill),
            background,
            accent: Color32::WHITE,
            outline: Stroke::new(2.0, Color32::WHITE),
        }
    }

    fn line(&self, width: f32) -> Stroke {
        Stroke::new(width + self.outline.width * 0.5, self.accent)
    }
}

fn triangle(center: Pos2, pts: [(f32, f32); 3], fill: Color32, stroke: Stroke) -> Shape {
    let points = pts.iter().map(|&(x, y)| center + egui::vec2(x, y)).collect();
    Shape::convex_polygon(points, fill, stroke)
}

fn circle(center: Pos2, radius: f32, fill: Color32, stroke: Stroke) -> Shape {
    Shape::Circle(CircleShape { center, radius, fill, stroke })
}

fn ring(center: Pos2, radius: f32, stroke: Stroke) -> Shape {
    circle(center, radius, Color32::TRANSPARENT, stroke)
}

/// Lower half of an ellipse, left to right.
fn lower_arc(center: Pos2, rx: f32, ry: f32, stroke: Stroke) -> Shape {
    const SEGMENTS: usize = 16;
    let points = (0..=SEGMENTS)
        .map(|i| {
            let t = PI * i as f32 / SEGMENTS as f32;
            center + egui::vec2(rx * t.cos(), ry * t.sin())
        })
        .collect();
    Shape::line(points, stroke)
}

pub fn glyph_shapes(kind: GlyphKind, center: Pos2, size: f32, style: &GlyphStyle) -> Vec<Shape> {
    let s = size;
    let h = s / 2.0;
    let fill = style.fill;
    let outline = style.outline;
    let at = |x: f32, y: f32| center + egui::vec2(x, y);

    match kind {
        GlyphKind::Stratovolcano | GlyphKind::Cone => {
            vec![triangle(center, [(-h, h), (h, h), (0.0, -h)], fill, outline)]
        }
        GlyphKind::Shield => vec![Shape::Ellipse(EllipseShape {
            center,
            radius: egui::vec2(h, s * 0.3),
            fill,
            stroke: outline,
        })],
        GlyphKind::Caldera => vec![
            circle(center, h, fill, outline),
            circle(center, s * 0.25, style.background, Stroke::NONE),
        ],
        GlyphKind::LavaDome => vec![QuadraticBezierShape::from_points_stroke(
            [at(h, h), at(0.0, -s / 3.0), at(-h, h)],
            true,
            fill,
            outline,
        )
        .into()],
        GlyphKind::CinderCone => {
            vec![triangle(center, [(-h, h), (h, h), (0.0, -s * 0.7)], fill, outline)]
        }
        GlyphKind::Maar => vec![
            ring(center, h, style.line(2.0)),
            ring(center, s * 0.3, style.line(2.0)),
        ],
        GlyphKind::Complex => vec![
            triangle(center, [(-h, h), (h, h), (0.0, -h)], fill, outline),
            triangle(
                center,
                [(-s / 3.0, h), (s / 3.0, h), (0.0, -s / 4.0)],
                fill,
                Stroke::new(1.0, style.background),
            ),
        ],
        GlyphKind::SubmarineVolcano => {
            let mut shapes = vec![circle(center, h, fill, outline)];
            for i in -1..=1 {
                shapes.push(lower_arc(at(0.0, i as f32 * s * 0.15), s * 0.4, s * 0.2, style.line(2.0)));
            }
            shapes
        }
        GlyphKind::FissureVent => vec![Shape::line_segment([at(-h, 0.0), at(h, 0.0)], style.line(3.0))],
        GlyphKind::PyroclasticCone => {
            vec![triangle(center, [(-s / 3.0, s / 3.0), (s / 3.0, s / 3.0), (0.0, -h)], fill, outline)]
        }
        GlyphKind::TuffCone => vec![
            circle(center, h, fill, outline),
            triangle(
                center,
                [(-s * 0.3, s * 0.2), (s * 0.3, s * 0.2), (0.0, -s * 0.3)],
                style.background,
                Stroke::NONE,
            ),
        ],
        GlyphKind::TuffRing => vec![
            ring(center, h, style.line(2.0)),
            ring(center, s * 0.35, style.line(2.0)),
        ],
        GlyphKind::VolcanicField => (0..5)
            .map(|i| {
                let a = TAU / 5.0 * i as f32;
                circle(at(a.cos() * s * 0.4, a.sin() * s * 0.4), s * 0.15, fill, outline)
            })
            .collect(),
        GlyphKind::HydrothermalField => (-1..=1)
            .map(|i| {
                let y0 = i as f32 * s * 0.15;
                let y1 = i as f32 * s * 0.4;
                CubicBezierShape::from_points_stroke(
                    [at(-s * 0.2, y0), at(-s * 0.1, y1), at(s * 0.1, y1), at(s * 0.2, y0)],
                    false,
                    Color32::TRANSPARENT,
                    style.line(2.0),
                )
                .into()
            })
            .collect(),
        GlyphKind::Generic => vec![circle(center, h, fill, outline)],
    }
}

pub fn draw_glyph(painter: &egui::Painter, kind: GlyphKind, center: Pos2, size: f32, style: &GlyphStyle) {
    painter.extend(glyph_shapes(kind, center, size, style));
}
