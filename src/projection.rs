//! Equirectangular projection between geographic and screen coordinates.
//!
//! Longitude maps linearly onto the horizontal axis of the viewport and
//! latitude onto the vertical axis, north at the top. Inputs are never
//! clamped: coordinates outside the valid range extrapolate past the
//! viewport edges, and NaN stays NaN.

use egui::{Pos2, Rect};

pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Screen rectangle the world is projected into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.left() as f64, rect.top() as f64, rect.width() as f64, rect.height() as f64)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(
            egui::pos2(self.left as f32, self.top as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        let (x, y) = (pos.x as f64, pos.y as f64);
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min)
}

pub fn project(lat: f64, lon: f64, viewport: &Viewport) -> (f64, f64) {
    let x = map_range(lon, MIN_LON, MAX_LON, viewport.left, viewport.right());
    let y = map_range(lat, MAX_LAT, MIN_LAT, viewport.top, viewport.bottom());
    (x, y)
}

pub fn project_pos(lat: f64, lon: f64, viewport: &Viewport) -> Pos2 {
    let (x, y) = project(lat, lon, viewport);
    egui::pos2(x as f32, y as f32)
}

/// Inverse of [`project`], used for the cursor coordinate readout.
pub fn unproject(pos: Pos2, viewport: &Viewport) -> (f64, f64) {
    let lon = map_range(pos.x as f64, viewport.left, viewport.right(), MIN_LON, MAX_LON);
    let lat = map_range(pos.y as f64, viewport.top, viewport.bottom(), MAX_LAT, MIN_LAT);
    (lat, lon)
}

pub const MIN_GRATICULE_STEP: f64 = 1.0;
pub const MAX_GRATICULE_STEP: f64 = 90.0;

/// Parallels and meridians every `step_deg` degrees, each as a (lat, lon) polyline.
/// Steps outside `MIN_GRATICULE_STEP..=MAX_GRATICULE_STEP` yield no lines.
pub fn graticule(step_deg: f64) -> Vec<Vec<(f64, f64)>> {
    if !(MIN_GRATICULE_STEP..=MAX_GRATICULE_STEP).contains(&step_deg) {
        return Vec::new();
    }
    let parallels = ((MAX_LAT - MIN_LAT) / step_deg).floor() as usize;
    let meridians = ((MAX_LON - MIN_LON) / step_deg).floor() as usize;
    let mut lines = Vec::with_capacity(parallels + meridians + 2);
    for i in 0..=parallels {
        let lat = MIN_LAT + i as f64 * step_deg;
        lines.push(vec![(lat, MIN_LON), (lat, MAX_LON)]);
    }
    for i in 0..=meridians {
        let lon = MIN_LON + i as f64 * step_deg;
        lines.push(vec![(MIN_LAT, lon), (MAX_LAT, lon)]);
    }
    lines
}
