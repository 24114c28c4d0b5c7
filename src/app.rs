//! Application shell and eframe integration.
//!
//! Owns the scene, the render state and the configuration, and drives the
//! per-frame order: category bar, status line, then the map itself
//! (overlays, hit test, glyphs, legend, tooltip). Everything read from disk
//! arrives through `App::new`; frames do no I/O.

use crate::config::MapConfig;
use crate::dataset::VolcanoRecord;
use crate::drawing::{
    draw_cities, draw_graticule, draw_legend, draw_polylines, draw_title, draw_volcanoes, legend_entries,
    BORDER_COLOR, COASTLINE_COLOR,
};
use crate::error::{MapError, Result};
use crate::filter::{category_bar, ALL_LABEL};
use crate::geo::BaseMapData;
use crate::projection::{unproject, Viewport};
use crate::scene::{MapScene, RenderState};
use crate::tooltip::draw_tooltip;
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

const FONT_NAME: &str = "map-font";

pub struct App {
    pub(crate) scene: MapScene,
    pub(crate) state: RenderState,
    pub(crate) config: MapConfig,
    pub(crate) base_map: BaseMapData,
    pub(crate) show_settings: bool,
    /// Map area of the previous frame, used by the status line which is laid out first.
    last_viewport: Option<Viewport>,
    visible_count: usize,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        records: Vec<VolcanoRecord>,
        base_map: BaseMapData,
        config: MapConfig,
    ) -> Self {
        if let Some(path) = &config.font {
            match load_font(path) {
                Ok(fonts) => {
                    cc.egui_ctx.set_fonts(fonts);
                    log::info!("Using font {}", path.display());
                }
                Err(e) => log::warn!("{e}; falling back to the default font"),
            }
        }
        let visible_count = records.len();
        Self {
            scene: MapScene::new(records),
            state: RenderState::default(),
            config,
            base_map,
            show_settings: false,
            last_viewport: None,
            visible_count,
        }
    }

    fn status_text(&self, ctx: &egui::Context) -> String {
        let filter = self.state.filter.active.map_or(ALL_LABEL, |c| c.label());
        let mut text = format!(
            "{} / {} volcanoes  |  {}",
            self.visible_count,
            self.scene.records.len(),
            filter
        );
        let cursor = ctx.pointer_hover_pos().zip(self.last_viewport).filter(|(p, vp)| vp.contains(*p));
        if let Some((pos, vp)) = cursor {
            let (lat, lon) = unproject(pos, &vp);
            text.push_str(&format!("  |  {lat:.2}°, {lon:.2}°"));
        }
        text
    }

    fn map_viewport(&self, screen: egui::Rect) -> Viewport {
        let style = &self.config.map;
        let min = screen.min + egui::vec2(style.margin, style.top);
        let size = egui::vec2(
            (screen.width() - 2.0 * style.margin).max(0.0),
            (screen.height() - style.top - style.margin).max(0.0),
        );
        Viewport::from_rect(egui::Rect::from_min_size(min, size))
    }

    fn show_map(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let screen = response.rect;
        let viewport = self.map_viewport(screen);
        let style = &self.config.map;
        let overlay = &self.config.overlay;
        let background = style.background_color();

        draw_title(&painter, screen, &style.title);
        if overlay.graticule {
            draw_graticule(&painter, &viewport, style.graticule_step);
        }
        if overlay.coastlines {
            draw_polylines(&painter, &viewport, &self.base_map.coastlines, egui::Stroke::new(1.0, COASTLINE_COLOR));
        }
        if overlay.borders {
            draw_polylines(&painter, &viewport, &self.base_map.borders, egui::Stroke::new(0.5, BORDER_COLOR));
        }
        if overlay.cities {
            draw_cities(&painter, &viewport);
        }

        let visible = self.state.begin_frame(&self.scene, &viewport, response.hover_pos(), style.pick_radius);
        draw_volcanoes(&painter, &self.scene, &self.state, &visible, style.glyph_size, background);
        if overlay.legend {
            draw_legend(&painter, &legend_entries(&self.scene, &visible), viewport.rect(), background);
        }
        if let Some(hit) = self.state.hovered {
            draw_tooltip(&painter, &self.scene.records[hit.index], hit.pos, screen);
        }

        self.visible_count = visible.len();
        self.last_viewport = Some(viewport);
    }
}

fn load_font(path: &Path) -> Result<egui::FontDefinitions> {
    let bytes = std::fs::read(path).map_err(|e| MapError::io(path, e))?;
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_owned());
    Ok(fonts)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = self.config.map.background_color();

        egui::TopBottomPanel::top("categories")
            .frame(egui::Frame::new().fill(background).inner_margin(6.0))
            .show(ctx, |ui| {
                if let Some(selection) = category_bar(ui, &self.scene.categories, self.state.filter.active) {
                    self.state.filter.select(selection);
                }
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_text(ctx));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_settings, "Settings");
                });
            });
        });

        if self.show_settings {
            let mut open = true;
            egui::Window::new("Settings")
                .open(&mut open)
                .resizable(false)
                .show(ctx, |ui| self.settings_ui(ui));
            self.show_settings = open;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background))
            .show(ctx, |ui| self.show_map(ui));
    }
}
