//! Settings window for overlay toggles and map styling.

use crate::app::App;
use crate::projection::{MAX_GRATICULE_STEP, MIN_GRATICULE_STEP};
use eframe::egui;

impl App {
    pub(crate) fn settings_ui(&mut self, ui: &mut egui::Ui) {
        let overlay = &mut self.config.overlay;
        ui.label(egui::RichText::new("Overlays").strong());
        ui.checkbox(&mut overlay.graticule, "Graticule");
        ui.checkbox(&mut overlay.coastlines, "Coastlines");
        ui.checkbox(&mut overlay.borders, "Borders");
        ui.checkbox(&mut overlay.cities, "Cities");
        ui.checkbox(&mut overlay.legend, "Legend");

        if self.base_map.coastlines.is_empty() && self.base_map.borders.is_empty() {
            ui.label(egui::RichText::new("No base map files found.").weak());
        }

        ui.separator();
        ui.label(egui::RichText::new("Markers").strong());
        let style = &mut self.config.map;
        ui.horizontal(|ui| {
            ui.label("Glyph size:");
            ui.add(egui::DragValue::new(&mut style.glyph_size).range(4.0..=60.0).speed(0.5).suffix(" px"));
        });
        ui.horizontal(|ui| {
            ui.label("Pick radius:");
            ui.add(egui::DragValue::new(&mut style.pick_radius).range(1.0..=80.0).speed(0.5).suffix(" px"));
        });
        ui.horizontal(|ui| {
            ui.label("Graticule step:");
            ui.add(egui::DragValue::new(&mut style.graticule_step).range(MIN_GRATICULE_STEP..=MAX_GRATICULE_STEP).speed(1.0).suffix("°"));
        });
    }
}
