//! Category filter and the selector bar that drives it.

use crate::category::Category;
use eframe::egui;

pub const ALL_LABEL: &str = "All";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// `None` shows every category.
    pub active: Option<Category>,
}

impl FilterState {
    pub fn passes(&self, category: Category) -> bool {
        self.active.is_none_or(|active| active == category)
    }

    pub fn select(&mut self, selection: Option<Category>) {
        self.active = selection;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorEntry {
    pub label: &'static str,
    pub value: Option<Category>,
    pub selected: bool,
}

/// `"All"` followed by `categories` in the given order.
pub fn selector_entries(categories: &[Category], active: Option<Category>) -> Vec<SelectorEntry> {
    std::iter::once(None)
        .chain(categories.iter().copied().map(Some))
        .map(|value| SelectorEntry {
            label: value.map_or(ALL_LABEL, |c| c.label()),
            value,
            selected: value == active,
        })
        .collect()
}

/// Horizontal, scrollable row of category buttons. Returns the clicked entry.
pub fn category_bar(ui: &mut egui::Ui, categories: &[Category], active: Option<Category>) -> Option<Option<Category>> {
    let mut clicked = None;
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for entry in selector_entries(categories, active) {
                let text = egui::RichText::new(entry.label).size(14.0).color(egui::Color32::WHITE);
                if ui.selectable_label(entry.selected, text).clicked() {
                    clicked = Some(entry.value);
                }
            }
        });
    });
    clicked
}
