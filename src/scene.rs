//! Session data and per-frame render state.
//!
//! `MapScene` is built once from the dataset and never changes. `RenderState`
//! holds the two pieces of mutable state: the category filter, written by
//! the selector bar, and the hovered volcano, recomputed every frame.

use crate::category::{sorted_categories, Category};
use crate::dataset::VolcanoRecord;
use crate::filter::FilterState;
use crate::palette::ColorTable;
use crate::picking::{find_nearest, PickHit, ProjectedEntity};
use crate::projection::{project_pos, Viewport};
use egui::Pos2;

pub struct MapScene {
    pub records: Vec<VolcanoRecord>,
    /// Distinct categories present in the dataset, sorted by label.
    pub categories: Vec<Category>,
    pub colors: ColorTable,
}

impl MapScene {
    pub fn new(records: Vec<VolcanoRecord>) -> Self {
        let seen: Vec<Category> = records.iter().map(VolcanoRecord::category).collect();
        let categories = sorted_categories(&seen);
        let colors = ColorTable::assign(records.iter().map(|r| r.type_key.as_str()));
        log::info!(
            "Scene: {} volcanoes, {} distinct types, {} categories",
            records.len(),
            colors.len(),
            categories.len()
        );
        Self { records, categories, colors }
    }

    /// Filter-passing records in dataset order with their screen positions.
    pub fn visible_entities(&self, filter: &FilterState, viewport: &Viewport) -> Vec<ProjectedEntity> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.passes(r.category()))
            .map(|(index, r)| ProjectedEntity { index, pos: project_pos(r.latitude, r.longitude, viewport) })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    pub filter: FilterState,
    pub hovered: Option<PickHit>,
}

impl RenderState {
    /// Projects the visible set and re-runs the hit test for this frame.
    pub fn begin_frame(
        &mut self,
        scene: &MapScene,
        viewport: &Viewport,
        pointer: Option<Pos2>,
        pick_radius: f32,
    ) -> Vec<ProjectedEntity> {
        let visible = scene.visible_entities(&self.filter, viewport);
        self.hovered = pointer.and_then(|p| find_nearest(p, &visible, pick_radius));
        visible
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.is_some_and(|h| h.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn viewport() -> Viewport {
        Viewport::new(0.0, 0.0, 1000.0, 600.0)
    }

    fn etna() -> VolcanoRecord {
        let mut r = VolcanoRecord::new("Etna", 37.75, 15.0, "Stratovolcano");
        r.last_eruption = "D1".to_string();
        r
    }

    fn scene() -> MapScene {
        MapScene::new(vec![
            etna(),
            VolcanoRecord::new("Aso", 32.88, 131.1, "Caldera"),
            VolcanoRecord::new("Nowhere", f64::NAN, f64::NAN, "Maar"),
            VolcanoRecord::new("Vesuvius", 40.82, 14.43, "stratovolcano"),
        ])
    }

    #[test]
    fn categories_and_colors_cover_the_dataset() {
        let scene = scene();
        assert_eq!(
            scene.categories,
            vec![Category::Calderas, Category::Maars, Category::Stratovolcanoes]
        );
        assert_eq!(scene.colors.len(), 3);
        assert_eq!(scene.colors.color("stratovolcano"), scene.colors.color(&scene.records[3].type_key));
    }

    #[test]
    fn etna_end_to_end() {
        let scene = MapScene::new(vec![etna()]);
        let mut state = RenderState::default();
        assert_eq!(scene.records[0].category(), Category::Stratovolcanoes);

        let visible = state.begin_frame(&scene, &viewport(), None, 20.0);
        assert_eq!(visible.len(), 1);
        let pos = visible[0].pos;
        assert!((pos.x - 541.6667).abs() < 0.01, "{pos:?}");
        assert!((pos.y - 174.1667).abs() < 0.01, "{pos:?}");

        state.begin_frame(&scene, &viewport(), Some(pos), 20.0);
        assert!(state.is_hovered(0));

        state.filter.select(Some(Category::Calderas));
        let visible = state.begin_frame(&scene, &viewport(), Some(pos), 20.0);
        assert!(visible.is_empty());
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn hover_is_recomputed_every_frame() {
        let scene = scene();
        let mut state = RenderState::default();
        let visible = state.begin_frame(&scene, &viewport(), None, 20.0);
        let aso = visible.iter().find(|e| e.index == 1).expect("aso visible").pos;

        state.begin_frame(&scene, &viewport(), Some(aso), 20.0);
        assert!(state.is_hovered(1));

        state.begin_frame(&scene, &viewport(), Some(egui::pos2(-500.0, -500.0)), 20.0);
        assert_eq!(state.hovered, None);

        state.begin_frame(&scene, &viewport(), Some(aso), 20.0);
        state.begin_frame(&scene, &viewport(), None, 20.0);
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn filter_applies_to_rendering_and_picking() {
        let scene = scene();
        let mut state = RenderState::default();
        state.filter.select(Some(Category::Stratovolcanoes));
        let visible = state.begin_frame(&scene, &viewport(), None, 20.0);
        let indices: Vec<usize> = visible.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn unplaced_records_are_never_hovered() {
        let scene = scene();
        let mut state = RenderState::default();
        state.filter.select(Some(Category::Maars));
        let visible = state.begin_frame(&scene, &viewport(), Some(egui::pos2(500.0, 300.0)), 1.0e6);
        assert_eq!(visible.len(), 1);
        assert_eq!(state.hovered, None);
    }
}
