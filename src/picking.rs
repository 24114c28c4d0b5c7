//! Pointer picking over projected volcanoes.

use egui::Pos2;

/// Screen position of one visible record, by index into the dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedEntity {
    pub index: usize,
    pub pos: Pos2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub index: usize,
    pub pos: Pos2,
    pub distance: f32,
}

/// Nearest entity strictly within `pick_radius` of `pointer`.
///
/// Ordering contract:
/// - A candidate replaces the current best only when strictly closer, so on
///   an exact tie the entity that comes first in iteration order wins.
/// - Entities with non-finite positions never match.
pub fn find_nearest<'a, I>(pointer: Pos2, entities: I, pick_radius: f32) -> Option<PickHit>
where
    I: IntoIterator<Item = &'a ProjectedEntity>,
{
    let mut best: Option<PickHit> = None;
    let mut best_dist = f32::INFINITY;
    for entity in entities {
        let d = pointer.distance(entity.pos);
        if d < pick_radius && d < best_dist {
            best_dist = d;
            best = Some(PickHit { index: entity.index, pos: entity.pos, distance: d });
        }
    }
    best
}
