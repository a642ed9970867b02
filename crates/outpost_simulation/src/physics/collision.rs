//! Collision check: точка (x, z) против footprint препятствий
//!
//! Footprint = прямоугольная проекция box на землю, расширенная на margin
//! по каждой оси. Строгое неравенство: точка ровно на границе не коллизия.

use bevy::prelude::*;

use crate::components::Obstacle;

/// Пересекает ли точка расширенный footprint одного препятствия
pub fn footprint_overlaps(candidate: Vec2, obstacle: &Obstacle, margin: f32) -> bool {
    let half = obstacle.expanded_half_extents(margin);
    let delta = (candidate - obstacle.center).abs();
    delta.x < half.x && delta.y < half.y
}

/// true если кандидат пересекает footprint хотя бы одного препятствия
///
/// Pure function, O(число препятствий).
pub fn collides<'a>(
    candidate: Vec2,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    margin: f32,
) -> bool {
    obstacles
        .into_iter()
        .any(|obstacle| footprint_overlaps(candidate, obstacle, margin))
}
