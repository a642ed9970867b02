//! Physics (упрощённая, без физ. движка)
//!
//! - collision: AABB footprint препятствий на плоскости земли
//! - movement: WASD + yaw → кандидат позиции, reject при коллизии (без sliding)
//! - vertical: одноразовый прыжок + линейное падение, clamp к ground height
//!
//! Все шаги фиксированные per-tick (FixedUpdate), Time::delta не используется.

pub mod collision;
pub mod movement;
pub mod vertical;

// Re-export основных типов
pub use collision::{collides, footprint_overlaps};
pub use movement::{apply_look_input, apply_movement_input, movement_candidate, try_move};
pub use vertical::{apply_vertical_motion, step_vertical};
