//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - world: статическая геометрия арены (Ground, Obstacle)
//! - player: player rig (позиция через Transform, скорость, yaw/pitch)
//! - projectile: пули (направление фиксируется при выстреле)

pub mod player;
pub mod projectile;
pub mod world;

// Re-exports для удобного импорта
pub use player::*;
pub use projectile::*;
pub use world::*;
