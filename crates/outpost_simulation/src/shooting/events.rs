//! Projectile lifecycle events (simulation → client / stats)

use bevy::prelude::*;

/// Event: выстрел, пуля заспавнена
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileFired {
    pub projectile: Entity,
    /// Позиция viewpoint в момент выстрела
    pub origin: Vec3,
    /// Unit vector
    pub direction: Vec3,
}

/// Event: пуля вышла за world bound и удалена (ровно один раз на пулю)
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileExpired {
    pub projectile: Entity,
    pub position: Vec3,
}
