//! Projectile component

use bevy::prelude::*;

/// Пуля: летит по прямой, направление фиксируется при выстреле
///
/// Позиция: Transform.translation. Нет hit detection:
/// пуля живёт пока |x| и |z| в пределах world bound.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Projectile {
    /// Unit vector
    pub direction: Vec3,
}

impl Projectile {
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize_or(Vec3::NEG_Z),
        }
    }

    /// Позиция после одного тика
    pub fn advanced(&self, position: Vec3, speed: f32) -> Vec3 {
        position + self.direction * speed
    }
}

/// true если позиция вышла за границу мира по X или Z
pub fn is_out_of_bounds(position: Vec3, bound: f32) -> bool {
    position.x.abs() > bound || position.z.abs() > bound
}
