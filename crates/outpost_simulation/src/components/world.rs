//! Статическая геометрия арены: Ground, Obstacle

use bevy::prelude::*;

/// Плоскость земли (квадрат со стороной `size`, центр в origin)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Ground {
    pub size: f32,
}

/// Box препятствие
///
/// Создаётся один раз при spawn арены, никогда не мутируется и не удаляется.
/// Transform entity дублирует `center` (x, height/2, z) для рендера;
/// коллизия читает только этот компонент.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Obstacle {
    /// Центр footprint на плоскости земли (x, z)
    pub center: Vec2,
    /// Полный размер по X
    pub width: f32,
    /// Полный размер по Z
    pub depth: f32,
    pub height: f32,
    /// sRGB цвет 0xRRGGBB
    pub color: u32,
}

impl Obstacle {
    pub fn new(x: f32, z: f32, width: f32, height: f32, depth: f32, color: u32) -> Self {
        Self {
            center: Vec2::new(x, z),
            width,
            depth,
            height,
            color,
        }
    }

    /// Половины размеров footprint, расширенные на margin
    pub fn expanded_half_extents(&self, margin: f32) -> Vec2 {
        Vec2::new(self.width * 0.5 + margin, self.depth * 0.5 + margin)
    }

    /// World-space центр box (для Transform)
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.center.x, self.height * 0.5, self.center.y)
    }
}
