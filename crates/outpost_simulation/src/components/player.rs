//! Player rig: управляемая игроком точка обзора
//!
//! Rig отделён от рендер-камеры: клиент копирует позицию/ориентацию rig
//! в Camera3d каждый frame. Single-player: ровно один rig на сессию.

use bevy::prelude::*;

use crate::config::GameTuning;
use crate::shooting::Scope;

/// Максимальный |pitch| (чуть меньше π/2, чтобы не перевернуть камеру)
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

/// Player rig
///
/// Позиция: Transform.translation (y = уровень глаз).
/// Инвариант: translation.y >= ground_height после любого тика.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform, Scope)]
pub struct PlayerRig {
    /// Шаг движения за тик
    pub speed: f32,
    pub run_multiplier: f32,
    /// Уровень глаз стоя на земле
    pub ground_height: f32,
    /// Горизонтальный поворот (радианы, 0 = смотрим в -Z)
    pub yaw: f32,
    /// Вертикальный поворот (радианы, clamp ±PITCH_LIMIT)
    pub pitch: f32,
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self::from_tuning(&GameTuning::default())
    }
}

impl PlayerRig {
    pub fn from_tuning(tuning: &GameTuning) -> Self {
        Self {
            speed: tuning.player_speed,
            run_multiplier: tuning.run_multiplier,
            ground_height: tuning.ground_height,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Поворот только по yaw (для движения по плоскости земли)
    pub fn facing(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Полная ориентация взгляда (yaw, затем pitch)
    pub fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit vector взгляда
    pub fn view_direction(&self) -> Vec3 {
        self.view_rotation() * Vec3::NEG_Z
    }

    pub fn is_grounded(&self, y: f32) -> bool {
        y <= self.ground_height
    }

    /// Применить mouse delta (радианы уже умножены на sensitivity)
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_faces_negative_z() {
        let rig = PlayerRig::default();
        let dir = rig.view_direction();
        assert!((dir - Vec3::NEG_Z).length() < 1e-6, "dir = {:?}", dir);
    }

    #[test]
    fn test_quarter_turn_faces_negative_x() {
        let rig = PlayerRig {
            yaw: std::f32::consts::FRAC_PI_2,
            ..default()
        };
        let dir = rig.facing() * Vec3::NEG_Z;
        assert!((dir - Vec3::NEG_X).length() < 1e-5, "dir = {:?}", dir);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut rig = PlayerRig::default();
        rig.rotate(0.0, 10.0);
        assert_eq!(rig.pitch, PITCH_LIMIT);
        rig.rotate(0.0, -20.0);
        assert_eq!(rig.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_pitch_up_looks_up() {
        let rig = PlayerRig {
            pitch: 0.5,
            ..default()
        };
        assert!(rig.view_direction().y > 0.0);
    }

    #[test]
    fn test_grounded() {
        let rig = PlayerRig::default();
        assert!(rig.is_grounded(rig.ground_height));
        assert!(!rig.is_grounded(rig.ground_height + 0.01));
    }
}
