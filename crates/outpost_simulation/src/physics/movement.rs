//! Movement + look для player rig
//!
//! Движение: флаги WASD → локальный вектор (-Z = вперёд) → normalize
//! (диагональ не быстрее) → × speed (× run_multiplier) → поворот по yaw.
//! Кандидат принимается целиком или отклоняется (нет sliding / частичного шага).

use bevy::prelude::*;

use crate::components::{Obstacle, PlayerRig};
use crate::config::GameTuning;
use crate::input::InputState;
use crate::physics::collision::collides;

/// Кандидат новой позиции (None если движения нет)
///
/// Меняет только x/z, y остаётся как есть.
pub fn movement_candidate(rig: &PlayerRig, input: &InputState, position: Vec3) -> Option<Vec3> {
    let axis = input.move_axis();
    if axis.length_squared() < f32::EPSILON {
        return None;
    }

    let speed = if input.running {
        rig.speed * rig.run_multiplier
    } else {
        rig.speed
    };
    let local = axis.normalize() * speed;
    let world = rig.facing() * local;

    Some(Vec3::new(position.x + world.x, position.y, position.z + world.z))
}

/// Принять кандидат если он не пересекает препятствия
///
/// Возвращает true если позиция изменилась.
pub fn try_move<'a>(
    position: &mut Vec3,
    candidate: Vec3,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    margin: f32,
) -> bool {
    if collides(Vec2::new(candidate.x, candidate.z), obstacles, margin) {
        return false;
    }
    *position = candidate;
    true
}

/// System: движение rig по InputState
pub fn apply_movement_input(
    input: Res<InputState>,
    tuning: Res<GameTuning>,
    obstacles: Query<&Obstacle>,
    mut rigs: Query<(&PlayerRig, &mut Transform)>,
) {
    for (rig, mut transform) in rigs.iter_mut() {
        let Some(candidate) = movement_candidate(rig, &input, transform.translation) else {
            continue;
        };

        let mut position = transform.translation;
        if try_move(&mut position, candidate, obstacles.iter(), tuning.collision_margin) {
            transform.translation = position;
        }
    }
}

/// System: pointer delta → yaw/pitch, Transform.rotation = view rotation
///
/// +x мыши (вправо) → поворот вправо (yaw уменьшается),
/// +y мыши (вниз) → взгляд вниз.
pub fn apply_look_input(
    mut input: ResMut<InputState>,
    tuning: Res<GameTuning>,
    mut rigs: Query<(&mut PlayerRig, &mut Transform)>,
) {
    let delta = input.take_look_delta();
    if delta == Vec2::ZERO {
        return;
    }

    for (mut rig, mut transform) in rigs.iter_mut() {
        rig.rotate(
            -delta.x * tuning.look_sensitivity,
            -delta.y * tuning.look_sensitivity,
        );
        transform.rotation = rig.view_rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ControlAction;

    fn input_with(actions: &[ControlAction]) -> InputState {
        let mut input = InputState::default();
        for action in actions {
            input.press(*action);
        }
        input
    }

    #[test]
    fn test_no_input_no_candidate() {
        let rig = PlayerRig::default();
        assert!(movement_candidate(&rig, &InputState::default(), Vec3::ZERO).is_none());
    }

    #[test]
    fn test_forward_moves_negative_z() {
        let rig = PlayerRig::default();
        let input = input_with(&[ControlAction::Forward]);
        let candidate = movement_candidate(&rig, &input, Vec3::new(0.0, 2.0, 15.0)).unwrap();

        assert!((candidate - Vec3::new(0.0, 2.0, 15.0 - rig.speed)).length() < 1e-6);
    }

    #[test]
    fn test_running_multiplies_step() {
        let rig = PlayerRig::default();
        let input = input_with(&[ControlAction::Right, ControlAction::Run]);
        let candidate = movement_candidate(&rig, &input, Vec3::ZERO).unwrap();

        assert!((candidate.x - rig.speed * rig.run_multiplier).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let rig = PlayerRig::default();
        let input = input_with(&[ControlAction::Forward, ControlAction::Left]);
        let candidate = movement_candidate(&rig, &input, Vec3::ZERO).unwrap();

        assert!((candidate.length() - rig.speed).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_rotates_displacement() {
        // yaw = π/2: вперёд = -X
        let rig = PlayerRig {
            yaw: std::f32::consts::FRAC_PI_2,
            ..default()
        };
        let input = input_with(&[ControlAction::Forward]);
        let candidate = movement_candidate(&rig, &input, Vec3::ZERO).unwrap();

        assert!((candidate.x + rig.speed).abs() < 1e-5, "candidate = {:?}", candidate);
        assert!(candidate.z.abs() < 1e-5, "candidate = {:?}", candidate);
    }

    #[test]
    fn test_try_move_rejects_collision() {
        let obstacle = Obstacle::new(10.0, 10.0, 3.0, 4.0, 3.0, 0x8B4513);
        let mut position = Vec3::new(13.0, 2.0, 10.0);

        let moved = try_move(&mut position, Vec3::new(10.4, 2.0, 10.4), &[obstacle], 0.5);

        assert!(!moved);
        assert_eq!(position, Vec3::new(13.0, 2.0, 10.0));
    }

    #[test]
    fn test_try_move_accepts_clear_candidate() {
        let obstacle = Obstacle::new(10.0, 10.0, 3.0, 4.0, 3.0, 0x8B4513);
        let mut position = Vec3::new(19.7, 2.0, 20.0);

        let moved = try_move(&mut position, Vec3::new(20.0, 2.0, 20.0), &[obstacle], 0.5);

        assert!(moved);
        assert_eq!(position, Vec3::new(20.0, 2.0, 20.0));
    }
}
