//! Vertical motion: прыжок + падение (не физический интегратор)
//!
//! - Jump на земле: +jump_rise один раз, флаг сбрасывается
//! - Jump в воздухе: игнорируется (флаг всё равно сбрасывается)
//! - Выше земли: -fall_step за тик, clamp к ground_height
//! - На земле или ниже: snap ровно к ground_height

use bevy::prelude::*;

use crate::components::PlayerRig;
use crate::config::GameTuning;
use crate::input::InputState;

/// Новая высота rig после одного тика
pub fn step_vertical(y: f32, ground_height: f32, jump_requested: bool, tuning: &GameTuning) -> f32 {
    if y <= ground_height {
        if jump_requested {
            return ground_height + tuning.jump_rise;
        }
        return ground_height;
    }

    (y - tuning.fall_step).max(ground_height)
}

/// System: jump/gravity для rig
pub fn apply_vertical_motion(
    mut input: ResMut<InputState>,
    tuning: Res<GameTuning>,
    mut rigs: Query<(&PlayerRig, &mut Transform)>,
) {
    let jump_requested = input.take_jump();

    for (rig, mut transform) in rigs.iter_mut() {
        let y = transform.translation.y;
        if jump_requested && !rig.is_grounded(y) {
            crate::log(&format!("Jump ignored: airborne at y={:.2}", y));
        }

        let new_y = step_vertical(y, rig.ground_height, jump_requested, &tuning);
        if new_y != y {
            transform.translation.y = new_y;
        }
    }
}
