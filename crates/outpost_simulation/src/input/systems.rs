//! Input systems (ECS)

use bevy::prelude::*;

use super::events::{ControlInput, LookInput};
use super::state::InputState;

/// Сворачивает ControlInput/LookInput события в InputState
///
/// Работает в PreUpdate (каждый frame), FixedUpdate тик читает результат.
pub fn apply_control_inputs(
    mut controls: EventReader<ControlInput>,
    mut looks: EventReader<LookInput>,
    mut input: ResMut<InputState>,
) {
    for control in controls.read() {
        input.set(control.action, control.pressed);
    }

    for look in looks.read() {
        input.look_delta += look.delta;
    }
}
