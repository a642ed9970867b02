//! Устройства ввода → ControlInput / LookInput
//!
//! Desktop: клавиатура + мышь (pointer lock). Mobile: touch кнопки
//! (overlay.rs). Оба пути пишут одни и те же события, симуляция
//! не знает какое устройство активно.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowFocused};
use outpost_simulation::session::session_playing;
use outpost_simulation::{
    ControlAction, ControlInput, LookInput, PauseSessionIntent, Session,
};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputDevice>()
            .add_systems(
                Update,
                (
                    detect_input_device,
                    (keyboard_controls, mouse_controls, pointer_look, pause_on_escape)
                        .run_if(session_playing),
                    pause_on_focus_lost,
                    sync_cursor_lock,
                ),
            );
    }
}

/// Какое устройство видели последним (touch скрывает pointer lock)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDevice {
    #[default]
    Desktop,
    Touch,
}

/// Keyboard bindings (несколько клавиш на одно действие)
const KEY_BINDINGS: &[(KeyCode, ControlAction)] = &[
    (KeyCode::KeyW, ControlAction::Forward),
    (KeyCode::ArrowUp, ControlAction::Forward),
    (KeyCode::KeyS, ControlAction::Backward),
    (KeyCode::ArrowDown, ControlAction::Backward),
    (KeyCode::KeyA, ControlAction::Left),
    (KeyCode::ArrowLeft, ControlAction::Left),
    (KeyCode::KeyD, ControlAction::Right),
    (KeyCode::ArrowRight, ControlAction::Right),
    (KeyCode::ShiftLeft, ControlAction::Run),
    (KeyCode::ShiftRight, ControlAction::Run),
    (KeyCode::Space, ControlAction::Jump),
];

const MOUSE_BINDINGS: &[(MouseButton, ControlAction)] = &[
    (MouseButton::Left, ControlAction::Shoot),
    (MouseButton::Right, ControlAction::Zoom),
];

/// Держит ли игрок хоть одну клавишу, привязанную к action
fn any_key_held(keys: &ButtonInput<KeyCode>, action: ControlAction) -> bool {
    KEY_BINDINGS
        .iter()
        .any(|(key, bound)| *bound == action && keys.pressed(*key))
}

fn keyboard_controls(keys: Res<ButtonInput<KeyCode>>, mut controls: EventWriter<ControlInput>) {
    for (key, action) in KEY_BINDINGS {
        if keys.just_pressed(*key) {
            controls.write(ControlInput::press(*action));
        } else if keys.just_released(*key) && !action.is_one_shot() {
            // Отпускание засчитывается только если не держим другую клавишу того же action
            if !any_key_held(&keys, *action) {
                controls.write(ControlInput::release(*action));
            }
        }
    }
}

fn mouse_controls(buttons: Res<ButtonInput<MouseButton>>, mut controls: EventWriter<ControlInput>) {
    for (button, action) in MOUSE_BINDINGS {
        if buttons.just_pressed(*button) {
            controls.write(ControlInput::press(*action));
        } else if buttons.just_released(*button) {
            controls.write(ControlInput::release(*action));
        }
    }
}

/// Mouse motion → LookInput (только при pointer lock, т.е. desktop)
fn pointer_look(
    motion: Res<AccumulatedMouseMotion>,
    device: Res<InputDevice>,
    mut looks: EventWriter<LookInput>,
) {
    if *device != InputDevice::Desktop || motion.delta == Vec2::ZERO {
        return;
    }
    looks.write(LookInput {
        delta: motion.delta,
    });
}

fn pause_on_escape(keys: Res<ButtonInput<KeyCode>>, mut pauses: EventWriter<PauseSessionIntent>) {
    if keys.just_pressed(KeyCode::Escape) {
        pauses.write(PauseSessionIntent);
    }
}

/// Потеря фокуса окна = пауза (иначе зажатые клавиши "залипают")
fn pause_on_focus_lost(
    mut focus: EventReader<WindowFocused>,
    session: Res<Session>,
    mut pauses: EventWriter<PauseSessionIntent>,
) {
    let lost = focus.read().any(|event| !event.focused);
    if lost && session.is_playing() {
        pauses.write(PauseSessionIntent);
    }
}

fn detect_input_device(touches: Res<Touches>, mut device: ResMut<InputDevice>) {
    if touches.any_just_pressed() && *device != InputDevice::Touch {
        *device = InputDevice::Touch;
        outpost_simulation::log_info("Touch input detected: switching to mobile controls");
    }
}

/// Pointer lock пока идёт игра на desktop, свободный курсор на start screen
fn sync_cursor_lock(
    session: Res<Session>,
    device: Res<InputDevice>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !session.is_changed() && !device.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    let lock = session.is_playing() && *device == InputDevice::Desktop;
    if lock {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_movement_action_has_a_key() {
        for action in [
            ControlAction::Forward,
            ControlAction::Backward,
            ControlAction::Left,
            ControlAction::Right,
            ControlAction::Run,
            ControlAction::Jump,
        ] {
            assert!(
                KEY_BINDINGS.iter().any(|(_, bound)| *bound == action),
                "{:?} has no key",
                action
            );
        }
    }

    #[test]
    fn test_any_key_held() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowUp);
        assert!(any_key_held(&keys, ControlAction::Forward));
        assert!(!any_key_held(&keys, ControlAction::Backward));
    }
}
