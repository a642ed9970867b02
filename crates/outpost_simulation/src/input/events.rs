//! Input events (device → simulation)

use bevy::prelude::{Event, Vec2};

use super::state::ControlAction;

/// Нажатие или отпускание control (клавиша, кнопка мыши, touch button)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlInput {
    pub action: ControlAction,
    pub pressed: bool,
}

impl ControlInput {
    pub fn press(action: ControlAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn release(action: ControlAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

/// Движение указателя при pointer lock (пиксели, +x вправо, +y вниз)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LookInput {
    pub delta: Vec2,
}
