//! InputState: контракт булевых флагов между устройствами ввода и тиком

use bevy::prelude::*;

/// Логическое действие игрока (не зависит от устройства)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ControlAction {
    Forward,
    Backward,
    Left,
    Right,
    Run,
    Jump,
    Zoom,
    Shoot,
}

impl ControlAction {
    pub const ALL: [ControlAction; 8] = [
        ControlAction::Forward,
        ControlAction::Backward,
        ControlAction::Left,
        ControlAction::Right,
        ControlAction::Run,
        ControlAction::Jump,
        ControlAction::Zoom,
        ControlAction::Shoot,
    ];

    /// One-shot действия: latch на press, сбрасываются только тиком
    pub fn is_one_shot(&self) -> bool {
        matches!(self, ControlAction::Jump | ControlAction::Shoot)
    }
}

/// Флаги ввода, читаются один раз за тик
///
/// - Held флаги (движение, run, zoom) следуют press/release.
/// - Jump/Shoot: latch: нажатие между тиками не теряется,
///   отпускание до тика не отменяет запрос.
#[derive(Resource, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub running: bool,
    pub jumping: bool,
    pub zoom: bool,
    pub shoot: bool,
    /// Накопленный pointer delta с прошлого тика
    pub look_delta: Vec2,
}

impl InputState {
    pub fn set(&mut self, action: ControlAction, pressed: bool) {
        if action.is_one_shot() && !pressed {
            return;
        }
        *self.flag_mut(action) = pressed;
    }

    pub fn press(&mut self, action: ControlAction) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: ControlAction) {
        self.set(action, false);
    }

    pub fn is_active(&self, action: ControlAction) -> bool {
        match action {
            ControlAction::Forward => self.forward,
            ControlAction::Backward => self.backward,
            ControlAction::Left => self.left,
            ControlAction::Right => self.right,
            ControlAction::Run => self.running,
            ControlAction::Jump => self.jumping,
            ControlAction::Zoom => self.zoom,
            ControlAction::Shoot => self.shoot,
        }
    }

    /// Забрать jump запрос (true максимум один раз на нажатие)
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jumping)
    }

    pub fn take_shoot(&mut self) -> bool {
        std::mem::take(&mut self.shoot)
    }

    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Локальное направление движения (x: вправо, z: назад), не нормализовано
    pub fn move_axis(&self) -> Vec3 {
        let x = self.right as i32 - self.left as i32;
        let z = self.backward as i32 - self.forward as i32;
        Vec3::new(x as f32, 0.0, z as f32)
    }

    /// Сбросить всё (потеря фокуса, пауза)
    pub fn clear_held(&mut self) {
        *self = Self::default();
    }

    fn flag_mut(&mut self, action: ControlAction) -> &mut bool {
        match action {
            ControlAction::Forward => &mut self.forward,
            ControlAction::Backward => &mut self.backward,
            ControlAction::Left => &mut self.left,
            ControlAction::Right => &mut self.right,
            ControlAction::Run => &mut self.running,
            ControlAction::Jump => &mut self.jumping,
            ControlAction::Zoom => &mut self.zoom,
            ControlAction::Shoot => &mut self.shoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_false() {
        let input = InputState::default();
        for action in ControlAction::ALL {
            assert!(!input.is_active(action), "{:?} should default to false", action);
        }
    }

    #[test]
    fn test_held_flag_follows_release() {
        let mut input = InputState::default();
        input.press(ControlAction::Forward);
        assert!(input.forward);
        input.release(ControlAction::Forward);
        assert!(!input.forward);
    }

    #[test]
    fn test_one_shot_survives_release() {
        let mut input = InputState::default();
        input.press(ControlAction::Shoot);
        input.release(ControlAction::Shoot);
        assert!(input.take_shoot());
        assert!(!input.take_shoot());
    }

    #[test]
    fn test_move_axis_cancels_opposites() {
        let mut input = InputState::default();
        input.press(ControlAction::Forward);
        input.press(ControlAction::Backward);
        input.press(ControlAction::Right);
        assert_eq!(input.move_axis(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_forward_is_negative_z() {
        let mut input = InputState::default();
        input.press(ControlAction::Forward);
        assert_eq!(input.move_axis(), Vec3::NEG_Z);
    }
}
