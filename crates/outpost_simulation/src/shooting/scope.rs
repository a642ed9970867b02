//! Scope (zoom): прицеливание через сужение FOV
//!
//! Zoom flag держится → progress растёт к 1.0 за `scope_transition_ticks`,
//! отпущен → падает к 0.0. FOV = lerp(base, zoom, ease_out_cubic(progress)).
//! Клиент читает `field_of_view` и пишет в PerspectiveProjection.

use bevy::prelude::*;

use crate::config::GameTuning;
use crate::input::InputState;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Scope {
    /// Zoom flag на последнем тике
    pub zoomed: bool,
    /// 0.0 = без прицела, 1.0 = полностью в прицеле
    pub progress: f32,
}

impl Scope {
    /// Один тик перехода
    pub fn step(&mut self, zoom_held: bool, transition_ticks: u32) {
        self.zoomed = zoom_held;
        let step = 1.0 / transition_ticks.max(1) as f32;
        let target = if zoom_held { 1.0 } else { 0.0 };
        let remaining = target - self.progress;

        // последний шаг snap'ается в target (накопленная ошибка float)
        self.progress = if remaining.abs() <= step * 1.01 {
            target
        } else {
            self.progress + step.copysign(remaining)
        };
    }

    pub fn is_fully_zoomed(&self) -> bool {
        self.progress >= 1.0
    }

    /// Вертикальный FOV в радианах
    pub fn field_of_view(&self, tuning: &GameTuning) -> f32 {
        let t = ease_out_cubic(self.progress);
        let degrees =
            tuning.base_fov_degrees + (tuning.zoom_fov_degrees - tuning.base_fov_degrees) * t;
        degrees.to_radians()
    }
}

/// Helper: Ease-out cubic curve
///
/// Smooth deceleration: fast start, slow finish
/// - t=0.0 → 0.0
/// - t=0.5 → 0.875
/// - t=1.0 → 1.0
///
/// Formula: (t-1)³ + 1
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// System: zoom flag → Scope progress
pub fn update_scope(
    input: Res<InputState>,
    tuning: Res<GameTuning>,
    mut scopes: Query<&mut Scope>,
) {
    for mut scope in scopes.iter_mut() {
        scope.step(input.zoom, tuning.scope_transition_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);

        // Mid-point should be close to 0.875
        let mid = ease_out_cubic(0.5);
        assert!(mid > 0.8 && mid < 0.9);
    }

    #[test]
    fn test_scope_reaches_full_zoom() {
        let tuning = GameTuning::default();
        let mut scope = Scope::default();

        for _ in 0..tuning.scope_transition_ticks {
            scope.step(true, tuning.scope_transition_ticks);
        }

        assert!(scope.is_fully_zoomed());
        let fov = scope.field_of_view(&tuning);
        assert!((fov - tuning.zoom_fov_degrees.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_scope_release_returns_to_base() {
        let tuning = GameTuning::default();
        let mut scope = Scope {
            zoomed: true,
            progress: 1.0,
        };

        for _ in 0..tuning.scope_transition_ticks {
            scope.step(false, tuning.scope_transition_ticks);
        }

        assert_eq!(scope.progress, 0.0);
        assert!(!scope.zoomed);
        let fov = scope.field_of_view(&tuning);
        assert!((fov - tuning.base_fov_degrees.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_fov_narrows_monotonically() {
        let tuning = GameTuning::default();
        let mut scope = Scope::default();
        let mut last = scope.field_of_view(&tuning);

        for _ in 0..tuning.scope_transition_ticks {
            scope.step(true, tuning.scope_transition_ticks);
            let fov = scope.field_of_view(&tuning);
            assert!(fov <= last);
            last = fov;
        }
    }
}
