//! Tuning параметры геймплея (скорости, шаги, границы мира)
//!
//! Все значения: per-tick (FixedUpdate 60Hz), не per-second:
//! движение и падение фиксированным шагом за тик.
//!
//! Загружается из RON файла (клиент: `outpost.ron` рядом с бинарником),
//! отсутствующие поля берутся из `Default`.

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Ошибки загрузки tuning файла
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    /// Шаг движения за тик
    pub player_speed: f32,
    /// Множитель шага при беге (Shift / run button)
    pub run_multiplier: f32,
    /// Высота глаз над землёй; rig никогда не опускается ниже
    pub ground_height: f32,
    /// Стартовая позиция rig (x, y, z)
    pub spawn_position: [f32; 3],
    /// Одноразовый подъём при прыжке
    pub jump_rise: f32,
    /// Линейное падение за тик
    pub fall_step: f32,
    /// Смещение пули за тик
    pub projectile_speed: f32,
    /// Пуля удаляется когда |x| или |z| больше этого значения
    pub world_bound: f32,
    /// Расширение footprint препятствия по каждой оси
    pub collision_margin: f32,
    /// Радиан на пиксель движения мыши
    pub look_sensitivity: f32,
    /// FOV без прицела (градусы)
    pub base_fov_degrees: f32,
    /// FOV в прицеле (градусы)
    pub zoom_fov_degrees: f32,
    /// Длительность входа/выхода из прицела (тики)
    pub scope_transition_ticks: u32,
    pub tick_hz: f64,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            player_speed: 0.3,
            run_multiplier: 2.0,
            ground_height: 2.0,
            spawn_position: [0.0, 2.0, 15.0],
            jump_rise: 1.2,
            fall_step: 0.05,
            projectile_speed: 0.5,
            world_bound: 50.0,
            collision_margin: 0.5,
            look_sensitivity: 0.002,
            base_fov_degrees: 75.0,
            zoom_fov_degrees: 30.0,
            scope_transition_ticks: 18,
            tick_hz: 60.0,
        }
    }
}

impl GameTuning {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let tuning: GameTuning = ron::from_str(source)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// `load` + запись ошибки в logger (headless binary и клиент)
    pub fn load_logged(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(path).map_err(|err| {
            crate::log_error(&format!("Tuning not loaded: {}", err));
            err
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("run_multiplier", self.run_multiplier),
            ("jump_rise", self.jump_rise),
            ("fall_step", self.fall_step),
            ("projectile_speed", self.projectile_speed),
            ("world_bound", self.world_bound),
            ("look_sensitivity", self.look_sensitivity),
            ("zoom_fov_degrees", self.zoom_fov_degrees),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        let finite = [
            ("ground_height", self.ground_height),
            ("spawn_position", self.spawn_position[0]),
            ("spawn_position", self.spawn_position[1]),
            ("spawn_position", self.spawn_position[2]),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite number",
                });
            }
        }

        if !(self.collision_margin >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "collision_margin",
                reason: "must be zero or positive",
            });
        }
        if !(self.base_fov_degrees < 180.0) || !(self.zoom_fov_degrees < self.base_fov_degrees) {
            return Err(ConfigError::Invalid {
                field: "zoom_fov_degrees",
                reason: "must be below base_fov_degrees (which must be below 180)",
            });
        }
        if self.scope_transition_ticks == 0 {
            return Err(ConfigError::Invalid {
                field: "scope_transition_ticks",
                reason: "must be at least one tick",
            });
        }
        if !(self.tick_hz > 0.0) {
            return Err(ConfigError::Invalid {
                field: "tick_hz",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameTuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let tuning = GameTuning::from_ron_str("(player_speed: 0.5, world_bound: 80.0)")
            .expect("partial tuning parses");

        assert_eq!(tuning.player_speed, 0.5);
        assert_eq!(tuning.world_bound, 80.0);
        assert_eq!(tuning.fall_step, GameTuning::default().fall_step);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = GameTuning::from_ron_str("(projectile_speed: 0.0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "projectile_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zoom_wider_than_base() {
        let err = GameTuning::from_ron_str("(base_fov_degrees: 60.0, zoom_fov_degrees: 90.0)")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "zoom_fov_degrees", .. }));
    }

    #[test]
    fn test_rejects_nan_margin() {
        let err = GameTuning::from_ron_str("(collision_margin: NaN)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "collision_margin",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nan_fov() {
        let err = GameTuning::from_ron_str("(base_fov_degrees: NaN)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "zoom_fov_degrees", .. }));

        let err = GameTuning::from_ron_str("(zoom_fov_degrees: NaN)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "zoom_fov_degrees", .. }));
    }

    #[test]
    fn test_rejects_non_finite_spawn() {
        let err = GameTuning::from_ron_str("(spawn_position: (0.0, NaN, 15.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "spawn_position", .. }));

        let err = GameTuning::from_ron_str("(ground_height: NaN)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ground_height", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = GameTuning::from_ron_str("(player_speed: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameTuning::load("definitely/not/here/outpost.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
