use bevy::prelude::*;
use outpost_simulation::logger::{set_log_level, set_logger, LogLevel};
use outpost_simulation::{log_info, log_warning, ConfigError, GameTuning, SimulationPlugin};

mod camera;
mod controls;
mod logger;
mod overlay;
mod rendering;

use camera::CameraPlugin;
use controls::ControlsPlugin;
use overlay::OverlayPlugin;
use rendering::RenderingSyncPlugin;

/// Tuning файл рядом с рабочей директорией (опционален)
const TUNING_PATH: &str = "outpost.ron";

fn main() {
    set_logger(Box::new(logger::BevyLogger));
    set_log_level(LogLevel::Info);

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "OUTPOST".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Tuning до SimulationPlugin (читает tick_hz при build)
        .insert_resource(load_tuning())
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // First-person camera (rig → Camera3d)
        .add_plugins(CameraPlugin)
        // Keyboard / mouse / touch → ControlInput
        .add_plugins(ControlsPlugin)
        // Start screen + mobile controls
        .add_plugins(OverlayPlugin)
        .run();
}

/// Tuning из `outpost.ron`, при любой ошибке: defaults
fn load_tuning() -> GameTuning {
    match GameTuning::load(TUNING_PATH) {
        Ok(tuning) => {
            log_info(&format!("Loaded tuning from {}", TUNING_PATH));
            tuning
        }
        Err(ConfigError::Io { .. }) => GameTuning::default(),
        Err(err) => {
            log_warning(&format!("{}: using default tuning", err));
            GameTuning::default()
        }
    }
}
