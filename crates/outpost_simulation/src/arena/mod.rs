//! Arena: земля + фиксированный набор box препятствий + player rig
//!
//! Spawn один раз в Startup. Obstacles после этого не трогаются.

use bevy::prelude::*;

use crate::components::{Ground, Obstacle, PlayerRig};
use crate::config::GameTuning;

/// Layout арены (resource, можно подменить до Startup)
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ArenaLayout {
    /// Сторона квадрата земли
    pub ground_size: f32,
    pub obstacles: Vec<Obstacle>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            ground_size: 100.0,
            obstacles: vec![
                Obstacle::new(10.0, 10.0, 3.0, 4.0, 3.0, 0x8B4513),
                Obstacle::new(-15.0, 5.0, 3.0, 4.0, 3.0, 0xA0522D),
                Obstacle::new(0.0, -20.0, 5.0, 5.0, 5.0, 0x654321),
                Obstacle::new(-25.0, -15.0, 4.0, 3.0, 2.0, 0x8B4513),
                Obstacle::new(20.0, -10.0, 3.0, 3.0, 3.0, 0xA0522D),
            ],
        }
    }
}

impl ArenaLayout {
    /// Пустая арена (только земля): для тестов движения
    pub fn empty() -> Self {
        Self {
            obstacles: Vec::new(),
            ..default()
        }
    }
}

/// Spawn земли и препятствий
pub fn spawn_arena(commands: &mut Commands, layout: &ArenaLayout) {
    commands.spawn((
        Ground {
            size: layout.ground_size,
        },
        Transform::IDENTITY,
    ));

    for obstacle in &layout.obstacles {
        commands.spawn((*obstacle, Transform::from_translation(obstacle.translation())));
    }

    crate::log_info(&format!(
        "Arena spawned: ground {}x{}, {} obstacles",
        layout.ground_size,
        layout.ground_size,
        layout.obstacles.len()
    ));
}

/// Spawn player rig в стартовой позиции (y не ниже ground_height)
pub fn spawn_player(commands: &mut Commands, tuning: &GameTuning) -> Entity {
    let rig = PlayerRig::from_tuning(tuning);
    let mut position = tuning.spawn_position();
    position.y = position.y.max(rig.ground_height);

    commands
        .spawn((rig, Transform::from_translation(position)))
        .id()
}

/// Startup system: арена + rig
pub fn setup_arena(mut commands: Commands, layout: Res<ArenaLayout>, tuning: Res<GameTuning>) {
    spawn_arena(&mut commands, &layout);
    let player = spawn_player(&mut commands, &tuning);
    crate::log(&format!("Player rig spawned: {:?}", player));
}
