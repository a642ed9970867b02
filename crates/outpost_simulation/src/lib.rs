//! OUTPOST Simulation Core
//!
//! Headless ECS-симуляция FPS прототипа на Bevy 0.16.
//! Рендер, окно и устройства ввода: в `outpost_client`.
//!
//! Один тик (FixedUpdate, 60Hz по умолчанию), строго последовательно:
//! look → movement → vertical → scope → advance → cull → fire → stats.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod arena;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod physics;
pub mod session;
pub mod shooting;

// Re-export базовых типов для удобства
pub use arena::{spawn_arena, spawn_player, ArenaLayout};
pub use components::*;
pub use config::{ConfigError, GameTuning};
pub use input::{ControlAction, ControlInput, InputState, LookInput};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::collides;
pub use session::{
    PauseSessionIntent, Session, SessionPhase, SessionStats, StartSessionIntent,
};
pub use shooting::{ProjectileExpired, ProjectileFired, Scope};

/// Главный plugin симуляции
///
/// Если `GameTuning` / `ArenaLayout` уже вставлены в App до plugin -
/// используются они, иначе defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let tick_hz = app
            .world()
            .get_resource::<GameTuning>()
            .map(|tuning| tuning.tick_hz)
            .unwrap_or(GameTuning::default().tick_hz);

        if !app.world().contains_resource::<DeterministicRng>() {
            // Детерминистичный RNG (seed по умолчанию)
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .init_resource::<GameTuning>()
            .init_resource::<ArenaLayout>()
            .init_resource::<InputState>()
            .init_resource::<Session>()
            .init_resource::<SessionStats>()
            .add_event::<ControlInput>()
            .add_event::<LookInput>()
            .add_event::<StartSessionIntent>()
            .add_event::<PauseSessionIntent>()
            .add_event::<ProjectileFired>()
            .add_event::<ProjectileExpired>()
            .add_systems(Startup, arena::setup_arena)
            // Input folding каждый frame (до FixedUpdate)
            .add_systems(
                PreUpdate,
                (
                    input::apply_control_inputs,
                    session::handle_session_intents,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    // Фаза 1: ориентация и перемещение rig
                    physics::apply_look_input,
                    physics::apply_movement_input,
                    physics::apply_vertical_motion,
                    shooting::update_scope,
                    // Фаза 2: пули (новая пуля двигается со следующего тика)
                    shooting::advance_projectiles,
                    shooting::cull_projectiles,
                    shooting::fire_projectiles,
                    // Фаза 3: bookkeeping
                    session::count_tick,
                )
                    .chain() // Последовательное выполнение
                    .run_if(session::session_playing),
            );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (без SimulationPlugin)
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Headless App с SimulationPlugin: арена заспавнена, сессия в Playing
///
/// Тики гонятся вручную через `run_ticks` (не зависят от wall clock).
pub fn create_simulation_app(seed: u64, tuning: GameTuning, layout: ArenaLayout) -> App {
    let mut app = create_headless_app(seed);
    app.insert_resource(tuning)
        .insert_resource(layout)
        .add_plugins(SimulationPlugin);

    // Первый update: Startup (spawn арены), FixedUpdate ещё не накопил время
    app.update();
    session::start_session(&mut app.world_mut().resource_mut::<Session>());

    app
}

/// Прогнать N simulation тиков напрямую через FixedUpdate schedule
pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T, Option<&Transform>)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component, transform) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
        if let Some(transform) = transform {
            snapshot.extend_from_slice(format!("{:?}", transform.translation).as_bytes());
        }
    }

    snapshot
}
