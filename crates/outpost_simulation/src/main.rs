//! Headless симуляция OUTPOST
//!
//! Запускает Bevy App без рендера: случайный (seeded) ввод на каждом тике,
//! проверка инвариантов rig. Usage: `outpost_simulation [seed] [ticks] [tuning.ron]`

use bevy::prelude::*;
use rand::Rng;

use outpost_simulation::{
    create_simulation_app, init_logger, log_error, log_info, run_ticks, ArenaLayout,
    ControlAction, DeterministicRng, GameTuning, InputState, PlayerRig, SessionStats,
};

fn main() {
    init_logger();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let ticks: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);

    let tuning = match args.next() {
        Some(path) => match GameTuning::load_logged(&path) {
            Ok(tuning) => tuning,
            Err(_) => std::process::exit(1),
        },
        None => GameTuning::default(),
    };

    log_info(&format!(
        "Starting OUTPOST headless simulation (seed: {}, ticks: {})",
        seed, ticks
    ));

    let mut app = create_simulation_app(seed, tuning, ArenaLayout::default());

    for tick in 0..ticks {
        drive_random_input(app.world_mut());
        run_ticks(&mut app, 1);

        if tick % 100 == 0 {
            report(app.world_mut(), tick);
        }
    }

    let stats = *app.world().resource::<SessionStats>();
    log_info(&format!(
        "Simulation complete! ticks={} fired={} expired={} live={}",
        stats.ticks,
        stats.shots_fired,
        stats.projectiles_expired,
        stats.live_projectiles()
    ));
}

/// Случайные флаги ввода (вместо устройства), seeded через DeterministicRng
fn drive_random_input(world: &mut World) {
    let mut presses = Vec::new();
    let look;
    {
        let mut rng = world.resource_mut::<DeterministicRng>();
        for action in ControlAction::ALL {
            let chance = if action.is_one_shot() { 0.05 } else { 0.5 };
            presses.push((action, rng.rng.gen_bool(chance)));
        }
        look = Vec2::new(rng.rng.gen_range(-20.0..20.0), rng.rng.gen_range(-5.0..5.0));
    }

    let mut input = world.resource_mut::<InputState>();
    for (action, pressed) in presses {
        input.set(action, pressed);
    }
    input.look_delta += look;
}

fn report(world: &mut World, tick: usize) {
    let mut rigs = world.query::<(&PlayerRig, &Transform)>();
    for (rig, transform) in rigs.iter(world) {
        if transform.translation.y < rig.ground_height {
            log_error(&format!(
                "Tick {}: rig below ground ({} < {})",
                tick, transform.translation.y, rig.ground_height
            ));
        }
        log_info(&format!(
            "Tick {}: rig at {:?} yaw {:.2}",
            tick, transform.translation, rig.yaw
        ));
    }

    let stats = world.resource::<SessionStats>();
    log_info(&format!(
        "Tick {}: {} live projectiles",
        tick,
        stats.live_projectiles()
    ));
}
