//! Property-based тесты инвариантов collision / movement / vertical

use bevy::prelude::*;
use outpost_simulation::physics::{movement_candidate, step_vertical, try_move};
use outpost_simulation::*;
use proptest::prelude::*;

fn arb_obstacle() -> impl Strategy<Value = Obstacle> {
    (-40.0f32..40.0, -40.0f32..40.0, 0.5f32..6.0, 0.5f32..6.0)
        .prop_map(|(x, z, width, depth)| Obstacle::new(x, z, width, 3.0, depth, 0x8B4513))
}

proptest! {
    #[test]
    fn blocked_candidate_leaves_position_unchanged(
        obstacle in arb_obstacle(),
        start in (-50.0f32..50.0, -50.0f32..50.0),
        offset in (-0.99f32..0.99, -0.99f32..0.99),
    ) {
        let margin = 0.5;
        let half = obstacle.expanded_half_extents(margin);
        // Кандидат строго внутри расширенного footprint
        let candidate = Vec3::new(
            obstacle.center.x + offset.0 * half.x,
            2.0,
            obstacle.center.y + offset.1 * half.y,
        );
        let before = Vec3::new(start.0, 2.0, start.1);
        let mut position = before;

        prop_assert!(!try_move(&mut position, candidate, &[obstacle], margin));
        prop_assert_eq!(position, before);
    }

    #[test]
    fn clear_candidate_is_taken(
        obstacle in arb_obstacle(),
        start in (-50.0f32..50.0, -50.0f32..50.0),
        candidate in (-50.0f32..50.0, -50.0f32..50.0),
    ) {
        let margin = 0.5;
        let candidate = Vec3::new(candidate.0, 2.0, candidate.1);
        prop_assume!(!collides(Vec2::new(candidate.x, candidate.z), &[obstacle], margin));

        let mut position = Vec3::new(start.0, 2.0, start.1);
        prop_assert!(try_move(&mut position, candidate, &[obstacle], margin));
        prop_assert_eq!(position, candidate);
    }

    #[test]
    fn step_length_is_speed_or_run_speed(
        yaw in 0.0f32..std::f32::consts::TAU,
        flags in prop::array::uniform5(any::<bool>()),
    ) {
        let rig = PlayerRig { yaw, ..default() };
        let mut input = InputState::default();
        input.forward = flags[0];
        input.backward = flags[1];
        input.left = flags[2];
        input.right = flags[3];
        input.running = flags[4];

        let start = Vec3::new(0.0, 2.0, 15.0);
        match movement_candidate(&rig, &input, start) {
            None => prop_assert_eq!(input.move_axis(), Vec3::ZERO),
            Some(candidate) => {
                let expected = if input.running {
                    rig.speed * rig.run_multiplier
                } else {
                    rig.speed
                };
                prop_assert!(((candidate - start).length() - expected).abs() < 1e-4);
                prop_assert_eq!(candidate.y, start.y);
            }
        }
    }

    #[test]
    fn vertical_never_below_ground(
        start in -10.0f32..20.0,
        jumps in prop::collection::vec(any::<bool>(), 1..300),
    ) {
        let tuning = GameTuning::default();
        let ground = tuning.ground_height;
        let mut y = start;

        for jump in jumps {
            y = step_vertical(y, ground, jump, &tuning);
            prop_assert!(y >= ground, "y = {} < {}", y, ground);
            prop_assert!(y <= ground.max(start) + tuning.jump_rise);
        }
    }
}
