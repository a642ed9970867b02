//! Projectile lifecycle systems
//!
//! Порядок в FixedUpdate: advance → cull → fire.
//! Пуля, выпущенная на тике N, стоит в origin до тика N+1,
//! после которого она в origin + direction * speed.

use bevy::prelude::*;

use crate::components::{is_out_of_bounds, PlayerRig, Projectile};
use crate::config::GameTuning;
use crate::input::InputState;
use crate::session::SessionStats;

use super::events::{ProjectileExpired, ProjectileFired};

/// Spawn пули в `origin`, direction нормализуется
pub fn spawn_projectile(
    commands: &mut Commands,
    origin: Vec3,
    direction: Vec3,
) -> (Entity, Projectile) {
    let projectile = Projectile::new(direction);
    let entity = commands
        .spawn((projectile, Transform::from_translation(origin)))
        .id();
    (entity, projectile)
}

/// System: shoot flag → одна пуля из позиции rig по направлению взгляда
pub fn fire_projectiles(
    mut commands: Commands,
    mut input: ResMut<InputState>,
    rigs: Query<(&PlayerRig, &Transform)>,
    mut fired: EventWriter<ProjectileFired>,
    mut stats: ResMut<SessionStats>,
) {
    if !input.take_shoot() {
        return;
    }

    for (rig, transform) in rigs.iter() {
        let origin = transform.translation;
        let (entity, projectile) = spawn_projectile(&mut commands, origin, rig.view_direction());

        fired.write(ProjectileFired {
            projectile: entity,
            origin,
            direction: projectile.direction,
        });
        stats.shots_fired += 1;

        crate::log(&format!(
            "🔫 Projectile {:?} fired from {:?} dir {:?}",
            entity, origin, projectile.direction
        ));
    }
}

/// System: position += direction * projectile_speed
pub fn advance_projectiles(
    tuning: Res<GameTuning>,
    mut projectiles: Query<(&Projectile, &mut Transform)>,
) {
    for (projectile, mut transform) in projectiles.iter_mut() {
        transform.translation = projectile.advanced(transform.translation, tuning.projectile_speed);
    }
}

/// System: удалить пули за пределами world bound (|x| или |z|)
pub fn cull_projectiles(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    projectiles: Query<(Entity, &Transform), With<Projectile>>,
    mut expired: EventWriter<ProjectileExpired>,
    mut stats: ResMut<SessionStats>,
) {
    for (entity, transform) in projectiles.iter() {
        if !is_out_of_bounds(transform.translation, tuning.world_bound) {
            continue;
        }

        commands.entity(entity).despawn();
        expired.write(ProjectileExpired {
            projectile: entity,
            position: transform.translation,
        });
        stats.projectiles_expired += 1;

        crate::log(&format!(
            "🗑️ Projectile {:?} expired at {:?}",
            entity, transform.translation
        ));
    }
}
