use bevy::prelude::*;
use bevy::window::WindowResized;
use outpost_simulation::{GameTuning, PlayerRig, Scope};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, (follow_player_rig, log_window_resize));
    }
}

/// Рендер-камера, следует за PlayerRig (rig != камера)
#[derive(Component)]
pub struct FirstPersonCamera;

fn spawn_camera(mut commands: Commands, tuning: Res<GameTuning>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: tuning.base_fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(tuning.spawn_position()),
        FirstPersonCamera,
    ));
}

/// Позиция/ориентация rig → камера, Scope → FOV
///
/// Rig обновляется в FixedUpdate (до Update), поэтому камера видит
/// состояние последнего тика.
fn follow_player_rig(
    tuning: Res<GameTuning>,
    rigs: Query<(&PlayerRig, &Transform, &Scope), Without<FirstPersonCamera>>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<FirstPersonCamera>>,
) {
    let Ok((rig, rig_transform, scope)) = rigs.single() else {
        return;
    };
    let Ok((mut camera_transform, mut projection)) = cameras.single_mut() else {
        return;
    };

    camera_transform.translation = rig_transform.translation;
    camera_transform.rotation = rig.view_rotation();

    if let Projection::Perspective(perspective) = projection.as_mut() {
        let fov = scope.field_of_view(&tuning);
        if perspective.fov != fov {
            perspective.fov = fov;
        }
    }
}

/// Aspect ratio камеры Bevy пересчитывает сам, здесь только лог
fn log_window_resize(mut resized: EventReader<WindowResized>) {
    for event in resized.read() {
        outpost_simulation::log(&format!(
            "Window resized: {}x{}",
            event.width, event.height
        ));
    }
}
