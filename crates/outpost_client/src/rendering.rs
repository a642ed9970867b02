use bevy::prelude::*;
use outpost_simulation::{Ground, Obstacle, Projectile};

/// Цвет неба (sky blue)
const SKY_COLOR: u32 = 0x87CEEB;
const GROUND_COLOR: u32 = 0x556B2F;
const PROJECTILE_RADIUS: f32 = 0.1;

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(hex_color(SKY_COLOR)))
            .add_systems(Startup, setup_lights)
            .add_systems(
                Update,
                (
                    spawn_ground_visual,
                    spawn_obstacle_visuals,
                    spawn_projectile_visuals,
                ),
            );
    }
}

/// Общие handles для всех пуль (одна mesh + один material)
#[derive(Resource)]
pub struct ProjectileVisuals {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

fn setup_lights(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Directional light (sun) в (10, 20, 10), светит в origin
    commands.spawn((
        DirectionalLight {
            illuminance: 7000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        affects_lightmapped_meshes: false,
    });

    commands.insert_resource(ProjectileVisuals {
        mesh: meshes.add(Sphere::new(PROJECTILE_RADIUS).mesh().uv(8, 8)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 0.0),
            emissive: LinearRgba::rgb(2.0, 2.0, 0.0),
            ..default()
        }),
    });
}

/// Ground plane (size x size, центр в origin)
fn spawn_ground_visual(
    mut commands: Commands,
    query: Query<(Entity, &Ground), Added<Ground>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, ground) in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(ground.size * 0.5)))),
            MeshMaterial3d(materials.add(hex_color(GROUND_COLOR))),
        ));
    }
}

/// Box mesh для каждого нового Obstacle (Transform уже стоит из симуляции)
fn spawn_obstacle_visuals(
    mut commands: Commands,
    query: Query<(Entity, &Obstacle), Added<Obstacle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, obstacle) in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(obstacle.width, obstacle.height, obstacle.depth))),
            MeshMaterial3d(materials.add(hex_color(obstacle.color))),
        ));
    }
}

/// Sphere для каждой новой пули. Despawn пули в симуляции убирает и визуал.
fn spawn_projectile_visuals(
    mut commands: Commands,
    query: Query<Entity, Added<Projectile>>,
    visuals: Option<Res<ProjectileVisuals>>,
) {
    let Some(visuals) = visuals else {
        return;
    };

    for entity in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
        ));
    }
}

/// 0xRRGGBB → sRGB Color
pub fn hex_color(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::srgb_u8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xFF0000), Color::srgb_u8(255, 0, 0));
        assert_eq!(hex_color(0x8B4513), Color::srgb_u8(0x8B, 0x45, 0x13));
    }
}
