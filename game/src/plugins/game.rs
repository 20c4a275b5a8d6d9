use bevy::prelude::*;

use crate::prelude::{
    nav_agent::NavAgent,
    nav_bounds::NavBounds,
    touch_movement::TouchMovement,
};

const PLAYER_HEIGHT: f32 = 1.8;
const PLAYER_RADIUS: f32 = 0.4;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<NavBounds>()
        .add_systems(Startup, setup_scene);
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bounds: Res<NavBounds>,
) {
    commands.spawn((
        DirectionalLight { illuminance: 7000.0, shadows_enabled: true, ..default() },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let center = (bounds.min + bounds.max) / 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(bounds.size().x, bounds.size().y))),
        MeshMaterial3d(materials.add(StandardMaterial { base_color: Color::srgb(0.3, 0.5, 0.3), ..default() })),
        Transform::from_xyz(center.x, 0.0, center.y),
    ));

    commands.spawn((
        NavAgent::default(),
        TouchMovement::default(),
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial { base_color: Color::srgb(0.0, 1.0, 0.5), ..default() })),
        Transform::from_xyz(0.0, PLAYER_HEIGHT / 2.0, 0.0),
    ))
    .with_children(|parent| {
        // Nose, so the facing is visible.
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(0.2, 0.2, 0.4))),
            MeshMaterial3d(materials.add(StandardMaterial { base_color: Color::BLACK, ..default() })),
            Transform::from_xyz(0.0, 0.5, -PLAYER_RADIUS),
        ));
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("scene ready, walkable area {} to {}", bounds.min, bounds.max);
}
