use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::ReachConfig;

use super::components::GrabbableBundle;
use super::visual::GrabbableGraphicsAssets;
use super::GROUND_SIZE;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let mut entity = commands.spawn((
        Name::new("Ground Plane"),
        Transform::from_xyz(0.0, -0.5, 0.0).with_scale(Vec3::new(GROUND_SIZE, 1.0, GROUND_SIZE)),
        RigidBody::Static,
        Collider::cuboid(1.0, 1.0, 1.0),
    ));

    if let (Some(meshes), Some(materials)) = (&mut meshes, &mut materials) {
        let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
        let material = materials.add(Color::srgb(0.3, 0.3, 0.35));
        entity.insert((Mesh3d(mesh), MeshMaterial3d(material)));

        commands.spawn((
            Name::new("Sun"),
            DirectionalLight {
                shadows_enabled: true,
                ..Default::default()
            },
            Transform::from_xyz(2.0, 4.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }
}

pub fn spawn_grabbables(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    graphics: Option<Res<GrabbableGraphicsAssets>>,
    config: Res<ReachConfig>,
) {
    let size = config.scene.grabbable_size;
    let mesh = meshes
        .as_mut()
        .map(|meshes| meshes.add(Cuboid::new(size, size, size)));

    for (i, &(x, y, z)) in config.scene.grabbables.iter().enumerate() {
        info!("Spawning grabbable at position: {:?}", (x, y, z));
        let name = format!("Grabbable {}", i + 1);

        let mut entity = commands.spawn(GrabbableBundle::new(&name, Vec3::new(x, y, z), size));

        if let (Some(mesh), Some(graphics)) = (&mesh, &graphics) {
            entity.insert((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(graphics.material.clone()),
            ));
        }
    }
}
