use bevy::prelude::*;

const HAND_RADIUS: f32 = 0.02;

#[derive(Resource)]
pub struct HandGraphicsAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl FromWorld for HandGraphicsAssets {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let mesh = meshes.add(Sphere::new(HAND_RADIUS));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let material = materials.add(Color::srgb(0.9, 0.9, 0.9));

        Self { mesh, material }
    }
}
