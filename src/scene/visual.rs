use bevy::prelude::*;

#[derive(Resource)]
pub struct GrabbableGraphicsAssets {
    pub material: Handle<StandardMaterial>,
}

impl FromWorld for GrabbableGraphicsAssets {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let material = materials.add(Color::srgb(0.8, 0.3, 0.2));

        Self { material }
    }
}
