use bevy::prelude::*;

const BUBBLE_COLOR: Color = Color::srgba(0.35, 0.65, 1.0, 0.25);

/// Unit-diameter sphere, so a visual scale of `2 * radius` matches the trigger.
#[derive(Resource)]
pub struct BubbleAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl FromWorld for BubbleAssets {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let mesh = meshes.add(Sphere::new(0.5));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let material = materials.add(StandardMaterial {
            base_color: BUBBLE_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..Default::default()
        });

        Self { mesh, material }
    }
}
