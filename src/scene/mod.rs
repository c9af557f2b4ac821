mod components;
mod systems;
mod visual;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use visual::*;

use crate::core::ReachConfig;

const GROUND_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Resource, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[reflect(Resource)]
#[serde(default)]
pub struct SceneConfig {
    /// Resting positions of the grabbable cubes, in metres.
    #[derivative(Default(
        value = "vec![(0.35, 0.05, -0.1), (-0.25, 0.05, -0.3), (0.05, 0.05, -0.6), (-0.6, 0.05, 0.2)]"
    ))]
    pub grabbables: Vec<(f32, f32, f32)>,
    /// Edge length of each cube.
    #[derivative(Default(value = "0.1"))]
    pub grabbable_size: f32,
}

pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 1_500.0,
            ..Default::default()
        });

        app.add_systems(PreStartup, init_scene_assets);
        app.add_systems(Startup, systems::setup_scene);
        app.add_systems(Startup, systems::spawn_grabbables);
    }
}

fn init_scene_assets(mut commands: Commands, config: Res<ReachConfig>) {
    if !config.headless {
        commands.init_resource::<GrabbableGraphicsAssets>();
    }
}
