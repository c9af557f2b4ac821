mod components;
mod systems;
mod visual;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use visual::*;

use crate::core::ReachConfig;

#[derive(Debug, Clone, Resource, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[reflect(Resource)]
#[serde(default)]
pub struct HandConfig {
    #[derivative(Default(value = "\"Hand\".to_string()"))]
    pub name: String,
    /// Metres per second.
    #[derivative(Default(value = "0.5"))]
    pub speed: f32,
    #[derivative(Default(value = "(0.0, 0.15, 0.0)"))]
    pub position: (f32, f32, f32),
}

pub struct HandPlugin;
impl Plugin for HandPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Hand>();
        app.add_systems(PreStartup, spawn_hand_assets);
        app.add_systems(Startup, systems::spawn_hand);
        app.add_systems(
            Update,
            systems::move_hand.before(crate::interaction::InteractionSet),
        );
    }
}

fn spawn_hand_assets(mut commands: Commands, config: Res<ReachConfig>) {
    if config.headless {
        return;
    }

    commands.init_resource::<visual::HandGraphicsAssets>();
}
