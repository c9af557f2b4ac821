mod systems;

use bevy::input::common_conditions::input_pressed;
use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Resource, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
#[reflect(Resource)]
pub struct CameraConfig {
    /// Distance from the hand's start position to the eye.
    #[derivative(Default(value = "1.2"))]
    pub distance: f32,
    #[derivative(Default(value = "0.6"))]
    pub height: f32,
    /// Metres per second when zooming.
    #[derivative(Default(value = "1.0"))]
    pub zoom_speed: f32,
}

pub struct CameraPlugin;
impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::setup_camera);
        app.add_systems(
            Update,
            (
                systems::zoom_in.run_if(input_pressed(KeyCode::Equal)),
                systems::zoom_out.run_if(input_pressed(KeyCode::Minus)),
            ),
        );
    }
}
