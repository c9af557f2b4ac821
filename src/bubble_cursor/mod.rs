mod components;
pub mod proximity;
mod systems;
mod visual;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use proximity::{Bounds, CONTACT_BUFFER, ProximityResult};
pub use visual::*;

use crate::core::ReachConfig;

#[derive(Debug, Clone, Resource, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
#[reflect(Resource)]
pub struct BubbleCursorConfig {
    #[derivative(Default(value = "0.1"))]
    pub min_radius: f32,
    #[derivative(Default(value = "0.5"))]
    pub max_radius: f32,
}

impl BubbleCursorConfig {
    pub fn cursor(&self) -> BubbleCursor {
        BubbleCursor::new(self.min_radius, self.max_radius)
    }
}

pub struct BubbleCursorPlugin;
impl Plugin for BubbleCursorPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BubbleCursor>()
            .register_type::<BubbleRadius>();

        app.add_systems(PreStartup, init_bubble_assets);
        app.add_systems(
            Update,
            (
                systems::attach_bubble_cursor,
                systems::warn_on_inverted_radius_bounds,
                systems::update_bubble_cursors,
                systems::sync_trigger_colliders,
            )
                .chain(),
        );
    }
}

fn init_bubble_assets(mut commands: Commands, config: Res<ReachConfig>) {
    if !config.headless {
        commands.init_resource::<visual::BubbleAssets>();
    }
}
