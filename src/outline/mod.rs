mod components;
mod subscription;
mod systems;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use subscription::*;

use crate::core::ReachConfig;

#[derive(Debug, Clone, Resource, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
#[reflect(Resource)]
pub struct OutlineConfig {
    /// sRGB line colors for no highlight, hover, and selected.
    #[derivative(Default(value = "[(0.0, 0.0, 0.0), (1.0, 0.8, 0.1), (0.2, 0.9, 0.3)]"))]
    pub line_colors: [(f32, f32, f32); 3],
}

impl OutlineConfig {
    pub fn effect(&self) -> OutlineEffect {
        OutlineEffect {
            line_colors: self.line_colors.map(|(r, g, b)| Color::srgb(r, g, b)),
        }
    }
}

pub struct OutlinePlugin;
impl Plugin for OutlinePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Highlight>()
            .register_type::<OutlineEffect>()
            .init_resource::<InteractorSubscriptions>();

        app.add_systems(
            Update,
            (
                systems::resolve_outline_collaborators,
                systems::sync_outline_subscriptions,
                systems::release_removed_providers,
                systems::apply_outline_highlights,
            )
                .chain()
                .after(crate::interaction::InteractionSet),
        );
        app.add_systems(
            Update,
            systems::draw_outlines.run_if(|c: Res<ReachConfig>| !c.headless),
        );
    }
}
