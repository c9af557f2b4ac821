mod components;
mod messages;
mod systems;

use bevy::prelude::*;

pub use components::*;
pub use messages::*;
pub use systems::SELECT_KEY;

/// Systems that raise [`InteractionMessage`]s.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionSet;

pub struct InteractionPlugin;
impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Interactable>()
            .register_type::<Grabbable>()
            .register_type::<Interactor>();

        app.add_message::<InteractionMessage>().add_systems(
            Update,
            (systems::update_hovers, systems::update_selection)
                .chain()
                .in_set(InteractionSet),
        );
    }
}
