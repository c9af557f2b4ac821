use avian3d::prelude::*;
use bevy::prelude::*;

use crate::bubble_cursor::BubbleCursor;

use super::components::{Interactable, Interactor};
use super::messages::InteractionMessage;

pub const SELECT_KEY: KeyCode = KeyCode::Space;

/// Diffs what each interactor's bubble trigger touches against what it hovered last tick.
pub fn update_hovers(
    mut writer: MessageWriter<InteractionMessage>,
    mut interactors: Query<(Entity, &mut Interactor, &BubbleCursor)>,
    contacts: Query<&CollidingEntities>,
    interactables: Query<(), With<Interactable>>,
) {
    for (entity, mut interactor, cursor) in &mut interactors {
        let Some(contacts) = cursor.trigger.and_then(|trigger| contacts.get(trigger).ok()) else {
            continue;
        };

        let mut touching: Vec<Entity> = contacts
            .iter()
            .copied()
            .filter(|&other| interactables.contains(other))
            .collect();
        touching.sort();

        for &interactable in &interactor.hovered {
            if !touching.contains(&interactable) {
                writer.write(InteractionMessage::HoverExit {
                    interactor: entity,
                    interactable,
                });
            }
        }
        for &interactable in &touching {
            if !interactor.hovered.contains(&interactable) {
                writer.write(InteractionMessage::HoverEnter {
                    interactor: entity,
                    interactable,
                });
            }
        }

        if interactor.hovered != touching {
            interactor.hovered = touching;
        }
    }
}

/// Holding [`SELECT_KEY`] selects the first hovered interactable until release.
pub fn update_selection(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut writer: MessageWriter<InteractionMessage>,
    mut interactors: Query<(Entity, &mut Interactor)>,
) {
    let Some(keys) = keys else {
        return;
    };

    for (entity, mut interactor) in &mut interactors {
        if keys.just_pressed(SELECT_KEY) && interactor.selected.is_none() {
            if let Some(&interactable) = interactor.hovered.first() {
                interactor.selected = Some(interactable);
                writer.write(InteractionMessage::SelectEnter {
                    interactor: entity,
                    interactable,
                });
            }
        } else if keys.just_released(SELECT_KEY) {
            if let Some(interactable) = interactor.selected.take() {
                writer.write(InteractionMessage::SelectExit {
                    interactor: entity,
                    interactable,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Grabbable;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<InteractionMessage>();
        app.add_systems(Update, (update_hovers, update_selection).chain());
        app
    }

    fn drain(app: &mut App) -> Vec<InteractionMessage> {
        app.world_mut()
            .resource_mut::<Messages<InteractionMessage>>()
            .drain()
            .collect()
    }

    fn set_contacts(app: &mut App, trigger: Entity, touching: &[Entity]) {
        let mut contacts = CollidingEntities::default();
        contacts.extend(touching.iter().copied());
        app.world_mut().entity_mut(trigger).insert(contacts);
    }

    fn spawn_interactor(app: &mut App) -> (Entity, Entity) {
        let trigger = app.world_mut().spawn(CollidingEntities::default()).id();
        let interactor = app
            .world_mut()
            .spawn((
                Interactor::default(),
                BubbleCursor::default().with_trigger(trigger),
            ))
            .id();
        (interactor, trigger)
    }

    #[test]
    fn contact_enters_and_leaves_hover() {
        let mut app = test_app();
        let (interactor, trigger) = spawn_interactor(&mut app);
        let cube = app.world_mut().spawn(Grabbable).id();

        set_contacts(&mut app, trigger, &[cube]);
        app.update();
        assert_eq!(
            drain(&mut app),
            vec![InteractionMessage::HoverEnter {
                interactor,
                interactable: cube
            }]
        );

        app.update();
        assert!(drain(&mut app).is_empty(), "hover is only announced once");

        set_contacts(&mut app, trigger, &[]);
        app.update();
        assert_eq!(
            drain(&mut app),
            vec![InteractionMessage::HoverExit {
                interactor,
                interactable: cube
            }]
        );
    }

    #[test]
    fn contacts_with_non_interactables_are_ignored() {
        let mut app = test_app();
        let (interactor, trigger) = spawn_interactor(&mut app);
        let wall = app.world_mut().spawn_empty().id();

        set_contacts(&mut app, trigger, &[wall]);
        app.update();

        assert!(drain(&mut app).is_empty());
        assert!(
            app.world()
                .get::<Interactor>(interactor)
                .unwrap()
                .hovered
                .is_empty()
        );
    }

    #[test]
    fn select_key_selects_hovered_until_released() {
        let mut app = test_app();
        let (interactor, trigger) = spawn_interactor(&mut app);
        let cube = app.world_mut().spawn(Grabbable).id();
        set_contacts(&mut app, trigger, &[cube]);
        app.update();
        drain(&mut app);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(SELECT_KEY);
        app.insert_resource(keys);
        app.update();
        assert_eq!(
            drain(&mut app),
            vec![InteractionMessage::SelectEnter {
                interactor,
                interactable: cube
            }]
        );
        assert_eq!(
            app.world().get::<Interactor>(interactor).unwrap().selected,
            Some(cube)
        );

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.release(SELECT_KEY);
        app.update();
        assert_eq!(
            drain(&mut app),
            vec![InteractionMessage::SelectExit {
                interactor,
                interactable: cube
            }]
        );
        assert_eq!(
            app.world().get::<Interactor>(interactor).unwrap().selected,
            None
        );
    }

    #[test]
    fn select_key_with_nothing_hovered_does_nothing() {
        let mut app = test_app();
        let (interactor, _) = spawn_interactor(&mut app);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(SELECT_KEY);
        app.insert_resource(keys);
        app.update();

        assert!(drain(&mut app).is_empty());
        assert_eq!(
            app.world().get::<Interactor>(interactor).unwrap().selected,
            None
        );
    }
}
