use avian3d::prelude::*;
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;

use crate::interaction::{InteractionMessage, Interactor};

use super::components::{Highlight, HighlightStyle, OutlineEffect, OutlineProvider};
use super::subscription::{InteractorSubscriptions, Subscription};

const OUTLINE_PADDING: f32 = 1.05;

fn label(entity: Entity, name: Option<&Name>) -> String {
    name.map_or_else(|| entity.to_string(), |n| n.to_string())
}

/// Prefers a collaborator on the provider's own entity, then any in the world.
fn find_collaborator<F: QueryFilter>(
    owner: &str,
    kind: &str,
    entity: Entity,
    candidates: &Query<(Entity, Option<&Name>), F>,
) -> Option<Entity> {
    if candidates.contains(entity) {
        return Some(entity);
    }

    warn!("[{owner}][OutlineProvider]: no {kind} on the same entity");
    match candidates.iter().next() {
        Some((found, found_name)) => {
            warn!(
                "[{owner}][OutlineProvider]: using the {kind} on {}",
                label(found, found_name)
            );
            Some(found)
        }
        None => {
            warn!("[{owner}][OutlineProvider]: no {kind} in the world");
            None
        }
    }
}

pub fn resolve_outline_collaborators(
    mut providers: Query<(Entity, Option<&Name>, &mut OutlineProvider), Added<OutlineProvider>>,
    interactors: Query<(Entity, Option<&Name>), With<Interactor>>,
    effects: Query<(Entity, Option<&Name>), With<OutlineEffect>>,
) {
    for (entity, name, mut provider) in &mut providers {
        let owner = label(entity, name);

        if provider.interactor.is_none() {
            provider.interactor = find_collaborator(&owner, "interactor", entity, &interactors);
        }
        if provider.effect.is_none() {
            provider.effect = find_collaborator(&owner, "outline effect", entity, &effects);
        }
    }
}

/// Keeps each provider subscribed to its current interactor exactly while enabled.
pub fn sync_outline_subscriptions(
    mut subscriptions: ResMut<InteractorSubscriptions>,
    mut providers: Query<(Entity, &mut OutlineProvider)>,
) {
    for (entity, mut provider) in &mut providers {
        let wanted = provider.interactor.filter(|_| provider.enabled);
        let held = provider.subscription.as_ref().map(Subscription::interactor);
        if wanted == held {
            continue;
        }

        if let Some(subscription) = provider.subscription.take() {
            subscriptions.unsubscribe(subscription);
        }
        if let Some(interactor) = wanted {
            provider.subscription = subscriptions.subscribe(interactor, entity);
        }
    }
}

pub fn release_removed_providers(
    mut removed: RemovedComponents<OutlineProvider>,
    mut subscriptions: ResMut<InteractorSubscriptions>,
) {
    for entity in removed.read() {
        subscriptions.remove_listener(entity);
    }
}

pub fn apply_outline_highlights(
    mut reader: MessageReader<InteractionMessage>,
    subscriptions: Res<InteractorSubscriptions>,
    providers: Query<&OutlineProvider>,
    effects: Query<(), With<OutlineEffect>>,
    mut highlights: Query<&mut Highlight>,
) {
    for message in reader.read() {
        let outlined = subscriptions
            .listeners(message.interactor())
            .iter()
            .any(|&listener| {
                providers
                    .get(listener)
                    .is_ok_and(|p| p.effect.is_some_and(|effect| effects.contains(effect)))
            });
        if !outlined {
            continue;
        }

        let Ok(mut highlight) = highlights.get_mut(message.interactable()) else {
            debug!("{} has no highlight to update", message.interactable());
            continue;
        };
        highlight.set_if_neq(Highlight(HighlightStyle::from(message)));
    }
}

pub fn draw_outlines(
    mut gizmos: Gizmos,
    effects: Query<&OutlineEffect>,
    highlighted: Query<(&Highlight, &ColliderAabb)>,
) {
    let Some(effect) = effects.iter().next() else {
        return;
    };

    for (&Highlight(style), aabb) in &highlighted {
        if style == HighlightStyle::None {
            continue;
        }

        let center = (aabb.min + aabb.max) * 0.5;
        let size = (aabb.max - aabb.min) * OUTLINE_PADDING;
        gizmos.cuboid(
            Transform::from_translation(center).with_scale(size),
            effect.color(style),
        );
    }
}
