use avian3d::prelude::*;
use bevy::prelude::*;

use crate::interaction::Grabbable;

use super::components::{BubbleCursor, BubbleRadius, BubbleTrigger, BubbleVisual};
use super::proximity::{Bounds, bubble_radius, nearest_candidate};
use super::visual::BubbleAssets;

/// Spawns the trigger and visual children for cursors added without them.
pub fn attach_bubble_cursor(
    mut commands: Commands,
    assets: Option<Res<BubbleAssets>>,
    mut cursors: Query<(Entity, &mut BubbleCursor), Added<BubbleCursor>>,
) {
    for (entity, mut cursor) in &mut cursors {
        let radius = cursor.min_radius;

        if cursor.trigger.is_none() {
            let trigger = commands
                .spawn((
                    Name::new("Bubble Trigger"),
                    BubbleTrigger,
                    BubbleRadius(radius),
                    Transform::default(),
                ))
                .id();
            commands.entity(entity).add_child(trigger);
            cursor.trigger = Some(trigger);
        }

        if cursor.visual.is_none() {
            let mut visual = commands.spawn((
                Name::new("Bubble Visual"),
                BubbleVisual,
                Transform::from_scale(Vec3::splat(radius * 2.0)),
                Visibility::Inherited,
            ));
            if let Some(assets) = &assets {
                visual.insert((
                    Mesh3d(assets.mesh.clone()),
                    MeshMaterial3d(assets.material.clone()),
                ));
            }
            let visual = visual.id();
            commands.entity(entity).add_child(visual);
            cursor.visual = Some(visual);
        }
    }
}

pub fn warn_on_inverted_radius_bounds(
    cursors: Query<(Entity, Option<&Name>, &BubbleCursor), Changed<BubbleCursor>>,
) {
    for (entity, name, cursor) in &cursors {
        if cursor.min_radius > cursor.max_radius {
            warn!(
                "[{}][BubbleCursor]: min radius {} exceeds max radius {}",
                name.map_or_else(|| entity.to_string(), |n| n.to_string()),
                cursor.min_radius,
                cursor.max_radius
            );
        }
    }
}

/// Resizes every cursor's trigger and visual to reach the nearest grabbable.
pub fn update_bubble_cursors(
    cursors: Query<&BubbleCursor>,
    candidates: Query<&ColliderAabb, With<Grabbable>>,
    mut triggers: Query<(&GlobalTransform, &mut BubbleRadius), With<BubbleTrigger>>,
    mut visuals: Query<&mut Transform, With<BubbleVisual>>,
) {
    for cursor in &cursors {
        let (Some(trigger), Some(visual)) = (cursor.trigger, cursor.visual) else {
            continue;
        };
        let Ok((trigger_transform, mut applied)) = triggers.get_mut(trigger) else {
            continue;
        };
        let Ok(mut visual_transform) = visuals.get_mut(visual) else {
            continue;
        };

        let point = trigger_transform.translation();
        let nearest = nearest_candidate(point, candidates.iter().map(Bounds::from));
        let radius = bubble_radius(nearest, cursor.min_radius, cursor.max_radius);

        applied.set_if_neq(BubbleRadius(radius));

        let scale = Vec3::splat(radius * 2.0);
        if visual_transform.scale != scale {
            visual_transform.scale = scale;
        }
    }
}

/// Rebuilds the sensor sphere whenever the applied radius moves.
///
/// Triggers supplied with their own collider are turned into sensors too.
pub fn sync_trigger_colliders(
    mut commands: Commands,
    mut triggers: Query<
        (Entity, &BubbleRadius, Option<&mut Collider>),
        (With<BubbleTrigger>, Changed<BubbleRadius>),
    >,
) {
    for (entity, &BubbleRadius(radius), collider) in &mut triggers {
        let mut trigger = commands.entity(entity);
        match collider {
            Some(mut collider) => *collider = Collider::sphere(radius),
            None => {
                trigger.insert(Collider::sphere(radius));
            }
        }
        trigger.insert_if_new((Sensor, CollidingEntities::default()));
    }
}
