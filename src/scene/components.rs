use avian3d::prelude::*;
use bevy::prelude::*;

use crate::interaction::Grabbable;

#[derive(Debug, Clone, Bundle)]
pub struct GrabbableBundle {
    pub name: Name,
    pub grabbable: Grabbable,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
}

impl GrabbableBundle {
    pub fn new(name: &str, position: Vec3, size: f32) -> Self {
        Self {
            name: Name::new(name.to_string()),
            grabbable: Grabbable,
            transform: Transform::from_translation(position),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::cuboid(size, size, size),
        }
    }
}
