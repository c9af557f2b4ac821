use avian3d::prelude::*;
use bevy::prelude::*;

use crate::bubble_cursor::{BubbleCursor, BubbleCursorConfig};
use crate::interaction::Interactor;
use crate::outline::OutlineProvider;

/// The tracked controller. Its bubble trigger child is the cursor's tracked point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Component, Reflect)]
#[reflect(Component)]
pub struct Hand;

#[derive(Bundle)]
pub struct HandBundle {
    pub name: Name,
    pub hand: Hand,
    pub interactor: Interactor,
    pub cursor: BubbleCursor,
    pub outline: OutlineProvider,
    pub transform: Transform,
    pub body: RigidBody,
    pub velocity: LinearVelocity,
}

impl HandBundle {
    pub fn new(name: &str, position: Vec3, cursor: &BubbleCursorConfig) -> Self {
        Self {
            name: Name::new(name.to_string()),
            hand: Hand,
            interactor: Interactor::default(),
            cursor: cursor.cursor(),
            outline: OutlineProvider::default(),
            transform: Transform::from_translation(position),
            body: RigidBody::Kinematic,
            velocity: LinearVelocity::ZERO,
        }
    }
}
