use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::ReachConfig;

use super::components::{Hand, HandBundle};
use super::visual::HandGraphicsAssets;

const MOVE_KEYS: [(KeyCode, Vec3); 6] = [
    (KeyCode::KeyW, Vec3::NEG_Z),
    (KeyCode::KeyS, Vec3::Z),
    (KeyCode::KeyA, Vec3::NEG_X),
    (KeyCode::KeyD, Vec3::X),
    (KeyCode::KeyQ, Vec3::NEG_Y),
    (KeyCode::KeyE, Vec3::Y),
];

pub fn spawn_hand(
    mut commands: Commands,
    graphics: Option<Res<HandGraphicsAssets>>,
    config: Res<ReachConfig>,
) {
    let (x, y, z) = config.hand.position;
    info!("Spawning hand at position: {:?}", config.hand.position);

    let mut entity = commands.spawn(HandBundle::new(
        &config.hand.name,
        Vec3::new(x, y, z),
        &config.bubble_cursor,
    ));

    if let Some(graphics) = graphics {
        entity.insert((
            Mesh3d(graphics.mesh.clone()),
            MeshMaterial3d(graphics.material.clone()),
        ));
    }
}

/// Drives the hand's kinematic body from the keyboard.
pub fn move_hand(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    config: Res<ReachConfig>,
    mut hands: Query<&mut LinearVelocity, With<Hand>>,
) {
    let Some(keys) = keys else {
        return;
    };

    let direction: Vec3 = MOVE_KEYS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .map(|(_, direction)| *direction)
        .sum();
    let velocity = direction.normalize_or_zero() * config.hand.speed;

    for mut linear_velocity in &mut hands {
        if linear_velocity.0 != velocity {
            linear_velocity.0 = velocity;
        }
    }
}
