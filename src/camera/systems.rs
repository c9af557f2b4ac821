use bevy::prelude::*;

use crate::core::ReachConfig;

const MIN_ZOOM_DISTANCE: f32 = 0.2;

/// The outline effect rides on the camera entity, which exists even without rendering.
pub fn setup_camera(mut commands: Commands, config: Res<ReachConfig>) {
    let (x, y, z) = config.hand.position;
    let focus = Vec3::new(x, y, z);
    let eye = focus + Vec3::new(0.0, config.camera.height, config.camera.distance);

    let mut entity = commands.spawn((
        Name::new("Camera"),
        config.outline.effect(),
        Transform::from_translation(eye).looking_at(focus, Vec3::Y),
    ));

    if !config.headless {
        entity.insert(Camera3d::default());
    }
}

fn dolly(camera: &mut Transform, amount: f32) {
    let forward = camera.forward();
    camera.translation += forward * amount;
}

pub fn zoom_in(
    time: Res<Time>,
    config: Res<ReachConfig>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let step = config.camera.zoom_speed * time.delta_secs();
    for mut transform in &mut cameras {
        if transform.translation.length() - step > MIN_ZOOM_DISTANCE {
            dolly(&mut transform, step);
        }
    }
}

pub fn zoom_out(
    time: Res<Time>,
    config: Res<ReachConfig>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let step = config.camera.zoom_speed * time.delta_secs();
    for mut transform in &mut cameras {
        dolly(&mut transform, -step);
    }
}
