use avian3d::debug_render::PhysicsDebugPlugin;
use avian3d::prelude::*;
use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin};

use crate::bubble_cursor::{BubbleCursor, BubbleRadius, BubbleTrigger};
use crate::interaction::SELECT_KEY;

const TOGGLE_BUBBLES_KEY: KeyCode = KeyCode::KeyB;
const FREEZE_KEY: KeyCode = KeyCode::KeyF;

const BUBBLE_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);
const REACH_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);

/// What the overlay draws on top of the scene.
#[derive(Debug, Resource, Reflect)]
#[reflect(Resource)]
struct DebugOverlay {
    show_bubbles: bool,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self { show_bubbles: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PhysicsDebugPlugin,
            EguiPlugin::default(),
            WorldInspectorPlugin::new(),
            FrameTimeDiagnosticsPlugin::default(),
        ));

        app.init_resource::<DebugOverlay>();
        app.add_systems(Startup, spawn_legend);
        app.add_systems(
            Update,
            (
                handle_overlay_keys,
                draw_bubble_reach.run_if(|overlay: Res<DebugOverlay>| overlay.show_bubbles),
            ),
        );
    }
}

/// `B` toggles the bubble wireframes, `F` freezes physics so the cursor can be inspected
/// against still grabbables.
fn handle_overlay_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlay>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if keys.just_pressed(TOGGLE_BUBBLES_KEY) {
        overlay.show_bubbles = !overlay.show_bubbles;
    }

    if keys.just_pressed(FREEZE_KEY) {
        if physics_time.is_paused() {
            physics_time.unpause();
        } else {
            physics_time.pause();
        }
        info!("Physics frozen: {}", physics_time.is_paused());
    }
}

fn spawn_legend(mut commands: Commands) {
    let legend = format!(
        "WASD/QE: move hand | {SELECT_KEY:?}: select | {TOGGLE_BUBBLES_KEY:?}: bubbles | {FREEZE_KEY:?}: freeze physics"
    );

    commands.spawn((
        Name::new("Debug Legend"),
        Text::new(legend),
        TextFont {
            font_size: 10.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(5.0),
            left: Val::Px(5.0),
            ..default()
        },
    ));
}

/// Applied trigger sphere, plus the outer limit it can grow to.
fn draw_bubble_reach(
    mut gizmos: Gizmos,
    cursors: Query<&BubbleCursor>,
    triggers: Query<(&GlobalTransform, &BubbleRadius), With<BubbleTrigger>>,
) {
    for cursor in &cursors {
        let Some(Ok((transform, &BubbleRadius(radius)))) =
            cursor.trigger.map(|trigger| triggers.get(trigger))
        else {
            continue;
        };

        let center = Isometry3d::from_translation(transform.translation());
        gizmos.sphere(center, radius, BUBBLE_COLOR);
        gizmos.sphere(center, cursor.max_radius, REACH_COLOR);
    }
}
