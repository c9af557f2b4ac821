pub mod bubble_cursor;
pub mod camera;
pub mod core;
mod debug;
pub mod error;
pub mod hand;
pub mod interaction;
pub mod outline;
pub mod scene;

use std::path::Path;

use avian3d::prelude::*;
use bevy::prelude::*;

pub use crate::core::{ReachConfig, ReachPlugin};
pub use crate::error::ConfigError;

pub fn parse_config(config_path: impl AsRef<Path>) -> Result<ReachConfig, ConfigError> {
    ReachConfig::load(config_path)
}

pub fn generate_app(config: ReachConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bubble Reach".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        PhysicsPlugins::default(),
    ));

    if config.debug {
        app.add_plugins(debug::DebugPlugin);
    }

    app.add_plugins(ReachPlugin { config });

    app
}
