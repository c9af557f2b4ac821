use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bubble_cursor;
use crate::camera;
use crate::error::{ConfigError, Result};
use crate::hand;
use crate::interaction;
use crate::outline;
use crate::scene;

#[derive(Debug, Clone, Default, Resource, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[reflect(Resource)]
pub struct ReachConfig {
    pub bubble_cursor: bubble_cursor::BubbleCursorConfig,
    pub outline: outline::OutlineConfig,
    pub hand: hand::HandConfig,
    pub scene: scene::SceneConfig,
    pub camera: camera::CameraConfig,
    pub debug: bool,
    pub headless: bool,
}

impl ReachConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ReachConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        let min = self.bubble_cursor.min_radius;
        let max = self.bubble_cursor.max_radius;

        if !(min > 0.0 && max > 0.0) {
            return Err(ConfigError::NonPositiveRadius { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedRadius { min, max });
        }
        Ok(())
    }
}

pub struct ReachPlugin {
    pub config: ReachConfig,
}

impl Plugin for ReachPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.add_plugins((
            bubble_cursor::BubbleCursorPlugin,
            interaction::InteractionPlugin,
            outline::OutlinePlugin,
            camera::CameraPlugin,
            hand::HandPlugin,
            scene::ScenePlugin,
        ));
    }
}
