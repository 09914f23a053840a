//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;


use bevy::prelude::*;
use std::path::PathBuf;

use loader::load_movement_config;

use crate::movement::MovementConfig;

/// Directory holding the RON data files, relative to the working directory.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    match load_movement_config(&path.0) {
        Ok(config) => {
            info!(
                "Loaded movement config: speed={}, gravity={}, start_jump={}, hold_jump={}",
                config.speed, config.gravity, config.start_jump_power, config.hold_jump_power
            );
            commands.insert_resource(config);
        }
        Err(e) => {
            warn!("{}; using default movement config", e);
            commands.insert_resource(MovementConfig::default());
        }
    }
}
