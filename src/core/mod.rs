//! Core domain: app shell shared by every other domain.

mod systems;

use bevy::prelude::*;

/// Camera zoom: world units are metres, roughly this many pixels each.
pub const PIXELS_PER_UNIT: f32 = 48.0;

/// Physics steps per second.
pub const FIXED_UPDATE_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_UPDATE_HZ))
            .add_systems(Startup, systems::setup_camera);
    }
}
