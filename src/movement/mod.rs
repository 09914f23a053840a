//! Movement domain: run, jump and contact probes for the player.
//!
//! Input arrives as [`ControlEvent`]s during `Update` and mutates
//! [`CharacterState`]. Every `FixedUpdate` the probes refresh [`ProbeResult`]
//! and the integrator writes the next `LinearVelocity`.

mod bootstrap;
mod components;
mod dev;
mod resources;
mod systems;


use bevy::prelude::*;

pub use components::*;
pub use resources::*;
pub use systems::{ControlEvent, KeyboardSampler, ground_rays, left_wall_rays, right_wall_rays};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .init_resource::<KeyboardSampler>()
            .add_message::<ControlEvent>()
            .add_systems(Startup, (dev::spawn_test_room, bootstrap::spawn_player))
            .add_systems(PostStartup, bootstrap::verify_player_collaborators)
            .add_systems(
                Update,
                (systems::read_input, systems::handle_control_events).chain(),
            )
            .add_systems(
                FixedUpdate,
                (systems::detect_contacts, systems::apply_movement).chain(),
            );
    }
}
