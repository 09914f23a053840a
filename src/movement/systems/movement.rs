//! Movement domain: fixed-step velocity integration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterState, MovementConfig, Player, ProbeResult};

/// Next velocity from the current intent and contacts.
///
/// Gravity is applied at half strength every step, and a held jump adds
/// `hold_jump_power` on top. Wall contacts only block horizontal motion into
/// the wall: the left clamp runs first, then the right clamp, so touching
/// both walls always yields zero horizontal speed.
pub fn integrate(
    state: &CharacterState,
    config: &MovementConfig,
    velocity: Vec2,
    probes: &ProbeResult,
    dt: f32,
) -> Vec2 {
    let mut horizontal = state.direction.x * config.speed;
    let mut vertical = config.gravity * dt * 0.5;

    if state.is_jumping {
        vertical += config.hold_jump_power * dt;
    }

    if probes.on_left_wall {
        horizontal = horizontal.max(0.0);
    }

    if probes.on_right_wall {
        horizontal = horizontal.min(0.0);
    }

    Vec2::new(horizontal, velocity.y + vertical)
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    config: Res<MovementConfig>,
    mut query: Query<(&CharacterState, &ProbeResult, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, probes, mut velocity) in &mut query {
        velocity.0 = integrate(state, &config, velocity.0, probes, dt);
    }
}
