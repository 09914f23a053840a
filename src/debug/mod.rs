//! Debug overlay for the movement probes.
//!
//! Press F3 to draw the rays the ground and wall probes cast: ground rays in
//! green, wall rays in blue, each faded while its side reports no contact.
//! Drawing has no effect on the simulation.

use bevy::prelude::*;

use crate::movement::{
    MovementConfig, Player, ProbeResult, ground_rays, left_wall_rays, right_wall_rays,
};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_probes: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_probe_overlay,
                draw_probe_rays.run_if(|state: Res<DebugState>| state.show_probes),
            )
                .chain(),
        );
    }
}

fn toggle_probe_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.show_probes = !state.show_probes;
        info!("Probe overlay: {}", state.show_probes);
    }
}

fn shade(color: Color, touching: bool) -> Color {
    if touching {
        color
    } else {
        color.with_alpha(0.35)
    }
}

fn draw_probe_rays(
    mut gizmos: Gizmos,
    config: Res<MovementConfig>,
    query: Query<(&Transform, &ProbeResult), With<Player>>,
) {
    let ground_color = Color::srgb(0.2, 0.9, 0.2);
    let wall_color = Color::srgb(0.2, 0.4, 1.0);

    for (transform, probes) in &query {
        let position = transform.translation.truncate();
        let size = transform.scale.truncate();

        let color = shade(ground_color, probes.on_ground);
        for ray in ground_rays(position, size, &config) {
            gizmos.line_2d(ray.origin, ray.end(), color);
        }

        let color = shade(wall_color, probes.on_left_wall);
        for ray in left_wall_rays(position, size, &config) {
            gizmos.line_2d(ray.origin, ray.end(), color);
        }

        let color = shade(wall_color, probes.on_right_wall);
        for ray in right_wall_rays(position, size, &config) {
            gizmos.line_2d(ray.origin, ray.end(), color);
        }
    }
}
