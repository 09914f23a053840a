//! Movement domain: tuning resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Movement tunables. Loaded once from `assets/data/movement.ron` and treated
/// as read-only afterwards. Values are not validated.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    pub speed: f32,
    /// Applied at half strength each fixed step.
    pub gravity: f32,
    /// Vertical velocity set when a jump starts.
    pub start_jump_power: f32,
    /// Extra upward acceleration while the jump is held.
    pub hold_jump_power: f32,
    pub ground_probe_distance: f32,
    pub ground_probe_offset_x: f32,
    pub wall_probe_distance: f32,
    pub wall_probe_offset_y: f32,
    pub ground_layers: Vec<GameLayer>,
    /// Seconds of holding after which a jump counts as fully performed.
    pub jump_hold_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            gravity: -14.0,
            start_jump_power: 5.6,
            hold_jump_power: 17.0,
            ground_probe_distance: 0.2,
            ground_probe_offset_x: 0.5,
            wall_probe_distance: 0.05,
            wall_probe_offset_y: 0.5,
            ground_layers: vec![GameLayer::Ground],
            jump_hold_time: 0.4,
        }
    }
}

impl MovementConfig {
    /// Whether every probe ray starts strictly inside the edges of a body of
    /// `size`. Rays starting on a corner lie along the adjacent face.
    pub fn fits_body(&self, size: Vec2) -> bool {
        self.ground_probe_offset_x < size.x / 2.0 && self.wall_probe_offset_y < size.y / 2.0
    }

    /// Layer filter shared by the ground and wall probes.
    pub fn ground_mask(&self) -> LayerMask {
        self.ground_layers
            .iter()
            .fold(LayerMask::NONE, |mask, layer| mask | LayerMask::from(*layer))
    }
}
