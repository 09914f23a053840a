//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and walls. Probes only ever look at this layer.
    Ground,
    /// Player character
    Player,
}

/// The controllable character. Probes and the integrator only touch entities
/// carrying this marker.
#[derive(Component, Debug)]
#[require(CharacterState, ProbeResult)]
pub struct Player;

/// Movement intent derived from input, consumed every fixed step.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct CharacterState {
    /// Horizontal intent; `y` is always zero.
    pub direction: Vec2,
    pub is_jumping: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sprites are authored facing right.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// Contact flags recomputed from ray probes every fixed step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeResult {
    /// Only the debug overlay reads this; jumps re-probe at press time.
    pub on_ground: bool,
    pub on_left_wall: bool,
    pub on_right_wall: bool,
}
