//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_contacts;
pub use collisions::{ground_rays, left_wall_rays, right_wall_rays};
pub(crate) use input::{handle_control_events, read_input};
pub use input::{ControlEvent, KeyboardSampler};
pub(crate) use movement::apply_movement;
