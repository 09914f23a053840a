//! Movement domain: input sampling and the intent updates it drives.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::systems::collisions::on_ground;
use crate::movement::{CharacterState, Facing, MovementConfig, Player};

/// Discrete input delivered to the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The movement axis changed value.
    Move(Vec2),
    /// The jump button went down.
    JumpStarted,
    /// The jump button was released early, or held for the full duration.
    JumpReleased { fully_held: bool },
}

impl Message for ControlEvent {}

/// Tracks keyboard state between frames so only changes are reported.
#[derive(Resource, Debug, Default)]
pub struct KeyboardSampler {
    last_axis: Option<f32>,
    jump: Option<JumpHold>,
}

#[derive(Debug, Clone, Copy, Default)]
struct JumpHold {
    held_for: f32,
    completed: bool,
}

impl KeyboardSampler {
    /// `Move` is reported the first time and whenever the axis changes.
    pub fn sample_axis(&mut self, axis: f32) -> Option<ControlEvent> {
        if self.last_axis == Some(axis) {
            return None;
        }
        self.last_axis = Some(axis);
        Some(ControlEvent::Move(Vec2::new(axis, 0.0)))
    }

    /// A held jump completes once after `hold_time`; releasing before that
    /// cancels it. Releasing after completion reports nothing.
    pub fn sample_jump(&mut self, pressed: bool, dt: f32, hold_time: f32) -> Option<ControlEvent> {
        match (self.jump.as_mut(), pressed) {
            (None, true) => {
                self.jump = Some(JumpHold::default());
                Some(ControlEvent::JumpStarted)
            }
            (None, false) => None,
            (Some(hold), true) => {
                hold.held_for += dt;
                if !hold.completed && hold.held_for >= hold_time {
                    hold.completed = true;
                    Some(ControlEvent::JumpReleased { fully_held: true })
                } else {
                    None
                }
            }
            (Some(hold), false) => {
                let completed = hold.completed;
                self.jump = None;
                (!completed).then_some(ControlEvent::JumpReleased { fully_held: false })
            }
        }
    }
}

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<MovementConfig>,
    mut sampler: ResMut<KeyboardSampler>,
    mut events: MessageWriter<ControlEvent>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    if let Some(event) = sampler.sample_axis(x) {
        events.write(event);
    }

    let jump_held = keyboard.any_pressed([KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp]);
    if let Some(event) = sampler.sample_jump(jump_held, time.delta_secs(), config.jump_hold_time) {
        events.write(event);
    }
}

/// Horizontal intent follows the raw axis; facing only changes on a
/// strictly positive or negative value.
pub fn apply_move(state: &mut CharacterState, input: Vec2) {
    if input.x > 0.0 {
        state.facing = Facing::Right;
    } else if input.x < 0.0 {
        state.facing = Facing::Left;
    }
    state.direction = Vec2::new(input.x, 0.0);
}

/// Starts a jump if grounded. Off the ground this is a no-op: nothing is
/// buffered for later.
pub fn start_jump(
    state: &mut CharacterState,
    velocity: &mut Vec2,
    grounded: bool,
    config: &MovementConfig,
) -> bool {
    if !grounded {
        return false;
    }
    velocity.y = config.start_jump_power;
    state.is_jumping = true;
    debug!("Start jumping: {}", config.start_jump_power);
    true
}

/// Upward velocity is left alone; gravity takes it from here.
pub fn release_jump(state: &mut CharacterState, fully_held: bool) {
    if fully_held {
        debug!("Jumped with full power");
    }
    state.is_jumping = false;
}

/// Applies one event. `grounded` is only evaluated when a jump starts.
pub fn apply_control_event(
    event: ControlEvent,
    state: &mut CharacterState,
    velocity: &mut Vec2,
    config: &MovementConfig,
    grounded: impl FnOnce() -> bool,
) {
    match event {
        ControlEvent::Move(input) => apply_move(state, input),
        ControlEvent::JumpStarted => {
            start_jump(state, velocity, grounded(), config);
        }
        ControlEvent::JumpReleased { fully_held } => release_jump(state, fully_held),
    }
}

pub(crate) fn handle_control_events(
    mut events: MessageReader<ControlEvent>,
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut query: Query<
        (
            &Transform,
            &mut CharacterState,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    for event in events.read() {
        for (transform, mut state, mut velocity, mut sprite) in &mut query {
            let position = transform.translation.truncate();
            let size = transform.scale.truncate();

            apply_control_event(*event, &mut state, &mut velocity.0, &config, || {
                on_ground(&spatial_query, position, size, &config)
            });

            let flip_x = state.facing.flip_x();
            if sprite.flip_x != flip_x {
                sprite.flip_x = flip_x;
            }
        }
    }
}
