//! Movement domain: player spawn and collaborator checks.

use avian2d::prelude::*;
use bevy::ecs::error::Result;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementConfig, Player};

/// Player body extents. Must stay larger than twice the probe offsets so no
/// probe ray starts on a body corner.
pub const PLAYER_SIZE: Vec2 = Vec2::new(1.2, 1.4);

/// A player entity is missing a component the controller drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCollaborator {
    pub entity: Entity,
    pub collaborator: &'static str,
}

impl std::fmt::Display for MissingCollaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {:?} has no {}; the controller cannot run without it",
            self.entity, self.collaborator
        )
    }
}

impl std::error::Error for MissingCollaborator {}

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    if !config.fits_body(PLAYER_SIZE) {
        warn!(
            "Probe offsets ({}, {}) reach the corners of a {:?} body; floors will read as walls",
            config.ground_probe_offset_x, config.wall_probe_offset_y, PLAYER_SIZE
        );
    }

    commands.spawn((
        Player,
        // Rendering; sprite and collider are unit sized, the scale is the body
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::ONE),
            ..default()
        },
        Transform::from_xyz(0.0, -2.0, 0.0).with_scale(PLAYER_SIZE.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(1.0, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the integrator
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    info!("Spawned player");
}

/// Checks one player's collaborators.
pub fn check_collaborators(
    entity: Entity,
    has_body: bool,
    has_sprite: bool,
) -> Result<(), MissingCollaborator> {
    if !has_body {
        return Err(MissingCollaborator {
            entity,
            collaborator: "rigid body",
        });
    }
    if !has_sprite {
        return Err(MissingCollaborator {
            entity,
            collaborator: "sprite",
        });
    }
    Ok(())
}

/// Fails the app at startup if a player cannot be driven.
pub(crate) fn verify_player_collaborators(
    query: Query<(Entity, Has<RigidBody>, Has<Sprite>), With<Player>>,
) -> Result {
    for (entity, has_body, has_sprite) in &query {
        if let Err(missing) = check_collaborators(entity, has_body, has_sprite) {
            error!("{}", missing);
            return Err(missing.into());
        }
    }
    Ok(())
}
