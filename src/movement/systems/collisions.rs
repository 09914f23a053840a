//! Movement domain: ground and wall probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementConfig, Player, ProbeResult};

/// Ray intersection query against world geometry.
pub trait ProbeCaster {
    /// Returns true if a ray from `origin` hits anything on `layers` within
    /// `max_distance`.
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32, layers: LayerMask) -> bool;
}

impl ProbeCaster for SpatialQuery<'_, '_> {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32, layers: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(layers);
        self.cast_ray(origin, direction, max_distance, true, &filter)
            .is_some()
    }
}

/// A single probe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub origin: Vec2,
    pub direction: Dir2,
    pub distance: f32,
}

impl ProbeRay {
    pub fn end(&self) -> Vec2 {
        self.origin + *self.direction * self.distance
    }

    fn hits(&self, caster: &impl ProbeCaster, layers: LayerMask) -> bool {
        caster.cast(self.origin, self.direction, self.distance, layers)
    }
}

/// Two downward rays from the bottom edge, offset left and right of centre.
/// `size` is the body's full extent (its transform scale).
pub fn ground_rays(position: Vec2, size: Vec2, config: &MovementConfig) -> [ProbeRay; 2] {
    let base = position - Vec2::new(0.0, size.y / 2.0);
    let offset = Vec2::new(config.ground_probe_offset_x, 0.0);

    [base - offset, base + offset].map(|origin| ProbeRay {
        origin,
        direction: Dir2::NEG_Y,
        distance: config.ground_probe_distance,
    })
}

/// Top and bottom rays pointing outward from the left edge.
pub fn left_wall_rays(position: Vec2, size: Vec2, config: &MovementConfig) -> [ProbeRay; 2] {
    wall_rays(position - Vec2::new(size.x / 2.0, 0.0), Dir2::NEG_X, config)
}

/// Top and bottom rays pointing outward from the right edge.
pub fn right_wall_rays(position: Vec2, size: Vec2, config: &MovementConfig) -> [ProbeRay; 2] {
    wall_rays(position + Vec2::new(size.x / 2.0, 0.0), Dir2::X, config)
}

fn wall_rays(edge: Vec2, direction: Dir2, config: &MovementConfig) -> [ProbeRay; 2] {
    let offset = Vec2::new(0.0, config.wall_probe_offset_y);

    [edge + offset, edge - offset].map(|origin| ProbeRay {
        origin,
        direction,
        distance: config.wall_probe_distance,
    })
}

fn any_hit(rays: &[ProbeRay], caster: &impl ProbeCaster, layers: LayerMask) -> bool {
    rays.iter().any(|ray| ray.hits(caster, layers))
}

/// Whether the character may start a jump.
pub fn on_ground(
    caster: &impl ProbeCaster,
    position: Vec2,
    size: Vec2,
    config: &MovementConfig,
) -> bool {
    any_hit(
        &ground_rays(position, size, config),
        caster,
        config.ground_mask(),
    )
}

pub fn probe_contacts(
    caster: &impl ProbeCaster,
    position: Vec2,
    size: Vec2,
    config: &MovementConfig,
) -> ProbeResult {
    let layers = config.ground_mask();

    ProbeResult {
        on_ground: on_ground(caster, position, size, config),
        on_left_wall: any_hit(&left_wall_rays(position, size, config), caster, layers),
        on_right_wall: any_hit(&right_wall_rays(position, size, config), caster, layers),
    }
}

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut query: Query<(&Transform, &mut ProbeResult), With<Player>>,
) {
    for (transform, mut probes) in &mut query {
        let position = transform.translation.truncate();
        let size = transform.scale.truncate();
        let contacts = probe_contacts(&spatial_query, position, size, &config);

        if contacts.on_left_wall != probes.on_left_wall
            || contacts.on_right_wall != probes.on_right_wall
        {
            trace!(
                "Wall contact changed: left={}, right={}",
                contacts.on_left_wall, contacts.on_right_wall
            );
        }

        *probes = contacts;
    }
}
