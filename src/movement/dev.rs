//! Movement domain: a small room for trying out the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let solid = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut block = |color: Color, center: Vec2, size: Vec2| {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            solid,
        ));
    };

    // Floor and outer walls
    block(ground_color, Vec2::new(0.0, -5.0), Vec2::new(24.0, 1.0));
    block(wall_color, Vec2::new(-12.5, 0.0), Vec2::new(1.0, 11.0));
    block(wall_color, Vec2::new(12.5, 0.0), Vec2::new(1.0, 11.0));

    // Platforms, stepping upward
    block(platform_color, Vec2::new(-6.0, -2.5), Vec2::new(4.0, 0.5));
    block(platform_color, Vec2::new(5.0, -1.0), Vec2::new(4.0, 0.5));
    block(platform_color, Vec2::new(0.0, 1.5), Vec2::new(3.0, 0.5));

    // Narrow gap between a pillar and the left wall, just wider than the player
    block(wall_color, Vec2::new(-10.47, -3.0), Vec2::new(0.5, 3.0));

    info!("Spawned test room");
}
