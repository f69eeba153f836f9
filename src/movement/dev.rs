//! Movement domain: debug-only test room for trying out the controllers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// Static box with a sprite, a collider and the given layer.
fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layer: GameLayer,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ground_color,
        Vec2::new(0.0, -5.0),
        Vec2::new(20.0, 1.0),
    );

    // Side walls, tall enough to wall-jump up
    for x in [-10.5, 10.5] {
        spawn_block(
            &mut commands,
            Wall,
            GameLayer::Wall,
            wall_color,
            Vec2::new(x, 1.25),
            Vec2::new(1.0, 12.5),
        );
    }

    // Platforms, left low, right higher, center highest
    for (center, width) in [
        (Vec2::new(-6.25, -1.25), 3.75),
        (Vec2::new(6.25, 1.25), 3.75),
        (Vec2::new(0.0, 3.75), 3.0),
    ] {
        spawn_block(
            &mut commands,
            Ground,
            GameLayer::Ground,
            platform_color,
            center,
            Vec2::new(width, 0.5),
        );
    }

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        Wall,
        GameLayer::Wall,
        wall_color,
        Vec2::new(-2.5, -2.0),
        Vec2::new(0.75, 5.0),
    );
}
