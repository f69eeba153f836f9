use avian2d::prelude::*;
use bevy::prelude::*;
use platformer_controller::prelude::*;

/// Base gravity in meters per second squared.
const GRAVITY: f32 = 9.81;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Controller".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .add_plugins((CorePlugin, ContentPlugin, MovementPlugin))
        .run();
}
