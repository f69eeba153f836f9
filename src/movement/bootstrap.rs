//! Movement domain: player bootstrap from the loaded movement content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Facing, GameLayer, HoldJumpController, HoldJumpTuning, JumpModel, MovementTuning,
    PlatformerController, Player, PlayerSpawn,
};

enum SpawnedController {
    WallJump(PlatformerController),
    HoldJump(HoldJumpController),
}

/// Spawn the player with the controller selected by [`PlayerSpawn::model`].
///
/// Fails startup if the selected controller cannot be built from the
/// current tuning and probe layout.
pub(crate) fn spawn_player(
    mut commands: Commands,
    spawn: Res<PlayerSpawn>,
    tuning: Res<MovementTuning>,
    hold_tuning: Res<HoldJumpTuning>,
    existing_player: Query<Entity, With<Player>>,
) -> Result {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return Ok(());
    }

    // Bad tuning or layout spawns nothing
    let controller = match spawn.model {
        JumpModel::WallJump => SpawnedController::WallJump(PlatformerController::new(
            tuning.clone(),
            &spawn.probes,
            Facing::Right,
        )?),
        JumpModel::HoldJump => SpawnedController::HoldJump(HoldJumpController::new(
            hold_tuning.clone(),
            Facing::Right,
        )?),
    };

    let mut player = commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(spawn.size),
            ..default()
        },
        Transform::from_translation(spawn.position.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(spawn.size.x, spawn.size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(spawn.gravity_scale),
            Mass(1.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    match controller {
        SpawnedController::WallJump(controller) => {
            player.insert(controller);
        }
        SpawnedController::HoldJump(controller) => {
            player.insert((controller, GravityScale(hold_tuning.base_gravity_scale)));
        }
    }

    info!(
        "Spawning player: model={:?}, size={}, position={}, walk={}, run={}, jump={}",
        spawn.model,
        spawn.size,
        spawn.position,
        tuning.walk_speed,
        tuning.run_speed,
        tuning.jump_force
    );

    Ok(())
}

/// Put the player back at its spawn point with no velocity and a fresh
/// controller state.
#[cfg(feature = "dev-tools")]
pub(crate) fn respawn_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    spawn: Res<PlayerSpawn>,
    hold_tuning: Res<HoldJumpTuning>,
    mut query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            Option<&mut PlatformerController>,
            Option<&mut HoldJumpController>,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (mut transform, mut velocity, mut gravity_scale, wall_jump, hold_jump) in &mut query {
        transform.translation = spawn.position.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;

        if let Some(mut controller) = wall_jump {
            controller.reset(Facing::Right);
            gravity_scale.0 = spawn.gravity_scale;
        }
        if let Some(mut controller) = hold_jump {
            controller.reset(Facing::Right);
            gravity_scale.0 = hold_tuning.base_gravity_scale;
        }

        info!("Respawned player at {}", spawn.position);
    }
}
