//! Movement domain: decision and fixed-step systems driving the controllers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianBody, Facing, HoldJumpController, MovementInput, OverlapProbe, PlatformerController,
    Player,
};

type BodyComponents = (
    &'static mut LinearVelocity,
    &'static mut GravityScale,
    &'static ComputedMass,
);

pub(crate) fn tick_decision(
    time: Res<Time>,
    input: Res<MovementInput>,
    gravity: Res<Gravity>,
    overlaps: OverlapProbe,
    mut query: Query<
        (Entity, &Transform, &mut PlatformerController, BodyComponents),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut controller, (mut velocity, mut gravity_scale, mass)) in &mut query
    {
        let mut body = AvianBody::new(
            entity,
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            mass,
            gravity.0,
            &overlaps,
        );

        let phase_before = controller.phase();
        let outcome = controller.tick_decision(dt, &input, &mut body);

        if controller.phase() != phase_before {
            debug!(
                "Phase {:?} -> {:?} (wall={:?})",
                phase_before,
                controller.phase(),
                controller.sensors().wall
            );
        }
        if let Some(kind) = outcome.jump {
            trace!("{:?} jump fired, facing={:?}", kind, controller.facing());
        }
    }
}

pub(crate) fn tick_physics(
    time: Res<Time>,
    gravity: Res<Gravity>,
    overlaps: OverlapProbe,
    mut query: Query<
        (Entity, &Transform, &mut PlatformerController, BodyComponents),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut controller, (mut velocity, mut gravity_scale, mass)) in &mut query
    {
        let mut body = AvianBody::new(
            entity,
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            mass,
            gravity.0,
            &overlaps,
        );
        controller.tick_physics(dt, &mut body);
    }
}

pub(crate) fn tick_hold_jump_decision(
    time: Res<Time>,
    input: Res<MovementInput>,
    gravity: Res<Gravity>,
    overlaps: OverlapProbe,
    mut query: Query<(Entity, &Transform, &mut HoldJumpController, BodyComponents), With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut controller, (mut velocity, mut gravity_scale, mass)) in &mut query
    {
        let mut body = AvianBody::new(
            entity,
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            mass,
            gravity.0,
            &overlaps,
        );
        controller.tick_decision(dt, &input, &mut body);
    }
}

pub(crate) fn tick_hold_jump_physics(
    gravity: Res<Gravity>,
    overlaps: OverlapProbe,
    mut query: Query<(Entity, &Transform, &mut HoldJumpController, BodyComponents), With<Player>>,
) {
    for (entity, transform, mut controller, (mut velocity, mut gravity_scale, mass)) in &mut query
    {
        let mut body = AvianBody::new(
            entity,
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            mass,
            gravity.0,
            &overlaps,
        );
        controller.tick_physics(&mut body);
    }
}

/// Mirror the sprite to match controller facing.
pub(crate) fn sync_facing(
    mut query: Query<
        (
            &mut Sprite,
            Option<&PlatformerController>,
            Option<&HoldJumpController>,
        ),
        With<Player>,
    >,
) {
    for (mut sprite, wall_jump, hold_jump) in &mut query {
        let facing = wall_jump
            .map(PlatformerController::facing)
            .or(hold_jump.map(HoldJumpController::facing));
        if let Some(facing) = facing {
            let flip = facing == Facing::Left;
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }
    }
}
