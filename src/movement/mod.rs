//! Movement domain: locomotion plugin wiring and public exports.

mod avian;
mod body;
mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod hold_jump;
mod resources;
mod sensors;
mod systems;
mod timers;


pub use avian::{AvianBody, OverlapProbe};
pub use body::PhysicsBody;
pub use components::{Facing, GameLayer, Ground, LocomotionPhase, Player, Wall, WallContact};
pub use controller::{
    ControllerError, DecisionOutcome, JumpKind, PlatformerController, TuningError, move_towards,
};
pub use hold_jump::{HoldJumpController, JumpHoldState};
pub use resources::{HoldJumpTuning, JumpModel, MovementInput, MovementTuning, PlayerSpawn};
pub use sensors::{ProbeLayout, ProbePoints, Probes, SensorReading, sense};
pub use timers::TimerState;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    read_input, sync_facing, tick_decision, tick_hold_jump_decision, tick_hold_jump_physics,
    tick_physics,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<HoldJumpTuning>()
            .init_resource::<PlayerSpawn>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            // Decision tick: sensors, timers and jumps once per frame
            .add_systems(
                Update,
                (
                    read_input,
                    tick_decision,
                    tick_hold_jump_decision,
                    sync_facing,
                )
                    .chain(),
            )
            // Horizontal integration at the fixed rate, before avian steps
            .add_systems(FixedUpdate, (tick_physics, tick_hold_jump_physics));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, bootstrap::respawn_on_key);
    }
}
