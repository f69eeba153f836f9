//! Serialized movement content and its conversion into runtime resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{
    GameLayer, HoldJumpTuning, JumpModel, MovementTuning, PlayerSpawn, ProbeLayout,
};

/// Top-level shape of `movement.ron`.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect, PartialEq)]
pub struct MovementContentDef {
    #[serde(default)]
    pub model: JumpModelDef,
    pub body: BodyDef,
    pub probes: ProbesDef,
    pub tuning: MovementTuningDef,
    #[serde(default)]
    pub hold_jump: HoldJumpTuningDef,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, Reflect, PartialEq, Eq)]
pub enum JumpModelDef {
    #[default]
    WallJump,
    HoldJump,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, PartialEq)]
pub struct BodyDef {
    pub width: f32,
    pub height: f32,
    pub gravity_scale: f32,
    pub spawn: (f32, f32),
}

/// Probe offsets from the body center while facing right.
/// A missing entry stays `None` and is rejected when the controller is built.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect, PartialEq)]
pub struct ProbesDef {
    #[serde(default)]
    pub ground: Option<(f32, f32)>,
    #[serde(default)]
    pub wall_left: Option<(f32, f32)>,
    #[serde(default)]
    pub wall_right: Option<(f32, f32)>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, PartialEq)]
pub struct MovementTuningDef {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub ground_accel: f32,
    pub ground_decel: f32,
    pub air_accel: f32,
    pub air_decel: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub jump_cut_multiplier: f32,
    pub fall_gravity_multiplier: f32,
    pub jump_cooldown: f32,
    pub ground_check_radius: f32,
    pub ground_layers: Vec<GameLayer>,
    pub wall_check_radius: f32,
    pub wall_layers: Vec<GameLayer>,
    pub wall_slide_max_speed: f32,
    pub wall_jump_force: (f32, f32),
    pub wall_stick_time: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, PartialEq)]
#[serde(default)]
pub struct HoldJumpTuningDef {
    pub move_speed: f32,
    pub base_gravity_scale: f32,
    pub fall_gravity_scale: f32,
    pub early_release_gravity_scale: f32,
    pub initial_jump_impulse: f32,
    pub max_hold_time: f32,
    pub hold_force: f32,
    pub max_upward_speed: f32,
    pub jump_cut_multiplier: f32,
    pub grounded_velocity_tolerance: f32,
}

impl Default for HoldJumpTuningDef {
    fn default() -> Self {
        let tuning = HoldJumpTuning::default();
        Self {
            move_speed: tuning.move_speed,
            base_gravity_scale: tuning.base_gravity_scale,
            fall_gravity_scale: tuning.fall_gravity_scale,
            early_release_gravity_scale: tuning.early_release_gravity_scale,
            initial_jump_impulse: tuning.initial_jump_impulse,
            max_hold_time: tuning.max_hold_time,
            hold_force: tuning.hold_force,
            max_upward_speed: tuning.max_upward_speed,
            jump_cut_multiplier: tuning.jump_cut_multiplier,
            grounded_velocity_tolerance: tuning.grounded_velocity_tolerance,
        }
    }
}

fn vec2((x, y): (f32, f32)) -> Vec2 {
    Vec2::new(x, y)
}

impl From<&MovementTuningDef> for MovementTuning {
    fn from(def: &MovementTuningDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            run_speed: def.run_speed,
            ground_accel: def.ground_accel,
            ground_decel: def.ground_decel,
            air_accel: def.air_accel,
            air_decel: def.air_decel,
            jump_force: def.jump_force,
            coyote_time: def.coyote_time,
            jump_buffer_time: def.jump_buffer_time,
            jump_cut_multiplier: def.jump_cut_multiplier,
            fall_gravity_multiplier: def.fall_gravity_multiplier,
            jump_cooldown: def.jump_cooldown,
            ground_check_radius: def.ground_check_radius,
            ground_mask: GameLayer::mask_of(&def.ground_layers),
            wall_check_radius: def.wall_check_radius,
            wall_mask: GameLayer::mask_of(&def.wall_layers),
            wall_slide_max_speed: def.wall_slide_max_speed,
            wall_jump_force: vec2(def.wall_jump_force),
            wall_stick_time: def.wall_stick_time,
        }
    }
}

impl From<&HoldJumpTuningDef> for HoldJumpTuning {
    fn from(def: &HoldJumpTuningDef) -> Self {
        Self {
            move_speed: def.move_speed,
            base_gravity_scale: def.base_gravity_scale,
            fall_gravity_scale: def.fall_gravity_scale,
            early_release_gravity_scale: def.early_release_gravity_scale,
            initial_jump_impulse: def.initial_jump_impulse,
            max_hold_time: def.max_hold_time,
            hold_force: def.hold_force,
            max_upward_speed: def.max_upward_speed,
            jump_cut_multiplier: def.jump_cut_multiplier,
            grounded_velocity_tolerance: def.grounded_velocity_tolerance,
        }
    }
}

impl From<&ProbesDef> for ProbeLayout {
    fn from(def: &ProbesDef) -> Self {
        Self {
            ground: def.ground.map(vec2),
            wall_left: def.wall_left.map(vec2),
            wall_right: def.wall_right.map(vec2),
        }
    }
}

impl MovementContentDef {
    pub fn player_spawn(&self) -> PlayerSpawn {
        PlayerSpawn {
            model: match self.model {
                JumpModelDef::WallJump => JumpModel::WallJump,
                JumpModelDef::HoldJump => JumpModel::HoldJump,
            },
            size: Vec2::new(self.body.width, self.body.height),
            position: vec2(self.body.spawn),
            gravity_scale: self.body.gravity_scale,
            probes: ProbeLayout::from(&self.probes),
        }
    }

    pub fn movement_tuning(&self) -> MovementTuning {
        MovementTuning::from(&self.tuning)
    }

    pub fn hold_jump_tuning(&self) -> HoldJumpTuning {
        HoldJumpTuning::from(&self.hold_jump)
    }
}
