//! Movement domain: hold-to-jump controller with variable jump height.
//!
//! A simpler model than [`crate::movement::PlatformerController`]: no sensors,
//! no walls. Holding the button adds lift for a short window, releasing early
//! cuts the ascent, and the body's gravity scale is switched per phase.

use bevy::prelude::*;

use crate::movement::{ControllerError, Facing, HoldJumpTuning, MovementInput, PhysicsBody};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JumpHoldState {
    pub is_holding_jump: bool,
    pub has_started_jump: bool,
    pub hold_timer: f32,
}

#[derive(Component, Debug, Clone)]
pub struct HoldJumpController {
    tuning: HoldJumpTuning,
    hold: JumpHoldState,
    facing: Facing,
    horizontal: f32,
}

impl HoldJumpController {
    /// Build a controller, rejecting out-of-range tuning.
    pub fn new(tuning: HoldJumpTuning, facing: Facing) -> Result<Self, ControllerError> {
        let errors = tuning.validate();
        if !errors.is_empty() {
            return Err(ControllerError::InvalidTuning(errors));
        }

        Ok(Self {
            tuning,
            hold: JumpHoldState::default(),
            facing,
            horizontal: 0.0,
        })
    }

    /// Drop all per-life state, keeping tuning.
    pub fn reset(&mut self, facing: Facing) {
        self.hold = JumpHoldState::default();
        self.facing = facing;
        self.horizontal = 0.0;
    }

    pub fn hold_state(&self) -> JumpHoldState {
        self.hold
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn tuning(&self) -> &HoldJumpTuning {
        &self.tuning
    }

    fn is_grounded<B: PhysicsBody>(&self, body: &B) -> bool {
        body.velocity().y.abs() <= self.tuning.grounded_velocity_tolerance
    }

    pub fn tick_decision<B: PhysicsBody>(&mut self, dt: f32, input: &MovementInput, body: &mut B) {
        self.horizontal = input.horizontal;
        if input.horizontal != 0.0 {
            self.facing = Facing::from_sign(input.horizontal);
        }

        if input.jump_just_pressed {
            self.try_start_jump(body);
        }
        if input.jump_held {
            self.continue_hold(dt, body);
        }
        if input.jump_just_released {
            self.end_hold(true, body);
        }

        self.apply_adaptive_gravity(body);
    }

    pub fn tick_physics<B: PhysicsBody>(&mut self, body: &mut B) {
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(
            self.horizontal * self.tuning.move_speed,
            velocity.y,
        ));
    }

    fn try_start_jump<B: PhysicsBody>(&mut self, body: &mut B) {
        if !self.is_grounded(body) {
            return;
        }

        body.set_vertical_velocity(0.0);
        body.apply_impulse(Vec2::Y * self.tuning.initial_jump_impulse);

        self.hold = JumpHoldState {
            is_holding_jump: true,
            has_started_jump: true,
            hold_timer: 0.0,
        };
        debug!("Hold jump started: vy={:.2}", body.velocity().y);
    }

    fn continue_hold<B: PhysicsBody>(&mut self, dt: f32, body: &mut B) {
        if !self.hold.is_holding_jump || !self.hold.has_started_jump {
            return;
        }

        self.hold.hold_timer += dt;
        if self.hold.hold_timer >= self.tuning.max_hold_time {
            self.end_hold(false, body);
            return;
        }

        if body.velocity().y < self.tuning.max_upward_speed {
            body.apply_force(Vec2::Y * self.tuning.hold_force * dt);
        }
    }

    fn end_hold<B: PhysicsBody>(&mut self, early_release: bool, body: &mut B) {
        if !self.hold.has_started_jump {
            return;
        }

        self.hold.is_holding_jump = false;

        let vy = body.velocity().y;
        if early_release && vy > 0.0 {
            body.set_vertical_velocity(vy * self.tuning.jump_cut_multiplier);
            debug!("Hold jump released early: vy={:.2}", vy * self.tuning.jump_cut_multiplier);
        }
    }

    fn apply_adaptive_gravity<B: PhysicsBody>(&mut self, body: &mut B) {
        let vy = body.velocity().y;
        let scale = if vy > 0.0 {
            if self.hold.is_holding_jump {
                self.tuning.base_gravity_scale
            } else {
                self.tuning.early_release_gravity_scale
            }
        } else if vy < 0.0 {
            self.tuning.fall_gravity_scale
        } else {
            if self.is_grounded(body) {
                self.hold = JumpHoldState::default();
            }
            self.tuning.base_gravity_scale
        };
        body.set_gravity_scale(scale);
    }
}
