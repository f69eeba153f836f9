//! Movement domain: the wall-jump platformer controller.
//!
//! The controller is passive. A host calls [`PlatformerController::tick_decision`]
//! once per rendered frame and [`PlatformerController::tick_physics`] once per
//! fixed step, handing in the body to act on each time.

use bevy::prelude::*;

use crate::movement::sensors::{Probes, SensorReading, sense};
use crate::movement::{
    Facing, LocomotionPhase, MovementInput, MovementTuning, PhysicsBody, ProbeLayout, TimerState,
};

/// Horizontal target speeds below this count as "no input".
const INPUT_EPSILON: f32 = 0.01;

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl TuningError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Reasons a controller refuses to start.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// A sensor anchor was not provided.
    MissingAnchor(&'static str),
    InvalidTuning(Vec<TuningError>),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::MissingAnchor(anchor) => {
                write!(f, "missing sensor anchor '{anchor}'")
            }
            ControllerError::InvalidTuning(errors) => {
                write!(f, "invalid movement tuning: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ControllerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
}

/// What a decision tick did, for hosts that react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionOutcome {
    pub jump: Option<JumpKind>,
    pub jump_cut: bool,
    pub facing_flipped: bool,
}

/// Per-character locomotion state plus the tuning it was built with.
#[derive(Component, Debug, Clone)]
pub struct PlatformerController {
    tuning: MovementTuning,
    probes: Probes,
    facing: Facing,
    timers: TimerState,
    sensors: SensorReading,
    wall_sliding: bool,
    jump_cut_spent: bool,
    phase: LocomotionPhase,
    last_input: MovementInput,
}

impl PlatformerController {
    /// Build a controller, rejecting missing anchors and out-of-range tuning.
    pub fn new(
        tuning: MovementTuning,
        layout: &ProbeLayout,
        facing: Facing,
    ) -> Result<Self, ControllerError> {
        let probes = layout.resolve()?;
        let errors = tuning.validate();
        if !errors.is_empty() {
            return Err(ControllerError::InvalidTuning(errors));
        }

        Ok(Self {
            tuning,
            probes,
            facing,
            timers: TimerState::default(),
            sensors: SensorReading::default(),
            wall_sliding: false,
            jump_cut_spent: false,
            phase: LocomotionPhase::default(),
            last_input: MovementInput::default(),
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn timers(&self) -> &TimerState {
        &self.timers
    }

    pub fn sensors(&self) -> SensorReading {
        self.sensors
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.wall_sliding
    }

    pub fn phase(&self) -> LocomotionPhase {
        self.phase
    }

    /// Drop all per-life state, keeping tuning and probes.
    pub fn reset(&mut self, facing: Facing) {
        self.facing = facing;
        self.timers = TimerState::default();
        self.sensors = SensorReading::default();
        self.wall_sliding = false;
        self.jump_cut_spent = false;
        self.phase = LocomotionPhase::default();
        self.last_input = MovementInput::default();
    }

    /// Sense, advance timers, then resolve jumps and gravity for one frame.
    pub fn tick_decision<B: PhysicsBody>(
        &mut self,
        dt: f32,
        input: &MovementInput,
        body: &mut B,
    ) -> DecisionOutcome {
        self.last_input = *input;
        let mut outcome = DecisionOutcome::default();

        let points = self.probes.world(body.position(), self.facing);
        self.sensors = sense(body, &points, &self.tuning);
        let grounded = self.sensors.grounded;

        self.timers
            .tick(dt, grounded, input.jump_just_pressed, &self.tuning);
        if grounded {
            self.jump_cut_spent = false;
        }

        self.wall_sliding =
            !grounded && self.sensors.wall.is_touching() && body.velocity().y < 0.0;
        if self.wall_sliding {
            self.clamp_wall_slide(body);
        }
        self.timers
            .tick_wall_stick(dt, self.wall_sliding, &self.tuning);

        if self.timers.jump_buffered() && self.wall_sliding && self.timers.cooldown_ready() {
            let away = -self.sensors.wall.direction();
            outcome.facing_flipped |= self.wall_jump(away, body);
            outcome.jump = Some(JumpKind::Wall);
        } else if self.timers.jump_buffered()
            && self.timers.coyote_open()
            && self.timers.cooldown_ready()
        {
            self.jump(body);
            outcome.jump = Some(JumpKind::Ground);
        }

        let mut velocity = body.velocity();
        if !grounded && !input.jump_held && velocity.y > 0.0 && !self.jump_cut_spent {
            velocity.y *= self.tuning.jump_cut_multiplier;
            self.jump_cut_spent = true;
            outcome.jump_cut = true;
            debug!("Jump cut: vy={:.2}", velocity.y);
        }

        if velocity.y < 0.0 {
            velocity.y += body.gravity().y
                * (self.tuning.fall_gravity_multiplier - 1.0)
                * body.gravity_scale()
                * dt;
        }
        if self.wall_sliding {
            velocity.y = velocity.y.max(self.tuning.wall_slide_max_speed);
        }
        body.set_velocity(velocity);

        let wants = input.horizontal;
        if (wants > 0.0 && self.facing == Facing::Left)
            || (wants < 0.0 && self.facing == Facing::Right)
        {
            self.facing = self.facing.flipped();
            outcome.facing_flipped = !outcome.facing_flipped;
        }

        self.phase = if grounded {
            LocomotionPhase::Grounded
        } else if self.wall_sliding {
            LocomotionPhase::WallSliding
        } else if velocity.y > 0.0 {
            LocomotionPhase::Rising
        } else {
            LocomotionPhase::Falling
        };

        outcome
    }

    /// Move horizontal velocity toward the input target for one fixed step.
    pub fn tick_physics<B: PhysicsBody>(&mut self, fixed_dt: f32, body: &mut B) {
        let speed = if self.last_input.run_held {
            self.tuning.run_speed
        } else {
            self.tuning.walk_speed
        };
        let target = self.last_input.horizontal * speed;
        let accelerating = target.abs() > INPUT_EPSILON;

        let rate = match (self.sensors.grounded, accelerating) {
            (true, true) => self.tuning.ground_accel,
            (true, false) => self.tuning.ground_decel,
            (false, true) => self.tuning.air_accel,
            (false, false) => self.tuning.air_decel,
        };

        let velocity = body.velocity();
        let pushing_into_wall =
            accelerating && target.signum() == self.sensors.wall.direction();
        let vx = if self.wall_sliding && pushing_into_wall {
            velocity.x
        } else {
            move_towards(velocity.x, target, rate * fixed_dt)
        };

        body.set_velocity(Vec2::new(vx, velocity.y));
    }

    fn clamp_wall_slide<B: PhysicsBody>(&self, body: &mut B) {
        let vy = body.velocity().y;
        if vy < self.tuning.wall_slide_max_speed {
            body.set_vertical_velocity(self.tuning.wall_slide_max_speed);
        }
    }

    fn jump<B: PhysicsBody>(&mut self, body: &mut B) {
        body.set_vertical_velocity(0.0);
        body.apply_impulse(Vec2::Y * self.tuning.jump_force);
        self.timers.consume_jump(&self.tuning);
        self.jump_cut_spent = false;
        debug!(
            "Ground jump: grounded={}, vy={:.2}",
            self.sensors.grounded,
            body.velocity().y
        );
    }

    /// Returns whether facing changed.
    fn wall_jump<B: PhysicsBody>(&mut self, away: f32, body: &mut B) -> bool {
        body.set_vertical_velocity(0.0);
        let force = self.tuning.wall_jump_force;
        body.apply_impulse(Vec2::new(away * force.x, force.y));

        let facing = Facing::from_sign(away);
        let flipped = facing != self.facing;
        self.facing = facing;

        self.timers.consume_jump(&self.tuning);
        self.jump_cut_spent = false;
        debug!(
            "Wall jump: wall={:?}, away={}, velocity={:?}",
            self.sensors.wall,
            away,
            body.velocity()
        );
        flipped
    }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
