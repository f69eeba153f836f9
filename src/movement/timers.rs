//! Movement domain: jump and wall countdowns.

use crate::movement::MovementTuning;

/// Countdowns in seconds. Decrements stop at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerState {
    /// Grace window after leaving the ground.
    pub coyote: f32,
    /// How long an early jump press stays remembered.
    pub jump_buffer: f32,
    pub jump_cooldown: f32,
    /// Refreshed while wall-sliding. Nothing reads it yet.
    pub wall_stick: f32,
}

fn countdown(remaining: f32, dt: f32) -> f32 {
    (remaining - dt).max(0.0)
}

impl TimerState {
    /// Advance coyote, buffer and cooldown for one decision tick.
    pub fn tick(&mut self, dt: f32, grounded: bool, jump_pressed: bool, tuning: &MovementTuning) {
        self.coyote = if grounded {
            tuning.coyote_time
        } else {
            countdown(self.coyote, dt)
        };

        self.jump_buffer = if jump_pressed {
            tuning.jump_buffer_time
        } else {
            countdown(self.jump_buffer, dt)
        };

        self.jump_cooldown = countdown(self.jump_cooldown, dt);
    }

    pub fn tick_wall_stick(&mut self, dt: f32, wall_sliding: bool, tuning: &MovementTuning) {
        self.wall_stick = if wall_sliding {
            tuning.wall_stick_time
        } else {
            countdown(self.wall_stick, dt)
        };
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer > 0.0
    }

    pub fn coyote_open(&self) -> bool {
        self.coyote > 0.0
    }

    pub fn cooldown_ready(&self) -> bool {
        self.jump_cooldown <= 0.0
    }

    /// Bookkeeping shared by every kind of jump.
    pub fn consume_jump(&mut self, tuning: &MovementTuning) {
        self.coyote = 0.0;
        self.jump_buffer = 0.0;
        self.jump_cooldown = tuning.jump_cooldown;
    }
}
