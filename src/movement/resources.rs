//! Movement domain: tuning, spawn and input resources.

use bevy::prelude::*;

use crate::movement::{GameLayer, ProbeLayout, TuningError};

/// Author-set parameters for the wall-jump controller.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub ground_accel: f32,
    pub ground_decel: f32,
    pub air_accel: f32,
    pub air_decel: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Scale applied to upward velocity on early release, in [0, 1].
    pub jump_cut_multiplier: f32,
    /// Total gravity while falling, as a multiple of normal gravity.
    pub fall_gravity_multiplier: f32,
    /// Minimum time between two jumps of any kind.
    pub jump_cooldown: f32,
    pub ground_check_radius: f32,
    pub ground_mask: u32,
    pub wall_check_radius: f32,
    pub wall_mask: u32,
    /// Fall speed floor while wall-sliding. Negative.
    pub wall_slide_max_speed: f32,
    pub wall_jump_force: Vec2,
    pub wall_stick_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.5,
            ground_accel: 60.0,
            ground_decel: 70.0,
            air_accel: 45.0,
            air_decel: 45.0,
            jump_force: 15.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            jump_cut_multiplier: 0.5,
            fall_gravity_multiplier: 1.5,
            jump_cooldown: 0.2,
            ground_check_radius: 0.18,
            ground_mask: GameLayer::mask_of(&[GameLayer::Ground, GameLayer::Wall]),
            wall_check_radius: 0.15,
            wall_mask: GameLayer::mask_of(&[GameLayer::Wall]),
            wall_slide_max_speed: -3.2,
            wall_jump_force: Vec2::new(11.0, 15.5),
            wall_stick_time: 0.1,
        }
    }
}

impl MovementTuning {
    /// Check every value against its allowed range.
    /// Returns all violations, empty if the tuning is usable.
    pub fn validate(&self) -> Vec<TuningError> {
        let mut errors = Vec::new();

        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("ground_accel", self.ground_accel),
            ("ground_decel", self.ground_decel),
            ("air_accel", self.air_accel),
            ("air_decel", self.air_decel),
            ("jump_force", self.jump_force),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("fall_gravity_multiplier", self.fall_gravity_multiplier),
            ("jump_cooldown", self.jump_cooldown),
            ("wall_stick_time", self.wall_stick_time),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                errors.push(TuningError::new(field, format!("must be >= 0, got {value}")));
            }
        }

        for (field, value) in [
            ("ground_check_radius", self.ground_check_radius),
            ("wall_check_radius", self.wall_check_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(TuningError::new(field, format!("must be > 0, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.jump_cut_multiplier) {
            errors.push(TuningError::new(
                "jump_cut_multiplier",
                format!("must be within [0, 1], got {}", self.jump_cut_multiplier),
            ));
        }

        if !self.wall_slide_max_speed.is_finite() || self.wall_slide_max_speed >= 0.0 {
            errors.push(TuningError::new(
                "wall_slide_max_speed",
                format!("must be negative, got {}", self.wall_slide_max_speed),
            ));
        }

        if !self.wall_jump_force.is_finite() {
            errors.push(TuningError::new("wall_jump_force", "must be finite"));
        }

        errors
    }
}

/// Tuning for the hold-to-jump controller.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct HoldJumpTuning {
    pub move_speed: f32,
    pub base_gravity_scale: f32,
    pub fall_gravity_scale: f32,
    pub early_release_gravity_scale: f32,
    pub initial_jump_impulse: f32,
    /// How long a held button keeps adding lift.
    pub max_hold_time: f32,
    pub hold_force: f32,
    pub max_upward_speed: f32,
    pub jump_cut_multiplier: f32,
    /// Vertical speed under which the body counts as standing.
    pub grounded_velocity_tolerance: f32,
}

impl Default for HoldJumpTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            base_gravity_scale: 3.0,
            fall_gravity_scale: 4.5,
            early_release_gravity_scale: 5.0,
            initial_jump_impulse: 10.0,
            max_hold_time: 0.2,
            hold_force: 18.0,
            max_upward_speed: 14.0,
            jump_cut_multiplier: 0.5,
            grounded_velocity_tolerance: 0.05,
        }
    }
}

impl HoldJumpTuning {
    /// Same contract as [`MovementTuning::validate`].
    pub fn validate(&self) -> Vec<TuningError> {
        let mut errors = Vec::new();

        let non_negative = [
            ("move_speed", self.move_speed),
            ("base_gravity_scale", self.base_gravity_scale),
            ("fall_gravity_scale", self.fall_gravity_scale),
            ("early_release_gravity_scale", self.early_release_gravity_scale),
            ("initial_jump_impulse", self.initial_jump_impulse),
            ("hold_force", self.hold_force),
            ("max_upward_speed", self.max_upward_speed),
            ("grounded_velocity_tolerance", self.grounded_velocity_tolerance),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                errors.push(TuningError::new(field, format!("must be >= 0, got {value}")));
            }
        }

        if !self.max_hold_time.is_finite() || self.max_hold_time <= 0.0 {
            errors.push(TuningError::new(
                "max_hold_time",
                format!("must be > 0, got {}", self.max_hold_time),
            ));
        }

        if !(0.0..=1.0).contains(&self.jump_cut_multiplier) {
            errors.push(TuningError::new(
                "jump_cut_multiplier",
                format!("must be within [0, 1], got {}", self.jump_cut_multiplier),
            ));
        }

        errors
    }
}

/// Which jump model drives the spawned player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpModel {
    #[default]
    WallJump,
    HoldJump,
}

/// Body shape, placement and anchors for the spawned player.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerSpawn {
    pub model: JumpModel,
    pub size: Vec2,
    pub position: Vec2,
    pub gravity_scale: f32,
    pub probes: ProbeLayout,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            model: JumpModel::WallJump,
            size: Vec2::new(0.8, 1.6),
            position: Vec2::new(0.0, 2.5),
            gravity_scale: 3.0,
            probes: ProbeLayout::for_box(Vec2::new(0.4, 0.8)),
        }
    }
}

/// Input snapshot for one decision tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    /// Raw horizontal axis in [-1, 1].
    pub horizontal: f32,
    pub run_held: bool,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(MovementTuning::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_bad_field() {
        let tuning = MovementTuning {
            walk_speed: -1.0,
            jump_cut_multiplier: 1.5,
            wall_slide_max_speed: 3.2,
            wall_check_radius: 0.0,
            ..default()
        };

        let fields: Vec<_> = tuning.validate().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "walk_speed",
                "wall_check_radius",
                "jump_cut_multiplier",
                "wall_slide_max_speed"
            ]
        );
    }

    #[test]
    fn test_default_hold_jump_tuning_is_valid() {
        assert!(HoldJumpTuning::default().validate().is_empty());
    }

    #[test]
    fn test_hold_jump_validate_reports_every_bad_field() {
        let tuning = HoldJumpTuning {
            hold_force: f32::INFINITY,
            max_hold_time: -1.0,
            jump_cut_multiplier: 2.0,
            ..default()
        };

        let fields: Vec<_> = tuning.validate().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["hold_force", "max_hold_time", "jump_cut_multiplier"]
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let tuning = MovementTuning {
            coyote_time: f32::NAN,
            ..default()
        };
        assert_eq!(tuning.validate().len(), 1);
    }
}
