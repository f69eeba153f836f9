//! Physics body abstraction.
//!
//! This module defines what a controller needs from the rigid body it drives.
//! The avian2d implementation lives in [`crate::movement::avian`]; tests use an
//! in-memory body.

use bevy::prelude::*;

/// Capabilities a physics backend must expose for one character body.
///
/// All methods are synchronous and bounded. Velocity changes made through
/// this trait are visible to the next read in the same tick.
pub trait PhysicsBody {
    /// Identity used to tell the body's own colliders apart from the world.
    type Id: Copy + PartialEq + std::fmt::Debug;

    fn id(&self) -> Self::Id;

    /// World-space center of the body.
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Apply an instantaneous change in momentum.
    fn apply_impulse(&mut self, impulse: Vec2);

    /// Apply a continuous force that the caller has already scaled by its tick time.
    fn apply_force(&mut self, force: Vec2);

    /// Multiplier the physics substrate applies to world gravity for this body.
    fn gravity_scale(&self) -> f32;

    fn set_gravity_scale(&mut self, scale: f32);

    /// World gravity before the body's scale is applied.
    fn gravity(&self) -> Vec2;

    /// Overlap a circle against colliders in `mask`.
    ///
    /// Returns the body owning the first collider hit, skipping every collider
    /// owned by `exclude`.
    fn overlap_circle(
        &self,
        point: Vec2,
        radius: f32,
        mask: u32,
        exclude: Self::Id,
    ) -> Option<Self::Id>;

    /// Replace only the vertical component of the velocity.
    fn set_vertical_velocity(&mut self, vy: f32) {
        let velocity = self.velocity();
        self.set_velocity(Vec2::new(velocity.x, vy));
    }
}
