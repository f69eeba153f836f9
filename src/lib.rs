//! Platformer locomotion: a wall-jump character controller with coyote time,
//! jump buffering, jump cut and adaptive fall gravity, driven through Bevy and
//! avian2d.

pub mod content;
pub mod core;
pub mod movement;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::content::ContentPlugin;
    pub use crate::core::CorePlugin;
    pub use crate::movement::{
        Facing, HoldJumpController, MovementInput, MovementPlugin, MovementTuning, PhysicsBody,
        PlatformerController, ProbeLayout, WallContact,
    };
}
