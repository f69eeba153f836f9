//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    sync_facing, tick_decision, tick_hold_jump_decision, tick_hold_jump_physics, tick_physics,
};
