//! Core domain: app-level setup shared by every scene.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Pixels per world meter for the demo camera.
pub const PIXELS_PER_METER: f32 = 40.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}
