//! Content domain: data-driven movement tuning loaded at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    BodyDef, HoldJumpTuningDef, JumpModelDef, MovementContentDef, MovementTuningDef, ProbesDef,
};
pub use loader::{ContentFormat, ContentLoadError, load_movement_content, parse_movement_content};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::GameLayer;

/// Where the movement content file is read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data/movement.ron"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementContentDef>()
            .register_type::<JumpModelDef>()
            .register_type::<BodyDef>()
            .register_type::<ProbesDef>()
            .register_type::<MovementTuningDef>()
            .register_type::<HoldJumpTuningDef>()
            .register_type::<GameLayer>();

        app.init_resource::<ContentPath>()
            .add_systems(PreStartup, load_content);
    }
}

/// Replace the movement resources with the loaded content.
/// Falls back to the built-in defaults if the file is missing or malformed.
fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    match load_movement_content(&path.0) {
        Ok(content) => {
            commands.insert_resource(content.movement_tuning());
            commands.insert_resource(content.hold_jump_tuning());
            commands.insert_resource(content.player_spawn());
            info!(
                "Loaded movement content from {} (model={:?})",
                path.0.display(),
                content.model
            );
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }
}
