//! Core domain: camera setup.

use bevy::prelude::*;

use crate::core::PIXELS_PER_METER;

pub(crate) fn setup_camera(mut commands: Commands) {
    // World units are meters; scale the view so a meter spans PIXELS_PER_METER pixels
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_METER)),
    ));
}
