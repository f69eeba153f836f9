//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Raw axis, no smoothing
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    *input = MovementInput {
        horizontal: x,
        run_held: keyboard.pressed(KeyCode::ShiftLeft),
        jump_just_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        jump_held: keyboard.any_pressed(JUMP_KEYS),
        jump_just_released: keyboard.any_just_released(JUMP_KEYS),
    };
}
