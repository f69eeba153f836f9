//! Content domain: tests for parsing and converting movement content.

use std::any::TypeId;
use std::path::Path;

use bevy::prelude::*;
use bevy::reflect::Struct;

use super::{
    ContentFormat, ContentPlugin, JumpModelDef, MovementContentDef, load_movement_content,
    parse_movement_content,
};
use crate::movement::{
    ControllerError, Facing, HoldJumpTuning, MovementTuning, PlatformerController, PlayerSpawn,
};

const SHIPPED: &str = include_str!("../../assets/data/movement.ron");

const MINIMAL_RON: &str = r#"(
    body: (width: 1.0, height: 2.0, gravity_scale: 1.0, spawn: (3.0, 4.0)),
    probes: (ground: (0.0, -1.0), wall_left: (-0.5, 0.0)),
    tuning: (
        walk_speed: 4.0,
        run_speed: 7.0,
        ground_accel: 50.0,
        ground_decel: 50.0,
        air_accel: 30.0,
        air_decel: 30.0,
        jump_force: 12.0,
        coyote_time: 0.1,
        jump_buffer_time: 0.1,
        jump_cut_multiplier: 0.4,
        fall_gravity_multiplier: 2.0,
        jump_cooldown: 0.25,
        ground_check_radius: 0.2,
        ground_layers: [Ground],
        wall_check_radius: 0.1,
        wall_layers: [Wall],
        wall_slide_max_speed: -2.0,
        wall_jump_force: (8.0, 12.0),
        wall_stick_time: 0.05,
    ),
)"#;

// -----------------------------------------------------------------------------
// Shipped content
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_matches_defaults() {
    let content = parse_movement_content(SHIPPED, ContentFormat::Ron, "movement.ron")
        .expect("shipped content should parse");

    assert_eq!(content.model, JumpModelDef::WallJump);
    assert_eq!(content.movement_tuning(), MovementTuning::default());
    assert_eq!(content.hold_jump_tuning(), HoldJumpTuning::default());
    assert_eq!(content.player_spawn(), PlayerSpawn::default());
}

#[test]
fn test_shipped_content_builds_a_controller() {
    let content = parse_movement_content(SHIPPED, ContentFormat::Ron, "movement.ron").unwrap();
    let spawn = content.player_spawn();

    let controller =
        PlatformerController::new(content.movement_tuning(), &spawn.probes, Facing::Right);
    assert!(controller.is_ok());
}

// -----------------------------------------------------------------------------
// Partial content
// -----------------------------------------------------------------------------

#[test]
fn test_optional_sections_use_defaults() {
    let content = parse_movement_content(MINIMAL_RON, ContentFormat::Ron, "minimal.ron").unwrap();

    assert_eq!(content.model, JumpModelDef::WallJump);
    assert_eq!(content.hold_jump_tuning(), HoldJumpTuning::default());

    let spawn = content.player_spawn();
    assert_eq!(spawn.position.x, 3.0);
    assert_eq!(spawn.position.y, 4.0);
    assert_eq!(spawn.size.y, 2.0);
}

#[test]
fn test_missing_probe_fails_controller_construction() {
    let content = parse_movement_content(MINIMAL_RON, ContentFormat::Ron, "minimal.ron").unwrap();
    let spawn = content.player_spawn();
    assert!(spawn.probes.wall_right.is_none());

    let result = PlatformerController::new(content.movement_tuning(), &spawn.probes, Facing::Right);
    assert_eq!(
        result.unwrap_err(),
        ControllerError::MissingAnchor("wall_right")
    );
}

#[test]
fn test_layer_lists_become_masks() {
    use crate::movement::GameLayer;

    let content = parse_movement_content(MINIMAL_RON, ContentFormat::Ron, "minimal.ron").unwrap();
    let tuning = content.movement_tuning();

    assert_eq!(tuning.ground_mask, GameLayer::mask_of(&[GameLayer::Ground]));
    assert_eq!(tuning.wall_mask, GameLayer::mask_of(&[GameLayer::Wall]));
    assert_eq!(tuning.wall_jump_force.x, 8.0);
    assert_eq!(tuning.wall_jump_force.y, 12.0);
}

// -----------------------------------------------------------------------------
// Formats and errors
// -----------------------------------------------------------------------------

#[test]
fn test_json_content_parses() {
    let ron_content = parse_movement_content(SHIPPED, ContentFormat::Ron, "movement.ron").unwrap();
    let json = serde_json::to_string(&ron_content).unwrap();

    let json_content = parse_movement_content(&json, ContentFormat::Json, "movement.json").unwrap();
    assert_eq!(json_content, ron_content);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_content("(body: oops)", ContentFormat::Ron, "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ContentFormat::from_path(Path::new("a/movement.ron")),
        Some(ContentFormat::Ron)
    );
    assert_eq!(
        ContentFormat::from_path(Path::new("movement.json")),
        Some(ContentFormat::Json)
    );
    assert_eq!(ContentFormat::from_path(Path::new("movement.toml")), None);
    assert_eq!(ContentFormat::from_path(Path::new("movement")), None);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let err = load_movement_content(Path::new("movement.toml")).unwrap_err();
    assert!(err.message.contains("Unsupported extension"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_movement_content(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Reflection
// -----------------------------------------------------------------------------

#[test]
fn test_content_types_are_registered() {
    let mut app = App::new();
    app.add_plugins(ContentPlugin);

    let registry = app.world().resource::<AppTypeRegistry>().read();
    assert!(registry.contains(TypeId::of::<MovementContentDef>()));
    assert!(registry.contains(TypeId::of::<JumpModelDef>()));
    assert!(registry.contains(TypeId::of::<crate::movement::GameLayer>()));
}

#[test]
fn test_tuning_fields_are_reflected() {
    let content = parse_movement_content(SHIPPED, ContentFormat::Ron, "movement.ron").unwrap();

    let jump_force = content
        .tuning
        .field("jump_force")
        .and_then(|field| field.try_downcast_ref::<f32>());
    assert_eq!(jump_force, Some(&MovementTuning::default().jump_force));
}
