//! Movement domain: ground and wall sensing from probe overlaps.

use bevy::prelude::*;

use crate::movement::{ControllerError, Facing, MovementTuning, PhysicsBody, WallContact};

/// Contact state produced by one sensing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorReading {
    pub grounded: bool,
    pub wall: WallContact,
}

/// Authored probe anchors, as offsets from the body center while facing right.
///
/// Entries are optional so that an incomplete layout can be represented and
/// rejected when a controller is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeLayout {
    pub ground: Option<Vec2>,
    pub wall_left: Option<Vec2>,
    pub wall_right: Option<Vec2>,
}

impl ProbeLayout {
    /// Anchors at the feet and at both sides of a box with the given half extents.
    pub fn for_box(half_extents: Vec2) -> Self {
        Self {
            ground: Some(Vec2::new(0.0, -half_extents.y)),
            wall_left: Some(Vec2::new(-half_extents.x, 0.0)),
            wall_right: Some(Vec2::new(half_extents.x, 0.0)),
        }
    }

    /// Fail on the first missing anchor.
    pub fn resolve(&self) -> Result<Probes, ControllerError> {
        Ok(Probes {
            ground: self.ground.ok_or(ControllerError::MissingAnchor("ground"))?,
            wall_left: self
                .wall_left
                .ok_or(ControllerError::MissingAnchor("wall_left"))?,
            wall_right: self
                .wall_right
                .ok_or(ControllerError::MissingAnchor("wall_right"))?,
        })
    }
}

/// A complete set of probe anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probes {
    pub ground: Vec2,
    pub wall_left: Vec2,
    pub wall_right: Vec2,
}

impl Probes {
    /// World positions of the probes. Local x mirrors when facing left, so the
    /// "left" probe ends up on the right side of a flipped character.
    pub fn world(&self, origin: Vec2, facing: Facing) -> ProbePoints {
        let place = |offset: Vec2| origin + Vec2::new(offset.x * facing.sign(), offset.y);
        ProbePoints {
            ground: place(self.ground),
            wall_left: place(self.wall_left),
            wall_right: place(self.wall_right),
        }
    }
}

/// Probe positions in world space for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbePoints {
    pub ground: Vec2,
    pub wall_left: Vec2,
    pub wall_right: Vec2,
}

/// Resolve ground and wall contact for `body`.
///
/// Hits on the body's own colliders are ignored. When both wall probes hit,
/// the right-named probe is resolved last and wins.
pub fn sense<B: PhysicsBody>(
    body: &B,
    points: &ProbePoints,
    tuning: &MovementTuning,
) -> SensorReading {
    let own = body.id();
    let touching = |point: Vec2, radius: f32, mask: u32| {
        body.overlap_circle(point, radius, mask, own)
            .is_some_and(|hit| hit != own)
    };

    let grounded = touching(
        points.ground,
        tuning.ground_check_radius,
        tuning.ground_mask,
    );

    let body_x = body.position().x;
    let mut wall = WallContact::None;
    if touching(points.wall_left, tuning.wall_check_radius, tuning.wall_mask) {
        wall = WallContact::from_probe(points.wall_left.x, body_x);
    }
    if touching(points.wall_right, tuning.wall_check_radius, tuning.wall_mask) {
        wall = WallContact::from_probe(points.wall_right.x, body_x);
    }

    SensorReading { grounded, wall }
}
