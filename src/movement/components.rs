//! Movement domain: components, contact enums and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(
    PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Reflect,
)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

impl GameLayer {
    /// Combine a list of layers into a single mask.
    pub fn mask_of(layers: &[GameLayer]) -> u32 {
        layers.iter().fold(0, |mask, layer| mask | layer.to_bits())
    }
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// Side of a probe that hit a wall, judged by where the probe sits in world space.
    pub fn from_probe(probe_x: f32, body_x: f32) -> Self {
        if probe_x < body_x {
            WallContact::Left
        } else {
            WallContact::Right
        }
    }

    /// -1 for a wall on the left, +1 on the right, 0 for none.
    pub fn direction(self) -> f32 {
        match self {
            WallContact::None => 0.0,
            WallContact::Left => -1.0,
            WallContact::Right => 1.0,
        }
    }

    pub fn is_touching(self) -> bool {
        self != WallContact::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Self {
        if sign < 0.0 { Facing::Left } else { Facing::Right }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Coarse locomotion phase, derived at the end of each decision tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
    WallSliding,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_side_follows_world_position() {
        assert_eq!(WallContact::from_probe(-0.4, 0.0), WallContact::Left);
        assert_eq!(WallContact::from_probe(0.4, 0.0), WallContact::Right);
        assert_eq!(WallContact::from_probe(9.6, 10.0), WallContact::Left);
    }

    #[test]
    fn test_wall_direction_signs() {
        assert_eq!(WallContact::None.direction(), 0.0);
        assert_eq!(WallContact::Left.direction(), -1.0);
        assert_eq!(WallContact::Right.direction(), 1.0);
    }

    #[test]
    fn test_facing_from_sign() {
        assert_eq!(Facing::from_sign(-1.0), Facing::Left);
        assert_eq!(Facing::from_sign(1.0), Facing::Right);
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn test_layer_mask_combines_bits() {
        let mask = GameLayer::mask_of(&[GameLayer::Ground, GameLayer::Wall]);
        assert_eq!(mask, GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits());
        assert_eq!(GameLayer::mask_of(&[]), 0);
    }
}
