//! avian2d implementation of [`PhysicsBody`].

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::PhysicsBody;

/// Circle overlap queries that report the rigid body owning each hit collider.
#[derive(SystemParam)]
pub struct OverlapProbe<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    colliders: Query<'w, 's, &'static ColliderOf>,
}

impl OverlapProbe<'_, '_> {
    /// First body other than `exclude` owning a collider inside the circle.
    pub fn first_body(
        &self,
        point: Vec2,
        radius: f32,
        mask: u32,
        exclude: Entity,
    ) -> Option<Entity> {
        let filter = SpatialQueryFilter::from_mask(LayerMask(mask));
        let hits = self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter);

        hits.into_iter()
            .map(|collider| {
                self.colliders
                    .get(collider)
                    .map(|collider_of| collider_of.body)
                    .unwrap_or(collider)
            })
            .find(|&body| body != exclude)
    }
}

/// One character body borrowed from the ECS for the duration of a tick.
pub struct AvianBody<'a, 'w, 's> {
    entity: Entity,
    position: Vec2,
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    inverse_mass: f32,
    gravity: Vec2,
    overlaps: &'a OverlapProbe<'w, 's>,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub fn new(
        entity: Entity,
        position: Vec2,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        mass: &ComputedMass,
        gravity: Vec2,
        overlaps: &'a OverlapProbe<'w, 's>,
    ) -> Self {
        Self {
            entity,
            position,
            velocity,
            gravity_scale,
            inverse_mass: mass.inverse(),
            gravity,
            overlaps,
        }
    }
}

impl PhysicsBody for AvianBody<'_, '_, '_> {
    type Id = Entity;

    fn id(&self) -> Entity {
        self.entity
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.velocity.0 += force * self.inverse_mass;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn overlap_circle(
        &self,
        point: Vec2,
        radius: f32,
        mask: u32,
        exclude: Entity,
    ) -> Option<Entity> {
        self.overlaps.first_body(point, radius, mask, exclude)
    }
}
