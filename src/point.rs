//! Point masses with position-based (Verlet) integration.

use crate::float::Float;
use crate::vec::{Planar, Vec};
use crate::world::TileCollision;

/// A Verlet point mass: position history plus an acceleration accumulator.
///
/// Velocity is implicit in `position - previous_position`. A fixed point
/// never moves during integration; only [`PointMass::move_to`] relocates it.
#[derive(Clone, Debug)]
pub struct PointMass<V: Vec> {
    pub position: V,
    pub previous_position: V,
    pub acceleration: V,
    /// Surface normal, written by cloth mesh emission.
    pub normal: V,
    pub fixed: bool,
}

impl<V: Vec> PointMass<V> {
    /// A free point at rest.
    pub fn new(position: V) -> Self {
        PointMass {
            position,
            previous_position: position,
            acceleration: V::zero(),
            normal: V::zero(),
            fixed: false,
        }
    }

    /// A fixed point at rest.
    pub fn fixed(position: V) -> Self {
        PointMass { fixed: true, ..Self::new(position) }
    }

    /// Accumulate a force. Consumed by the next integration.
    pub fn apply_force(&mut self, force: V) {
        self.acceleration = self.acceleration + force;
    }

    /// Advance one step without tile collision.
    pub fn integrate(&mut self, dt: V::Scalar, damping: V::Scalar) {
        if let Some(offset) = self.pending_offset(dt, damping) {
            self.commit(offset);
        }
    }

    /// Advance one step, clamping the planar part of the displacement against tiles.
    ///
    /// The probe is a `probe_size` square; depth is left untouched.
    pub fn integrate_colliding<C>(&mut self, dt: V::Scalar, damping: V::Scalar, collider: &C, probe_size: V::Scalar)
    where
        V: Planar,
        C: TileCollision<V::Scalar> + ?Sized,
    {
        if let Some(offset) = self.pending_offset(dt, damping) {
            let clamped = collider.tile_collision(self.position.planar(), offset.planar(), probe_size, probe_size);
            self.commit(offset.with_planar(clamped));
        }
    }

    /// Damped Verlet displacement for this step, or `None` for a fixed point.
    fn pending_offset(&mut self, dt: V::Scalar, damping: V::Scalar) -> Option<V> {
        if self.fixed {
            self.acceleration = V::zero();
            return None;
        }
        let carried = (self.position - self.previous_position).scale(V::Scalar::one() - damping);
        Some(carried + self.acceleration.scale(dt * dt))
    }

    fn commit(&mut self, offset: V) {
        self.previous_position = self.position;
        self.position = self.position + offset;
        self.acceleration = V::zero();
    }

    /// Displacement covered during the last step.
    pub fn velocity_raw(&self) -> V {
        self.position - self.previous_position
    }

    pub fn pin(&mut self) {
        self.fixed = true;
        self.previous_position = self.position;
    }

    pub fn unpin(&mut self) {
        self.fixed = false;
        self.previous_position = self.position;
    }

    /// Teleport the point, leaving it at rest.
    pub fn move_to(&mut self, position: V) {
        self.position = position;
        self.previous_position = position;
    }
}
