//! Handles to pooled ropes.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::registry::RopeRegistry;
use crate::vec::Vec2;
use crate::world::Environment;

/// A capability token for one rope in a [`RopeRegistry`].
///
/// Holds only the slot index and the slot generation it was issued for. All
/// access goes through the registry, which rejects the handle once its slot
/// has been released.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RopeHandle {
    index: usize,
    generation: u32,
}

impl RopeHandle {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        RopeHandle { index, generation }
    }

    /// Slot index in the registry.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Segment positions as of the rope's last tick.
    pub fn positions<'a, F: Float>(&self, registry: &'a RopeRegistry<F>) -> Result<&'a [Vec2<F>], PhysicsError> {
        Ok(registry.get(*self)?.positions())
    }

    pub fn segment_count<F: Float>(&self, registry: &RopeRegistry<F>) -> Result<usize, PhysicsError> {
        Ok(registry.get(*self)?.segment_count())
    }

    pub fn start<F: Float>(&self, registry: &RopeRegistry<F>) -> Result<Vec2<F>, PhysicsError> {
        Ok(registry.get(*self)?.start())
    }

    pub fn end<F: Float>(&self, registry: &RopeRegistry<F>) -> Result<Vec2<F>, PhysicsError> {
        Ok(registry.get(*self)?.end())
    }

    /// The rope's first segment, writable for re-anchoring.
    pub fn start_mut<'a, F: Float>(&self, registry: &'a mut RopeRegistry<F>) -> Result<&'a mut Vec2<F>, PhysicsError> {
        Ok(registry.get_mut(*self)?.start_mut())
    }

    /// The rope's last segment, writable for re-anchoring.
    pub fn end_mut<'a, F: Float>(&self, registry: &'a mut RopeRegistry<F>) -> Result<&'a mut Vec2<F>, PhysicsError> {
        Ok(registry.get_mut(*self)?.end_mut())
    }

    /// Let the rope fall into its resting shape right away.
    pub fn settle<F, E>(&self, registry: &mut RopeRegistry<F>, env: &E) -> Result<(), PhysicsError>
    where
        F: Float,
        E: Environment<F> + ?Sized,
    {
        registry.get_mut(*self)?.settle(env);
        Ok(())
    }

    /// Return the rope to the pool. The handle is consumed.
    pub fn dispose<F: Float>(self, registry: &mut RopeRegistry<F>) -> Result<(), PhysicsError> {
        registry.dispose(self)
    }
}
