//! Fixed-capacity pool of ropes addressed through generation-checked handles.
//!
//! The registry owns every rope in one contiguous slot table and tracks
//! which slots are live with an [`ActivityBits`] occupancy bitset. Releasing
//! a slot only clears its bit: the rope value stays in place until the next
//! allocation overwrites it. Each slot also carries a generation counter,
//! bumped on release, so a handle kept past disposal is rejected instead of
//! silently reaching whatever rope reused its slot.

use crate::bitset::ActivityBits;
use crate::config::{RopeConfig, RopeSettings};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::RopeHandle;
use crate::observer::StepObserver;
use crate::rope::RopeSimulation;
use crate::vec::Vec2;
use crate::world::Environment;
use alloc::vec::Vec as AllocVec;

/// Slots in a registry built with [`RopeRegistry::new`].
pub const MAX_ROPE_COUNT: usize = 1024;

/// A world-scoped pool of ropes.
pub struct RopeRegistry<F: Float> {
    ropes: AllocVec<Option<RopeSimulation<F>>>,
    generations: AllocVec<u32>,
    activity: ActivityBits,
}

impl<F: Float> RopeRegistry<F> {
    /// A registry with [`MAX_ROPE_COUNT`] slots.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ROPE_COUNT)
    }

    /// A registry with `capacity` slots. The slot count never changes afterwards.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut ropes = AllocVec::with_capacity(capacity);
        ropes.resize_with(capacity, || None);
        RopeRegistry {
            ropes,
            generations: alloc::vec![0; capacity],
            activity: ActivityBits::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.ropes.len()
    }

    /// Number of live ropes.
    pub fn active_count(&self) -> usize {
        self.activity.count()
    }

    /// Build a rope in the first free slot and hand out its handle.
    ///
    /// Fails with [`PhysicsError::PoolExhausted`] when every slot is live, and
    /// with the rope constructor's error for a degenerate configuration. A
    /// failed request leaves the registry untouched.
    pub fn request_new(
        &mut self,
        start: Vec2<F>,
        end: Vec2<F>,
        config: &RopeConfig<F>,
        settings: RopeSettings<F>,
    ) -> Result<RopeHandle, PhysicsError> {
        let Some(index) = self.activity.first_free() else {
            log::warn!("rope pool exhausted: all {} slots in use", self.capacity());
            return Err(PhysicsError::PoolExhausted { capacity: self.capacity() });
        };

        let rope = RopeSimulation::new(start, end, config, settings)?;
        self.activity.set(index);
        self.ropes[index] = Some(rope);

        let handle = RopeHandle::new(index, self.generations[index]);
        log::debug!("rope slot {} allocated (generation {})", index, handle.generation());
        Ok(handle)
    }

    /// Release the handle's slot back to the pool.
    ///
    /// The rope itself stays in the slot; only the occupancy bit and the
    /// generation change. Disposing an already released handle is an error.
    pub fn dispose(&mut self, handle: RopeHandle) -> Result<(), PhysicsError> {
        let index = self.validate(handle)?;
        self.activity.clear(index);
        self.generations[index] = self.generations[index].wrapping_add(1);
        log::debug!("rope slot {} released", index);
        Ok(())
    }

    /// Tick every live rope once, in slot order. Returns how many were ticked.
    pub fn post_update_world<E, O>(&mut self, env: &E, observer: &mut O) -> usize
    where
        E: Environment<F> + ?Sized,
        O: StepObserver,
    {
        let mut ticked = 0;
        for index in self.activity.iter_set() {
            if let Some(rope) = self.ropes[index].as_mut() {
                rope.update(env, observer);
                observer.on_rope_ticked(index);
                ticked += 1;
            }
        }
        ticked
    }

    /// Release every slot at once. Rope values are left in place for lazy reuse.
    pub fn clear_world(&mut self) {
        for index in self.activity.iter_set() {
            self.generations[index] = self.generations[index].wrapping_add(1);
        }
        let released = self.activity.count();
        self.activity.clear_all();
        log::debug!("rope registry cleared, {} slots released", released);
    }

    pub fn get(&self, handle: RopeHandle) -> Result<&RopeSimulation<F>, PhysicsError> {
        let index = self.validate(handle)?;
        self.ropes[index].as_ref().ok_or(PhysicsError::StaleHandle {
            index,
            generation: handle.generation(),
        })
    }

    pub fn get_mut(&mut self, handle: RopeHandle) -> Result<&mut RopeSimulation<F>, PhysicsError> {
        let index = self.validate(handle)?;
        self.ropes[index].as_mut().ok_or(PhysicsError::StaleHandle {
            index,
            generation: handle.generation(),
        })
    }

    /// Whether `handle` still refers to a live rope.
    pub fn is_alive(&self, handle: RopeHandle) -> bool {
        self.validate(handle).is_ok()
    }

    /// Whether slot `index` is currently occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.activity.is_set(index)
    }

    /// Raw slot contents, live or released.
    ///
    /// Released slots keep their last rope until reused, so this can return a
    /// rope no handle refers to.
    pub fn slot(&self, index: usize) -> Option<&RopeSimulation<F>> {
        self.ropes.get(index).and_then(Option::as_ref)
    }

    /// Handles to every live rope, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = RopeHandle> + '_ {
        self.activity
            .iter_set()
            .map(move |index| RopeHandle::new(index, self.generations[index]))
    }

    fn validate(&self, handle: RopeHandle) -> Result<usize, PhysicsError> {
        let index = handle.index();
        if index >= self.capacity() {
            return Err(PhysicsError::HandleOutOfBounds { index, capacity: self.capacity() });
        }
        if !self.activity.is_set(index) || self.generations[index] != handle.generation() {
            return Err(PhysicsError::StaleHandle { index, generation: handle.generation() });
        }
        Ok(index)
    }
}

impl<F: Float> Default for RopeRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}
