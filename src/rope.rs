//! Verlet rope built from segments and positional distance links.
//!
//! One [`RopeSimulation::update`] runs four phases in fixed order:
//!
//! 1. **Forcing**: carried velocity (damped, jitter snapped to zero) plus
//!    gravity scaled by the falloff curve moves every free segment.
//! 2. **Relaxation**: `constraint_steps` passes of [`DistanceLink`]
//!    corrections over every adjacent pair.
//! 3. **Cache refresh**: the flattened position array is rebuilt.
//! 4. **Environment response**: optional mover pushes and wind sway.
//!
//! All movement goes through one primitive that, when the rope has a tile
//! collider area, probes the world twice and drops any axis that collision
//! shortened.

use crate::config::{GravityFalloff, RopeConfig, RopeSettings};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::DistanceLink;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::{Vec, Vec2};
use crate::world::{Environment, Mover, TileCollision};
use alloc::vec::Vec as AllocVec;

/// Updates performed by [`RopeSimulation::settle`].
pub const SETTLE_STEPS: usize = 20;

/// Carried displacement shorter than this is dropped to stop idle jitter.
const JITTER_THRESHOLD: f32 = 0.02;
/// Extra height of the first collision probe.
const PROBE_HEADROOM: f32 = 2.0;

const MOVER_FAR: f32 = 37.0;
const MOVER_NEAR: f32 = 10.0;
const MOVER_PUSH: f32 = 0.08;

const WIND_TICKS_PER_SECOND: f32 = 60.0;
const WIND_TIME_WRAP: f32 = 4000.0;
const WIND_WAVE_FREQUENCY: f32 = 3.42;
const WIND_PHASE_PER_UNIT: f32 = 0.06;
const WIND_SPEED_LIMIT: f32 = 1.3;
const WIND_PUSH: f32 = -0.2;
const WIND_GATE_LOW: f32 = 0.3;
const WIND_GATE_HIGH: f32 = 0.75;

/// One simulated point of a rope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeSegment<F: Float> {
    pub position: Vec2<F>,
    pub old_position: Vec2<F>,
    /// Fixed segments ignore forcing and relaxation.
    pub fixed: bool,
}

impl<F: Float> RopeSegment<F> {
    pub fn new(position: Vec2<F>) -> Self {
        RopeSegment { position, old_position: position, fixed: false }
    }
}

/// A rope: an ordered chain of at least two segments.
#[derive(Clone, Debug)]
pub struct RopeSimulation<F: Float> {
    segments: AllocVec<RopeSegment<F>>,
    positions: AllocVec<Vec2<F>>,
    distance_per_segment: F,
    gravity: Vec2<F>,
    damping: F,
    wind_time: F,
    constraint_steps: usize,
    gravity_falloff: GravityFalloff<F>,
    settings: RopeSettings<F>,
}

impl<F: Float> RopeSimulation<F> {
    /// Lay `config.segment_count` segments evenly from `start` to `end`, at rest.
    pub fn new(
        start: Vec2<F>,
        end: Vec2<F>,
        config: &RopeConfig<F>,
        settings: RopeSettings<F>,
    ) -> Result<Self, PhysicsError> {
        let count = config.segment_count;
        if count < 2 {
            return Err(PhysicsError::InsufficientSegments(count));
        }

        let last = F::from_f32((count - 1) as f32);
        let mut segments: AllocVec<RopeSegment<F>> = (0..count)
            .map(|i| RopeSegment::new(start.lerp(end, F::from_f32(i as f32) / last)))
            .collect();
        segments[0].fixed = settings.start_is_fixed;
        segments[count - 1].fixed = settings.end_is_fixed;
        let positions = segments.iter().map(|s| s.position).collect();

        log::debug!(
            "rope created: {} segments, rest distance {:?}, {} constraint steps",
            count,
            config.distance_per_segment,
            config.constraint_steps,
        );

        Ok(RopeSimulation {
            segments,
            positions,
            distance_per_segment: config.distance_per_segment,
            gravity: config.gravity,
            damping: config.damping,
            wind_time: F::zero(),
            constraint_steps: config.constraint_steps,
            gravity_falloff: config.gravity_falloff,
            settings,
        })
    }

    /// Advance one tick.
    pub fn update<E, O>(&mut self, env: &E, observer: &mut O)
    where
        E: Environment<F> + ?Sized,
        O: StepObserver,
    {
        self.apply_forcing(env);
        observer.on_forcing();

        for pass in 0..self.constraint_steps {
            self.constrain(env);
            observer.on_relaxation_pass(pass);
        }

        self.refresh_positions();

        if self.settings.respond_to_movers {
            self.respond_to_movers(env.movers());
        }
        if self.settings.respond_to_wind {
            self.respond_to_wind(env.wind_speed(), env.visual_wind());
        }

        observer.on_step_complete();
    }

    /// Run [`SETTLE_STEPS`] updates so a fresh rope drops into its resting shape.
    pub fn settle<E: Environment<F> + ?Sized>(&mut self, env: &E) {
        for _ in 0..SETTLE_STEPS {
            self.update(env, &mut NoOpStepObserver);
        }
    }

    /// One relaxation pass over every adjacent pair, first to last.
    pub fn constrain<C: TileCollision<F> + ?Sized>(&mut self, collider: &C) {
        let area = self.settings.tile_collider_area;
        for i in 0..self.segments.len() - 1 {
            let correction = DistanceLink::following(i, self.distance_per_segment).correction(&self.segments);
            if let Some(offset) = correction.a {
                move_through(area, collider, &mut self.segments[i].position, offset);
            }
            if let Some(offset) = correction.b {
                move_through(area, collider, &mut self.segments[i + 1].position, offset);
            }
        }
    }

    fn apply_forcing<C: TileCollision<F> + ?Sized>(&mut self, collider: &C) {
        let last = F::from_f32((self.segments.len() - 1) as f32);
        let carry = F::one() - self.damping;
        let threshold = F::from_f32(JITTER_THRESHOLD);
        let area = self.settings.tile_collider_area;

        for (i, segment) in self.segments.iter_mut().enumerate() {
            let mut step = (segment.position - segment.old_position).scale(carry);
            if step.length() < threshold {
                step = Vec2::zero();
            }

            segment.old_position = segment.position;

            if !segment.fixed {
                let falloff = self.gravity_falloff.factor(F::from_f32(i as f32) / last);
                move_through(area, collider, &mut segment.position, step + self.gravity.scale(falloff));
            }
        }
    }

    fn refresh_positions(&mut self) {
        for (cached, segment) in self.positions.iter_mut().zip(self.segments.iter()) {
            *cached = segment.position;
        }
    }

    /// Nudge free segments along the velocity of nearby movers.
    fn respond_to_movers(&mut self, movers: &[Mover<F>]) {
        let far = F::from_f32(MOVER_FAR);
        let near = F::from_f32(MOVER_NEAR);
        let push = F::from_f32(MOVER_PUSH) / self.settings.mass;

        for segment in self.segments.iter_mut().filter(|s| !s.fixed) {
            for mover in movers {
                let proximity = F::inverse_lerp(far, near, mover.position.distance(segment.position));
                segment.position = segment.position + mover.velocity.scale(proximity * push);
            }
        }
    }

    /// Sway the last segment sideways with a wind-driven cosine wave.
    fn respond_to_wind(&mut self, wind_speed: F, visual_wind: F) {
        self.wind_time = self.wind_time + wind_speed / F::from_f32(WIND_TICKS_PER_SECOND);
        if self.wind_time.abs() >= F::from_f32(WIND_TIME_WRAP) {
            self.wind_time = F::zero();
        }

        let limit = F::from_f32(WIND_SPEED_LIMIT);
        let gust = (visual_wind * F::two()).clamp(-limit, limit);
        let phase = self.segments[0].position.length() * F::from_f32(WIND_PHASE_PER_UNIT);
        let wave = (self.wind_time * F::from_f32(WIND_WAVE_FREQUENCY) + phase).cos();
        let wind = Vec2::unit_x().scale((wave + wind_speed) * F::from_f32(WIND_PUSH));
        let gate = F::inverse_lerp(F::from_f32(WIND_GATE_LOW), F::from_f32(WIND_GATE_HIGH), gust);

        let mass = self.settings.mass;
        if let Some(tail) = self.segments.last_mut().filter(|s| !s.fixed) {
            tail.position = tail.position + wind.scale(gate / mass);
        }
    }

    /// Segment positions as of the last cache refresh.
    pub fn positions(&self) -> &[Vec2<F>] {
        &self.positions
    }

    pub fn segments(&self) -> &[RopeSegment<F>] {
        &self.segments
    }

    /// Direct segment access. Changes show up in [`RopeSimulation::positions`] after the next tick.
    pub fn segments_mut(&mut self) -> &mut [RopeSegment<F>] {
        &mut self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn start(&self) -> Vec2<F> {
        self.segments[0].position
    }

    pub fn end(&self) -> Vec2<F> {
        self.segments[self.segments.len() - 1].position
    }

    /// The first segment's position, for anchoring to moving scenery.
    pub fn start_mut(&mut self) -> &mut Vec2<F> {
        &mut self.segments[0].position
    }

    /// The last segment's position, for anchoring to moving scenery.
    pub fn end_mut(&mut self) -> &mut Vec2<F> {
        let last = self.segments.len() - 1;
        &mut self.segments[last].position
    }

    pub fn distance_per_segment(&self) -> F {
        self.distance_per_segment
    }

    pub fn set_distance_per_segment(&mut self, distance: F) {
        self.distance_per_segment = distance;
    }

    pub fn gravity(&self) -> Vec2<F> {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.gravity = gravity;
    }

    pub fn damping(&self) -> F {
        self.damping
    }

    pub fn set_damping(&mut self, damping: F) {
        self.damping = damping;
    }

    pub fn constraint_steps(&self) -> usize {
        self.constraint_steps
    }

    pub fn wind_time(&self) -> F {
        self.wind_time
    }

    pub fn settings(&self) -> &RopeSettings<F> {
        &self.settings
    }

    /// Replace the behavior settings, re-pinning the ends to match.
    pub fn set_settings(&mut self, settings: RopeSettings<F>) {
        let last = self.segments.len() - 1;
        self.segments[0].fixed = settings.start_is_fixed;
        self.segments[last].fixed = settings.end_is_fixed;
        self.settings = settings;
    }

    pub fn interacts_with_tiles(&self) -> bool {
        self.settings.tile_collider_area.is_some()
    }
}

/// Move `position` by `velocity`, respecting tiles when the rope has a collider area.
///
/// Two stacked no-slope probes (collider height plus headroom, then the bare
/// height) decide which axes are blocked. A blocked axis is dropped entirely
/// rather than shortened.
fn move_through<F, C>(area: Option<Vec2<F>>, collider: &C, position: &mut Vec2<F>, velocity: Vec2<F>)
where
    F: Float,
    C: TileCollision<F> + ?Sized,
{
    let Some(area) = area else {
        *position = *position + velocity;
        return;
    };

    let width = area.x.floor();
    let height = area.y.floor();
    let probed = collider.no_slope_collision(*position, velocity, width, height + F::from_f32(PROBE_HEADROOM));
    let probed = collider.no_slope_collision(*position, probed, width, height);

    let mut accepted = velocity;
    if velocity.x.abs() > probed.x.abs() {
        accepted.x = F::zero();
    }
    if velocity.y.abs() > probed.y.abs() {
        accepted.y = F::zero();
    }
    *position = *position + accepted;
}
