//! Configuration types for ropes and cloth.

use crate::catenary::CatenarySolver;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Default number of relaxation passes per rope tick.
pub const DEFAULT_CONSTRAINT_STEPS: usize = 10;

/// How gravity fades along a rope or across a cloth.
///
/// Evaluated at `t` in [0, 1] as `lerp(floor, 1, (1 - sin(pi * t))^exponent)`:
/// the ends take full gravity and the middle takes `floor` of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityFalloff<F: Float> {
    pub floor: F,
    pub exponent: F,
}

impl<F: Float> GravityFalloff<F> {
    pub fn new(floor: F, exponent: F) -> Self {
        GravityFalloff { floor, exponent }
    }

    /// Gentle curve used by ropes.
    pub fn rope() -> Self {
        GravityFalloff { floor: F::half(), exponent: F::one() }
    }

    /// Steep curve used by cloth.
    pub fn cloth() -> Self {
        GravityFalloff { floor: F::from_f32(0.06), exponent: F::from_f32(2.7) }
    }

    /// Full gravity everywhere.
    pub fn uniform() -> Self {
        GravityFalloff { floor: F::one(), exponent: F::one() }
    }

    /// Gravity multiplier at `t`.
    pub fn factor(&self, t: F) -> F {
        let arch = (F::pi() * t).sin();
        // Guard the power against tiny negative bases from sin rounding at t = 1.
        let base = (F::one() - arch).max(F::zero());
        self.floor.lerp(F::one(), base.powf(self.exponent))
    }
}

/// Configuration for a rope.
///
/// # Builder Pattern
/// ```
/// use drape::config::RopeConfig;
/// use drape::vec::Vec2;
///
/// let config: RopeConfig<f32> = RopeConfig::new(12)
///     .with_distance_per_segment(4.0)
///     .with_gravity(Vec2::new(0.0, 0.3))
///     .with_constraint_steps(16);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RopeConfig<F: Float> {
    /// Number of segments (points) in the chain. Must be at least 2.
    pub segment_count: usize,
    /// Rest distance between adjacent segments.
    pub distance_per_segment: F,
    /// Gravity added to every free segment each tick.
    pub gravity: Vec2<F>,
    /// Fraction of carried velocity removed each tick, in [0, 1]. Default: 0.
    pub damping: F,
    /// Relaxation passes per tick. Default: 10.
    pub constraint_steps: usize,
    /// Gravity profile along the chain.
    pub gravity_falloff: GravityFalloff<F>,
}

impl<F: Float> RopeConfig<F> {
    /// A rope of `segment_count` points with unit spacing and no gravity.
    pub fn new(segment_count: usize) -> Self {
        RopeConfig {
            segment_count,
            distance_per_segment: F::one(),
            gravity: Vec2::zero(),
            damping: F::zero(),
            constraint_steps: DEFAULT_CONSTRAINT_STEPS,
            gravity_falloff: GravityFalloff::rope(),
        }
    }

    pub fn with_distance_per_segment(mut self, distance: F) -> Self {
        self.distance_per_segment = distance;
        self
    }

    /// Size the segments so the rope hangs `sag` below supports `span` apart.
    ///
    /// The catenary length is split evenly over the `segment_count - 1` links.
    pub fn with_catenary_sag(mut self, span: F, sag: F) -> Self {
        let length = CatenarySolver::default().length(span, sag);
        let links = self.segment_count.saturating_sub(1).max(1);
        self.distance_per_segment = length / F::from_f32(links as f32);
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_constraint_steps(mut self, steps: usize) -> Self {
        self.constraint_steps = steps;
        self
    }

    pub fn with_gravity_falloff(mut self, falloff: GravityFalloff<F>) -> Self {
        self.gravity_falloff = falloff;
        self
    }
}

/// Behavior switches for a rope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeSettings<F: Float> {
    pub start_is_fixed: bool,
    pub end_is_fixed: bool,
    pub respond_to_movers: bool,
    pub respond_to_wind: bool,
    /// Probe size for tile collision. `None` disables tile interaction.
    pub tile_collider_area: Option<Vec2<F>>,
    /// Scales down mover and wind pushes. Default: 1.
    pub mass: F,
}

impl<F: Float> RopeSettings<F> {
    pub fn new() -> Self {
        RopeSettings {
            start_is_fixed: false,
            end_is_fixed: false,
            respond_to_movers: false,
            respond_to_wind: false,
            tile_collider_area: None,
            mass: F::one(),
        }
    }

    /// Pin both ends, the usual setup for decorative hanging ropes.
    pub fn anchored() -> Self {
        Self::new().with_fixed_ends(true, true)
    }

    pub fn with_fixed_ends(mut self, start: bool, end: bool) -> Self {
        self.start_is_fixed = start;
        self.end_is_fixed = end;
        self
    }

    pub fn with_mover_response(mut self, enabled: bool) -> Self {
        self.respond_to_movers = enabled;
        self
    }

    pub fn with_wind_response(mut self, enabled: bool) -> Self {
        self.respond_to_wind = enabled;
        self
    }

    pub fn with_tile_collider(mut self, area: Vec2<F>) -> Self {
        self.tile_collider_area = Some(area);
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }
}

impl<F: Float> Default for RopeSettings<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a cloth grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Points along X. Must be at least 2.
    pub width: usize,
    /// Points along Y. Must be at least 2.
    pub height: usize,
    /// Rest length of every structural spring, and the initial grid pitch.
    pub spacing: F,
    /// Hooke coefficient of every spring.
    pub stiffness: F,
    /// Fraction of carried velocity removed each step, in [0, 1].
    pub damping: F,
    /// Gravity profile across the grid's X axis.
    pub gravity_falloff: GravityFalloff<F>,
}

impl<F: Float> ClothConfig<F> {
    pub fn new(width: usize, height: usize) -> Self {
        ClothConfig {
            width,
            height,
            spacing: F::one(),
            stiffness: F::one(),
            damping: F::from_f32(0.01),
            gravity_falloff: GravityFalloff::cloth(),
        }
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity_falloff(mut self, falloff: GravityFalloff<F>) -> Self {
        self.gravity_falloff = falloff;
        self
    }
}
