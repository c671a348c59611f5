//! Collaborator traits for the world a rope or cloth lives in.
//!
//! The simulations never own tile geometry, wind or actors. They query the
//! host through these traits once per tick.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Tile collision queried by integration and rope movement.
///
/// Both methods sweep a `width` x `height` box from `position` by `velocity`
/// and return the velocity that survives contact with solid tiles. Axes are
/// clamped independently: hitting a wall zeroes or shortens `x` without
/// touching `y`.
pub trait TileCollision<F: Float> {
    /// General tile sweep, used by cloth point integration.
    fn tile_collision(&self, position: Vec2<F>, velocity: Vec2<F>, width: F, height: F) -> Vec2<F>;

    /// Sweep that ignores slopes, used by rope movement.
    ///
    /// Defaults to [`TileCollision::tile_collision`].
    fn no_slope_collision(&self, position: Vec2<F>, velocity: Vec2<F>, width: F, height: F) -> Vec2<F> {
        self.tile_collision(position, velocity, width, height)
    }
}

/// A nearby actor whose motion pushes rope segments around.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mover<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
}

impl<F: Float> Mover<F> {
    pub fn new(position: Vec2<F>, velocity: Vec2<F>) -> Self {
        Mover { position, velocity }
    }
}

/// Ambient world state read by rope environment response.
pub trait Environment<F: Float>: TileCollision<F> {
    /// Current ambient wind speed. Drives the wind phase timer.
    fn wind_speed(&self) -> F;

    /// Wind strength used for visuals. Gates whether ropes sway at all.
    fn visual_wind(&self) -> F;

    /// Actors that are active this tick.
    fn movers(&self) -> &[Mover<F>];
}

/// Collider with no solid tiles: every requested velocity passes through.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTiles;

impl<F: Float> TileCollision<F> for NoTiles {
    fn tile_collision(&self, _position: Vec2<F>, velocity: Vec2<F>, _width: F, _height: F) -> Vec2<F> {
        velocity
    }
}

/// An environment without tiles, with settable wind and movers.
#[derive(Clone, Debug, Default)]
pub struct OpenAir<F: Float> {
    pub wind_speed: F,
    pub visual_wind: F,
    pub movers: AllocVec<Mover<F>>,
}

impl<F: Float> OpenAir<F> {
    /// Still air, no movers.
    pub fn new() -> Self {
        OpenAir {
            wind_speed: F::zero(),
            visual_wind: F::zero(),
            movers: AllocVec::new(),
        }
    }

    /// Set both the ambient and visual wind.
    pub fn with_wind(mut self, wind_speed: F, visual_wind: F) -> Self {
        self.wind_speed = wind_speed;
        self.visual_wind = visual_wind;
        self
    }

    /// Add a mover.
    pub fn with_mover(mut self, mover: Mover<F>) -> Self {
        self.movers.push(mover);
        self
    }
}

impl<F: Float> TileCollision<F> for OpenAir<F> {
    fn tile_collision(&self, _position: Vec2<F>, velocity: Vec2<F>, _width: F, _height: F) -> Vec2<F> {
        velocity
    }
}

impl<F: Float> Environment<F> for OpenAir<F> {
    fn wind_speed(&self) -> F { self.wind_speed }
    fn visual_wind(&self) -> F { self.visual_wind }
    fn movers(&self) -> &[Mover<F>] { &self.movers }
}
