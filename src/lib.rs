//! Secondary-motion ropes and cloth for games.
//!
//! `drape` drives decorative deformable bodies (ropes hanging off scenery,
//! banners and sheets) that react to gravity, wind, nearby actors and coarse
//! tile collision. It only produces positions, normals and triangle buffers;
//! drawing them is left to the host renderer.
//!
//! # Features
//!
//! - **Verlet point masses**: Damped position-based integration with optional tile clamping
//! - **Ropes**: Positional distance links relaxed a fixed number of passes per tick
//! - **Cloth**: Hooke-spring grids with per-point normals and a triangle mesh
//! - **Catenary sizing**: Rope length for a given span and sag via Newton-Raphson
//! - **Rope pool**: Fixed-capacity registry with bitset slot search and generation-checked handles
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use drape::{OpenAir, NoOpStepObserver, RopeConfig, RopeRegistry, RopeSettings, Vec2};
//!
//! let mut registry: RopeRegistry<f32> = RopeRegistry::new();
//! let config = RopeConfig::new(10)
//!     .with_catenary_sag(80.0, 16.0)
//!     .with_gravity(Vec2::new(0.0, 0.3));
//! let rope = registry
//!     .request_new(Vec2::new(0.0, 0.0), Vec2::new(80.0, 0.0), &config, RopeSettings::anchored())
//!     .expect("fresh registry has room");
//!
//! let world = OpenAir::new();
//! registry.post_update_world(&world, &mut NoOpStepObserver);
//! assert_eq!(rope.positions(&registry).unwrap().len(), 10);
//!
//! rope.dispose(&mut registry).unwrap();
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod world;
pub mod point;
pub mod link;
pub mod rope;
pub mod cloth;
pub mod mesh;
pub mod catenary;
pub mod bitset;
pub mod registry;
pub mod handle;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3, Planar};
pub use world::{TileCollision, Environment, Mover, NoTiles, OpenAir};
pub use point::PointMass;
pub use link::{ElasticLink, DistanceLink, LinkCorrection};
pub use rope::{RopeSimulation, RopeSegment, SETTLE_STEPS};
pub use cloth::ClothSimulation;
pub use mesh::{ClothMesh, ClothVertex, Rgba};
pub use catenary::{CatenarySolver, catenary_length};
pub use bitset::{ActivityBits, BITS_PER_WORD};
pub use registry::{RopeRegistry, MAX_ROPE_COUNT};
pub use handle::RopeHandle;
pub use config::{RopeConfig, RopeSettings, ClothConfig, GravityFalloff, DEFAULT_CONSTRAINT_STEPS};
pub use observer::{StepObserver, NoOpStepObserver, LogStepObserver};
pub use error::PhysicsError;
