//! Spring cloth: a grid of point masses joined by structural Hooke springs.

use crate::config::{ClothConfig, GravityFalloff};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::ElasticLink;
use crate::mesh::{ClothMesh, ClothVertex, Rgba};
use crate::observer::StepObserver;
use crate::point::PointMass;
use crate::vec::{Vec, Vec2, Vec3};
use crate::world::{NoTiles, TileCollision};
use alloc::vec::Vec as AllocVec;

/// Side of the square tile probe used when cloth collides.
pub const COLLISION_PROBE_SIZE: f32 = 2.0;

/// A cloth sheet simulated with soft springs.
///
/// Point `(x, y)` has index `y * width + x`. Every point is linked to its
/// right and lower neighbor; the last column and row only link inward.
pub struct ClothSimulation<F: Float> {
    points: AllocVec<PointMass<Vec3<F>>>,
    links: AllocVec<ElasticLink<Vec3<F>>>,
    width: usize,
    height: usize,
    damping: F,
    gravity_falloff: GravityFalloff<F>,
}

impl<F: Float> ClothSimulation<F> {
    /// Create a flat grid in the XY plane centred on `center`, at rest.
    ///
    /// Points sit `spacing` apart, so every spring starts at its rest length.
    pub fn new(center: Vec3<F>, config: &ClothConfig<F>) -> Result<Self, PhysicsError> {
        let (width, height) = (config.width, config.height);
        if width < 2 || height < 2 {
            return Err(PhysicsError::InvalidGridDimensions { width, height });
        }

        let spacing = config.spacing;
        let half_w = F::from_f32((width - 1) as f32) * F::half();
        let half_h = F::from_f32((height - 1) as f32) * F::half();

        let mut points: AllocVec<PointMass<Vec3<F>>> = AllocVec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let offset = Vec3::new(
                    (F::from_f32(x as f32) - half_w) * spacing,
                    (F::from_f32(y as f32) - half_h) * spacing,
                    F::zero(),
                );
                points.push(PointMass::new(center + offset));
            }
        }

        let mut links: AllocVec<ElasticLink<Vec3<F>>> = AllocVec::with_capacity(2 * width * height);
        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;

                // Horizontal
                if x < width - 1 {
                    links.push(ElasticLink::new(index, index + 1, config.stiffness, spacing));
                }

                // Vertical
                if y < height - 1 {
                    links.push(ElasticLink::new(index, index + width, config.stiffness, spacing));
                }
            }
        }

        log::debug!("cloth created: {}x{} points, {} springs", width, height, links.len());

        Ok(ClothSimulation {
            points,
            links,
            width,
            height,
            damping: config.damping,
            gravity_falloff: config.gravity_falloff,
        })
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn pin(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.points[idx].pin();
    }

    pub fn unpin(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.points[idx].unpin();
    }

    pub fn pin_top_row(&mut self) {
        for x in 0..self.width {
            self.pin(x, 0);
        }
    }

    /// Teleport a point, typically a pinned one following its attachment.
    pub fn move_point(&mut self, x: usize, y: usize, position: Vec3<F>) {
        let idx = self.index(x, y);
        self.points[idx].move_to(position);
    }

    /// Add `force` to every point, e.g. a gust.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        for p in self.points.iter_mut() {
            p.apply_force(force);
        }
    }

    /// Advance one step without tile collision.
    pub fn simulate<O: StepObserver>(&mut self, dt: F, gravity: Vec3<F>, observer: &mut O) {
        self.advance::<NoTiles, O>(dt, gravity, None, observer);
    }

    /// Advance one step, clamping each point's planar motion against tiles.
    pub fn simulate_colliding<C, O>(&mut self, dt: F, gravity: Vec3<F>, collider: &C, observer: &mut O)
    where
        C: TileCollision<F> + ?Sized,
        O: StepObserver,
    {
        self.advance(dt, gravity, Some(collider), observer);
    }

    fn advance<C, O>(&mut self, dt: F, gravity: Vec3<F>, collider: Option<&C>, observer: &mut O)
    where
        C: TileCollision<F> + ?Sized,
        O: StepObserver,
    {
        let width = F::from_f32(self.width as f32);
        for (i, p) in self.points.iter_mut().enumerate() {
            let x = F::from_f32((i % self.width) as f32);
            p.apply_force(gravity.scale(self.gravity_falloff.factor(x / width)));
        }
        observer.on_forcing();

        for link in self.links.iter() {
            link.apply_force(&mut self.points);
        }
        observer.on_relaxation_pass(0);

        let probe = F::from_f32(COLLISION_PROBE_SIZE);
        for p in self.points.iter_mut() {
            match collider {
                Some(c) => p.integrate_colliding(dt, self.damping, c, probe),
                None => p.integrate(dt, self.damping),
            }
        }
        observer.on_integrate();

        observer.on_step_complete();
    }

    /// Recompute every point's surface normal from its grid neighbors.
    ///
    /// Uses the next point along each axis, or the previous one on the far
    /// row and column. The depth component is flipped to share the sign of
    /// the point's own depth, with zero depth counting as positive.
    pub fn recompute_normals(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let here = self.position_at(x, y);
                let up = if y < self.height - 1 { self.position_at(x, y + 1) } else { self.position_at(x, y - 1) };
                let side = if x < self.width - 1 { self.position_at(x + 1, y) } else { self.position_at(x - 1, y) };

                let mut normal = (side - here).cross(up - here).normalize();
                normal.z = normal.z.abs() * here.z.sign_or_one();

                let idx = self.index(x, y);
                self.points[idx].normal = normal;
            }
        }
    }

    /// Refresh normals and rewrite `mesh` in place, reusing its buffers.
    pub fn emit_mesh(&mut self, mesh: &mut ClothMesh<F>) {
        self.recompute_normals();
        mesh.clear();

        let width = F::from_f32(self.width as f32);
        let height = F::from_f32(self.height as f32);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = &self.points[self.index(x, y)];
                mesh.vertices.push(ClothVertex {
                    position: p.position,
                    color: Rgba::WHITE,
                    uv: Vec2::new(F::from_f32(x as f32) / width, F::from_f32(y as f32) / height),
                    normal: p.normal,
                });
            }
        }

        for x in 0..self.width - 1 {
            for y in 0..self.height - 1 {
                let top_left = (y * self.width + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((y + 1) * self.width + x) as u32;
                let bottom_right = bottom_left + 1;

                mesh.indices.extend_from_slice(&[top_left, top_right, bottom_left]);
                mesh.indices.extend_from_slice(&[bottom_left, top_right, bottom_right]);
            }
        }
    }

    /// Refresh normals and build a fresh mesh.
    pub fn mesh(&mut self) -> ClothMesh<F> {
        let mut mesh = ClothMesh::new();
        self.emit_mesh(&mut mesh);
        mesh
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn position_at(&self, x: usize, y: usize) -> Vec3<F> {
        self.points[self.index(x, y)].position
    }

    /// Normal as of the last [`ClothSimulation::recompute_normals`].
    pub fn normal_at(&self, x: usize, y: usize) -> Vec3<F> {
        self.points[self.index(x, y)].normal
    }

    pub fn point(&self, x: usize, y: usize) -> &PointMass<Vec3<F>> {
        &self.points[self.index(x, y)]
    }

    pub fn point_mut(&mut self, x: usize, y: usize) -> &mut PointMass<Vec3<F>> {
        let idx = self.index(x, y);
        &mut self.points[idx]
    }

    pub fn points(&self) -> &[PointMass<Vec3<F>>] { &self.points }
    pub fn links(&self) -> &[ElasticLink<Vec3<F>>] { &self.links }
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn damping(&self) -> F { self.damping }
    pub fn set_damping(&mut self, damping: F) { self.damping = damping; }
}
