//! Pairwise constraints: force-based springs for cloth, positional links for ropes.

use crate::float::Float;
use crate::point::PointMass;
use crate::rope::RopeSegment;
use crate::vec::{Vec, Vec2};

/// A Hooke spring between two point masses, addressed by index.
///
/// Contributes force only; positions change at the next integration.
#[derive(Clone, Debug)]
pub struct ElasticLink<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
    pub stiffness: V::Scalar,
}

impl<V: Vec> ElasticLink<V> {
    pub fn new(a: usize, b: usize, stiffness: V::Scalar, rest_length: V::Scalar) -> Self {
        ElasticLink { a, b, rest_length, stiffness }
    }

    /// Push both endpoints toward the rest length.
    ///
    /// Coincident endpoints have no direction to push along and are skipped.
    pub fn apply_force(&self, points: &mut [PointMass<V>]) {
        let delta = points[self.b].position - points[self.a].position;
        let length = delta.length();
        if length == V::Scalar::zero() {
            return;
        }

        let extension = length - self.rest_length;
        let force = delta.scale(extension * self.stiffness / length);

        if !points[self.a].fixed {
            points[self.a].apply_force(force);
        }
        if !points[self.b].fixed {
            points[self.b].apply_force(-force);
        }
    }
}

/// Displacements a [`DistanceLink`] wants applied to its endpoints.
///
/// `None` marks a fixed endpoint that must not move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkCorrection<F: Float> {
    pub a: Option<Vec2<F>>,
    pub b: Option<Vec2<F>>,
}

/// A positional constraint between adjacent rope segments.
///
/// Unlike [`ElasticLink`] it moves positions directly. Two free endpoints
/// split the correction; a single free endpoint takes all of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceLink<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceLink<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceLink { a, b, rest_length }
    }

    /// The link from segment `index` to `index + 1`.
    pub fn following(index: usize, rest_length: F) -> Self {
        DistanceLink { a: index, b: index + 1, rest_length }
    }

    /// Compute the correction toward the rest length without applying it.
    pub fn correction(&self, segments: &[RopeSegment<F>]) -> LinkCorrection<F> {
        let first = &segments[self.a];
        let second = &segments[self.b];

        let extension = first.position.distance(second.position) - self.rest_length;
        let mut pull = second.position.safe_direction_to(first.position).scale(extension);
        if !first.fixed && !second.fixed {
            pull = pull.scale(F::half());
        }

        LinkCorrection {
            a: (!first.fixed).then(|| -pull),
            b: (!second.fixed).then_some(pull),
        }
    }
}
