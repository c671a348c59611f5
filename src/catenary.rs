//! Rope length from span and sag, via the catenary equation.
//!
//! A rope hanging between two supports at equal height, `w` apart, follows
//! `y(x) = a cosh(x / a)`. Its sag below the supports is
//! `h = a (cosh(w / 2a) - 1)` and its length is `L = 2a sinh(w / 2a)`.
//! Given `w` and `h` the shape parameter `a` has no closed form, so it is
//! found with Newton-Raphson and plugged into the length formula.
//!
//! There is no convergence check. A fixed iteration budget runs and the
//! last estimate is used; spans with a very shallow sag relative to their
//! width converge slowly from the `a = h` seed and give poor lengths.

use crate::float::Float;

/// Newton-Raphson iterations used by [`CatenarySolver::default`].
pub const DEFAULT_ITERATIONS: usize = 12;

/// Step of the central-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-4;

/// Central-difference estimate of `f'(x)`.
pub fn approximate_derivative<G: Fn(f64) -> f64>(f: G, x: f64) -> f64 {
    (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP)
}

/// Newton-Raphson from `initial_guess`, for exactly `iterations` steps.
pub fn find_root<G: Fn(f64) -> f64>(f: G, initial_guess: f64, iterations: usize) -> f64 {
    let mut x = initial_guess;
    for _ in 0..iterations {
        let slope = approximate_derivative(&f, x);
        x -= f(x) / slope;
    }
    x
}

/// Stateless catenary solver with a tunable iteration budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CatenarySolver {
    pub iterations: usize,
}

impl CatenarySolver {
    pub fn new(iterations: usize) -> Self {
        CatenarySolver { iterations }
    }

    /// The catenary parameter `a` for supports `span` apart sagging by `sag`.
    pub fn parameter<F: Float>(&self, span: F, sag: F) -> F {
        let w = span.to_f64();
        let h = sag.to_f64();
        let a = find_root(|a| a * (libm::cosh(w / (a * 2.0)) - 1.0) - h, h, self.iterations);
        F::from_f64(a)
    }

    /// Total rope length that hangs `sag` below supports `span` apart.
    pub fn length<F: Float>(&self, span: F, sag: F) -> F {
        let a = self.parameter(span, sag);
        (span / a * F::half()).sinh() * a * F::two()
    }
}

impl Default for CatenarySolver {
    fn default() -> Self {
        CatenarySolver { iterations: DEFAULT_ITERATIONS }
    }
}

/// [`CatenarySolver::length`] with the default iteration budget.
pub fn catenary_length<F: Float>(span: F, sag: F) -> F {
    CatenarySolver::default().length(span, sag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_of_square() {
        let d = approximate_derivative(|x| x * x, 3.0);
        assert!((d - 6.0).abs() < 1e-6);
    }

    #[test]
    fn root_of_shifted_square() {
        let r = find_root(|x| x * x - 2.0, 1.0, 8);
        assert!((r - core::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn parameter_reproduces_sag() {
        let a: f64 = CatenarySolver::default().parameter(100.0, 20.0);
        let sag = a * (libm::cosh(100.0 / (2.0 * a)) - 1.0);
        assert!((sag - 20.0).abs() < 1e-6);
    }

    #[test]
    fn zero_iterations_keeps_seed() {
        let a: f32 = CatenarySolver::new(0).parameter(40.0, 5.0);
        assert_eq!(a, 5.0);
    }
}
