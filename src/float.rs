//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting floating-point operations needed by the rope and cloth code.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// `self` raised to the power `exponent`.
    fn powf(self, exponent: Self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from f64.
    fn from_f64(v: f64) -> Self;
    /// Widen to f64 (root finding runs in double precision).
    fn to_f64(self) -> f64;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Linear interpolation: self + (other - self) * t
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Where `value` sits between `from` and `to`, clamped to [0, 1].
    ///
    /// `from` may be larger than `to`, which yields a falling ramp.
    fn inverse_lerp(from: Self, to: Self, value: Self) -> Self {
        let span = to - from;
        if span == Self::zero() {
            return Self::zero();
        }
        ((value - from) / span).clamp(Self::zero(), Self::one())
    }

    /// Sign with zero treated as positive: `-1` for negative values, `1` otherwise.
    fn sign_or_one(self) -> Self {
        if self < Self::zero() { -Self::one() } else { Self::one() }
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn sinh(self) -> Self { libm::sinhf(self) }
    fn cosh(self) -> Self { libm::coshf(self) }
    fn powf(self, exponent: Self) -> Self { libm::powf(self, exponent) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn floor(self) -> Self { libm::floorf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn sinh(self) -> Self { libm::sinh(self) }
    fn cosh(self) -> Self { libm::cosh(self) }
    fn powf(self, exponent: Self) -> Self { libm::pow(self, exponent) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn floor(self) -> Self { libm::floor(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn to_f64(self) -> f64 { self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_lerp_falling_ramp() {
        // Near/far band used by mover response: full strength inside 10, none past 37.
        assert_eq!(f32::inverse_lerp(37.0, 10.0, 5.0), 1.0);
        assert_eq!(f32::inverse_lerp(37.0, 10.0, 50.0), 0.0);
        assert!((f32::inverse_lerp(37.0, 10.0, 23.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn inverse_lerp_degenerate_band() {
        assert_eq!(f64::inverse_lerp(1.0, 1.0, 3.0), 0.0);
    }

    #[test]
    fn sign_or_one_treats_zero_as_positive() {
        assert_eq!(0.0f32.sign_or_one(), 1.0);
        assert_eq!((-3.0f32).sign_or_one(), -1.0);
    }
}
