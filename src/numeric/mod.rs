//! # Scalar Policy and Angle Helpers
//!
//! All rotation types are generic over a [`Scalar`], which is implemented for
//! `f32` and `f64` only. Every trigonometric operation runs at the precision of
//! the chosen scalar; nothing is silently promoted to `f64`.
//!
//! The helpers here are the numeric building blocks of the canonicalizer:
//! a positive floating-point modulus and wrapping into [-π, π).

use nalgebra::RealField;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Real scalar type usable as the precision of a rotation
///
/// Sealed: only `f32` and `f64` implement it.
pub trait Scalar: RealField + Copy + private::Sealed {
    /// Widen to `f64`, used when reporting values in errors and logs
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Converts an `f64` constant into the scalar type `T`
pub(crate) fn constant<T: Scalar>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Floating-point modulo with a result in `[0, y)` for `y > 0` (`(y, 0]` for `y < 0`)
///
/// Unlike `%`, the result takes the sign of the divisor. The two cut-off
/// cases of the naive `x - y * floor(x / y)` are handled explicitly:
/// a remainder that rounds up to `y` becomes `0`, and a tiny remainder of the
/// wrong sign is folded back into range. A zero divisor returns `x`.
///
/// # Examples
///
/// ```rust
/// use rotations::numeric::floating_point_modulo;
///
/// assert_eq!(floating_point_modulo(7.0, 3.0), 1.0);
/// assert_eq!(floating_point_modulo(-1.0, 3.0), 2.0);
/// assert_eq!(floating_point_modulo(-1e-17, 360.0), 0.0);
/// ```
pub fn floating_point_modulo<T: Scalar>(x: T, y: T) -> T {
    let zero = T::zero();
    if y == zero {
        return x;
    }

    let m = x - y * (x / y).floor();

    if y > zero {
        if m >= y {
            return zero;
        }
        if m < zero {
            return if y + m == y { zero } else { y + m };
        }
    } else {
        if m <= y {
            return zero;
        }
        if m > zero {
            return if y + m == y { zero } else { y + m };
        }
    }

    m
}

/// Wraps an angle into [-π, π)
///
/// Angles already inside the interval are returned unchanged, so wrapping is
/// exactly idempotent. Everything else goes through
/// `floating_point_modulo(angle + π, 2π) - π`.
///
/// # Examples
///
/// ```rust
/// use rotations::numeric::wrap_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(wrap_angle(0.25), 0.25);
/// assert_eq!(wrap_angle(PI), -PI);
/// assert!((wrap_angle(2.0 * PI + 0.1) - 0.1).abs() < 1e-12);
/// ```
pub fn wrap_angle<T: Scalar>(angle: T) -> T {
    let pi = T::pi();
    if angle >= -pi && angle < pi {
        return angle;
    }
    floating_point_modulo(angle + pi, T::two_pi()) - pi
}
