//! Portable transcendental approximations.
//!
//! Everything here is built from `+ - * /`, comparisons and bit reinterpretation,
//! so the results do not depend on the platform `libm`. Accuracy is bounded
//! rather than correctly rounded:
//!
//! | function | method                                               | f32 error           |
//! |----------|------------------------------------------------------|---------------------|
//! | `sin`    | reduce to `[0, 2π)`, fold to `[-π/2, π/2]`, Taylor   | ~2e-6 abs, `|x|<30` |
//! | `cos`    | `sin(x + π/2)`                                       | as `sin`            |
//! | `tan`    | `sin(x) / cos(x)`                                    | grows near poles    |
//! | `sqrt`   | bit-seeded inverse sqrt, Newton-Raphson, Heron polish | ~1e-7 rel          |
//! | `floor`  | truncation with a step down for negatives            | exact               |

use num::traits::{Float, FloatConst, NumCast};

pub const PI: f32 = core::f32::consts::PI;
pub const PI_HALF: f32 = core::f32::consts::FRAC_PI_2;
pub const PI_DOUBLE: f32 = core::f32::consts::TAU;

/// Floating-point widths the portable approximations are tuned for.
pub trait Portable: Float + FloatConst + 'static {
    /// Odd Taylor coefficients of `sin` after the linear term: `-1/3!, 1/5!, -1/7!, ...`
    const SIN_TAYLOR: &'static [Self];

    /// Magnitude from which every representable value is an integer.
    const EXACT_INTEGER: Self;

    /// `180`, the degree measure of `π` radians.
    const HALF_TURN_DEGREES: Self;

    /// Newton-Raphson refinements applied to the inverse square root seed.
    const RSQRT_STEPS: usize;

    /// Pre-scale for subnormal `sqrt` inputs (2^64) and its square root (2^32).
    const SUBNORMAL_SCALE: Self;
    const SUBNORMAL_SCALE_SQRT: Self;

    /// First guess of `1 / sqrt(self)` from the bit pattern of a positive normal value.
    fn rsqrt_seed(self) -> Self;
}

impl Portable for f32 {
    const SIN_TAYLOR: &'static [f32] = &[
        -1.0 / 6.0,
        1.0 / 120.0,
        -1.0 / 5040.0,
        1.0 / 362880.0,
        -1.0 / 39916800.0,
    ];
    const EXACT_INTEGER: f32 = 8_388_608.0;
    const HALF_TURN_DEGREES: f32 = 180.0;
    const RSQRT_STEPS: usize = 2;
    const SUBNORMAL_SCALE: f32 = 18_446_744_073_709_551_616.0;
    const SUBNORMAL_SCALE_SQRT: f32 = 4_294_967_296.0;

    #[inline(always)]
    fn rsqrt_seed(self) -> f32 {
        f32::from_bits(0x5f37_59df - (self.to_bits() >> 1))
    }
}

impl Portable for f64 {
    const SIN_TAYLOR: &'static [f64] = &[
        -1.0 / 6.0,
        1.0 / 120.0,
        -1.0 / 5040.0,
        1.0 / 362880.0,
        -1.0 / 39916800.0,
        1.0 / 6227020800.0,
        -1.0 / 1307674368000.0,
        1.0 / 355687428096000.0,
    ];
    const EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;
    const HALF_TURN_DEGREES: f64 = 180.0;
    const RSQRT_STEPS: usize = 4;
    const SUBNORMAL_SCALE: f64 = 18_446_744_073_709_551_616.0;
    const SUBNORMAL_SCALE_SQRT: f64 = 4_294_967_296.0;

    #[inline(always)]
    fn rsqrt_seed(self) -> f64 {
        f64::from_bits(0x5fe6_eb50_c7b5_37a9 - (self.to_bits() >> 1))
    }
}

/// Converts degrees to radians.
#[inline]
pub fn radians<F: Portable>(degrees: F) -> F {
    degrees * F::PI() / F::HALF_TURN_DEGREES
}

/// Portable sine. Non-finite inputs produce NaN.
pub fn sin<F: Portable>(x: F) -> F {
    if !x.is_finite() {
        return F::nan();
    }

    let zero = F::zero();
    let pi = F::PI();
    let pi_half = F::FRAC_PI_2();
    let tau = F::TAU();

    // x to [0, 2pi)
    let mut r = x;
    if !(r >= zero && r < tau) {
        r = r - floor(r / tau) * tau;
        for _ in 0..2 {
            if r >= tau {
                r = r - tau;
            } else if r < zero {
                r = r + tau;
            }
        }
        // the period is below the input's own precision
        if !(r >= zero && r < tau) {
            r = zero;
        }
    }

    // [-pi/2, pi/2]
    let mut flip = false;
    if r > pi {
        r = r - pi;
        flip = true;
    }
    if r > pi_half {
        r = pi - r;
    }

    let r2 = r * r;
    let tail = F::SIN_TAYLOR
        .iter()
        .rev()
        .fold(zero, |acc, &coefficient| coefficient + r2 * acc);
    let result = r * (F::one() + r2 * tail);

    if flip {
        -result
    } else {
        result
    }
}

/// Portable cosine, `sin(x + π/2)`.
#[inline]
pub fn cos<F: Portable>(x: F) -> F {
    sin(x + F::FRAC_PI_2())
}

/// Portable tangent, `sin(x) / cos(x)`.
#[inline]
pub fn tan<F: Portable>(x: F) -> F {
    sin(x) / cos(x)
}

/// Portable square root.
///
/// Zero, negative and NaN inputs return `0`; `+inf` returns `+inf`.
pub fn sqrt<F: Portable>(x: F) -> F {
    if !(x > F::zero()) {
        return F::zero();
    }
    if x.is_infinite() {
        return x;
    }
    if x < F::min_positive_value() {
        return sqrt(x * F::SUBNORMAL_SCALE) / F::SUBNORMAL_SCALE_SQRT;
    }

    let half = F::one() / (F::one() + F::one());
    let three_halves = F::one() + half;
    let x_half = half * x;

    let mut y = x.rsqrt_seed();
    for _ in 0..F::RSQRT_STEPS {
        y = y * (three_halves - x_half * y * y);
    }

    let s = x * y;
    half * (s + x / s)
}

/// Portable floor.
pub fn floor<F: Portable>(x: F) -> F {
    // NaN, infinities and magnitudes that are already integral
    if !(x.abs() < F::EXACT_INTEGER) {
        return x;
    }

    let truncated = match x.to_i64().and_then(<F as NumCast>::from) {
        Some(t) => t,
        None => return x,
    };

    if x < truncated {
        truncated - F::one()
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sin_key_angles() {
        assert_eq!(sin(0.0f32), 0.0);
        assert!((sin(PI_HALF) - 1.0).abs() < 1e-6);
        assert!(sin(PI).abs() < 1e-6);
        assert!((sin(-PI_HALF) + 1.0).abs() < 1e-6);
        assert!((sin(PI / 6.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cos_of_right_angle_is_exact_zero() {
        assert_eq!(cos(PI_HALF), 0.0);
        assert!((cos(0.0f32) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sin_non_finite_is_nan() {
        assert!(sin(f32::NAN).is_nan());
        assert!(sin(f32::INFINITY).is_nan());
        assert!(cos(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_sin_huge_input_terminates() {
        let value = sin(1.0e30f32);
        assert!(value.is_finite());
        assert!(value.abs() <= 1.0);
    }

    #[test]
    fn test_f64_sin_is_tighter_than_f32() {
        for &x in &[0.3f64, 1.1, 2.5, 4.0, -3.3] {
            assert!((sin(x) - x.sin()).abs() < 1e-12, "x = {x}");
        }
    }

    #[test]
    fn test_tan_quarter_turn() {
        assert!((tan(PI / 4.0) - 1.0).abs() < 1e-5);
        assert!((tan(-PI / 4.0) + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sqrt_edge_cases() {
        assert_eq!(sqrt(0.0f32), 0.0);
        assert_eq!(sqrt(-4.0f32), 0.0);
        assert_eq!(sqrt(f32::NAN), 0.0);
        assert_eq!(sqrt(f32::INFINITY), f32::INFINITY);
        assert!((sqrt(4.0f32) - 2.0).abs() < 1e-6);
        assert!((sqrt(25.0f64) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sqrt_subnormal() {
        let x = f32::MIN_POSITIVE / 16.0;
        let expected = x.sqrt();
        assert!(((sqrt(x) - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(1.7f32), 1.0);
        assert_eq!(floor(-1.2f32), -2.0);
        assert_eq!(floor(-3.0f32), -3.0);
        assert_eq!(floor(0.0f32), 0.0);
        assert_eq!(floor(1.0e10f32), 1.0e10);
        assert!(floor(f32::NAN).is_nan());
        assert_eq!(floor(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(floor(-2.5f64), -3.0);
    }

    #[test]
    fn test_radians() {
        assert!((radians(180.0f32) - PI).abs() < 1e-6);
        assert!((radians(90.0f64) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
