//! Element types accepted by [`Vector`], [`Matrix`] and [`Quaternion`](crate::Quaternion).
//!
//! [`Element`] carries the three reduction kernels that the algebra is built
//! on. Their default bodies are the portable reference kernels; `f32`
//! overrides them so that the 4-wide shapes go through runtime dispatch while
//! every other shape keeps the reference path.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num::traits::{One, Zero};

use crate::math::Portable;
use crate::matrix::Matrix;
use crate::simd::{self, scalar};
use crate::vector::Vector;

/// A numeric type the fixed-size algebra can be instantiated with.
pub trait Element:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// Sum of elementwise products, accumulated left to right.
    #[inline(always)]
    fn dot<const N: usize>(a: &Vector<Self, N>, b: &Vector<Self, N>) -> Self {
        scalar::dot(a, b)
    }

    /// `result[c][r] = Σ_k a[k][r] · b[c][k]`, ascending `k`.
    #[inline(always)]
    fn mat_mul<const K: usize, const R: usize, const C: usize>(
        a: &Matrix<Self, K, R>,
        b: &Matrix<Self, C, K>,
    ) -> Matrix<Self, C, R> {
        scalar::mat_mul(a, b)
    }

    /// `result[r] = Σ_c m[c][r] · v[c]`, ascending `c`.
    #[inline(always)]
    fn mat_mul_vec<const C: usize, const R: usize>(
        m: &Matrix<Self, C, R>,
        v: &Vector<Self, C>,
    ) -> Vector<Self, R> {
        scalar::mat_mul_vec(m, v)
    }
}

/// Floating-point elements: everything [`Element`] offers plus the portable
/// transcendental functions needed by lengths, rotations and projections.
pub trait Real: Element + Portable {}

impl<T: Element + Portable> Real for T {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);

impl Element for f32 {
    #[inline]
    fn dot<const N: usize>(a: &Vector<f32, N>, b: &Vector<f32, N>) -> f32 {
        if N == 4 {
            simd::dot4(&Vector::from_fn(|i| a[i]), &Vector::from_fn(|i| b[i]))
        } else {
            scalar::dot(a, b)
        }
    }

    #[inline]
    fn mat_mul<const K: usize, const R: usize, const C: usize>(
        a: &Matrix<f32, K, R>,
        b: &Matrix<f32, C, K>,
    ) -> Matrix<f32, C, R> {
        if K == 4 && R == 4 && C == 4 {
            let product = simd::mat4_mul(
                &Matrix::from_fn(|c, r| a[c][r]),
                &Matrix::from_fn(|c, r| b[c][r]),
            );
            Matrix::from_fn(|c, r| product[c][r])
        } else {
            scalar::mat_mul(a, b)
        }
    }

    #[inline]
    fn mat_mul_vec<const C: usize, const R: usize>(
        m: &Matrix<f32, C, R>,
        v: &Vector<f32, C>,
    ) -> Vector<f32, R> {
        if C == 4 && R == 4 {
            let product = simd::mat4_mul_vec4(
                &Matrix::from_fn(|c, r| m[c][r]),
                &Vector::from_fn(|i| v[i]),
            );
            Vector::from_fn(|i| product[i])
        } else {
            scalar::mat_mul_vec(m, v)
        }
    }
}
