// Intrinsics are safe to call on toolchains that know SSE2 is statically enabled.
#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul};

use crate::simd::traits::SimdVec;

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
}

impl SimdVec<f32> for F32x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: _mm_set1_ps(value),
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn sum_in_order(&self) -> f32 {
        let v = self.elements;
        // lane 0 of each operand; add_ss leaves the upper lanes alone
        let mut sum = _mm_add_ss(v, _mm_shuffle_ps::<0b01_01_01_01>(v, v));
        sum = _mm_add_ss(sum, _mm_movehl_ps(v, v));
        sum = _mm_add_ss(sum, _mm_shuffle_ps::<0b11_11_11_11>(v, v));
        _mm_cvtss_f32(sum)
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        // SAFETY: this module is only compiled when SSE2 is a target feature.
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        // SAFETY: this module is only compiled when SSE2 is a target feature.
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_in_order_matches_scalar_fold() {
        let lanes = [1.0e8f32, 1.0, -1.0e8, 0.5];
        let v = unsafe { F32x4::load(lanes.as_ptr()) };
        let expected = ((lanes[0] + lanes[1]) + lanes[2]) + lanes[3];
        assert_eq!(unsafe { v.sum_in_order() }.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_load_store_unaligned() {
        let data = [0.0f32, 1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0f32; 5];
        unsafe {
            let v = F32x4::load(data.as_ptr().add(1));
            (v * F32x4::splat(2.0) + F32x4::splat(1.0)).store_at(out.as_mut_ptr().add(1));
        }
        assert_eq!(out, [0.0, 3.0, 5.0, 7.0, 9.0]);
    }
}
