// Intrinsics are safe to call on toolchains that know NEON is statically enabled.
#![allow(unused_unsafe)]

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Mul};

use crate::simd::traits::SimdVec;

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

impl SimdVec<f32> for F32x4 {
    const LANES: usize = LANE_COUNT;

    /// Creates a new vector with all elements set to the same value.
    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: vdupq_n_f32(value),
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn sum_in_order(&self) -> f32 {
        // vaddvq_f32 pairs lanes; fold them one at a time instead
        let v = self.elements;
        let mut sum = vgetq_lane_f32::<0>(v) + vgetq_lane_f32::<1>(v);
        sum += vgetq_lane_f32::<2>(v);
        sum + vgetq_lane_f32::<3>(v)
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        // SAFETY: NEON is part of the AArch64 baseline.
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    // vmulq rather than vmlaq/vfmaq: every product must round on its own
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        // SAFETY: NEON is part of the AArch64 baseline.
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}
