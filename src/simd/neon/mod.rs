//! ARM NEON kernels for 128-bit vector operations.
//!
//! NEON is part of the AArch64 baseline, so these wrappers are safe to call
//! on any processor the binary runs on. Products use `vmulq_f32` followed by
//! `vaddq_f32`; the fused forms would round differently from the portable
//! kernels.

pub mod f32x4;

use f32x4::F32x4;

use crate::matrix::Mat4;
use crate::simd::kernels;
use crate::vector::Vec4;

#[inline]
pub fn dot4(a: &Vec4, b: &Vec4) -> f32 {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { kernels::dot4::<F32x4>(a, b) }
}

#[inline]
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { kernels::mat4_mul::<F32x4>(a, b) }
}

#[inline]
pub fn mat4_mul_vec4(m: &Mat4, v: &Vec4) -> Vec4 {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { kernels::mat4_mul_vec4::<F32x4>(m, v) }
}
