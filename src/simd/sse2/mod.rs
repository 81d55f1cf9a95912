//! SSE2 kernels.
//!
//! Compiled only for x86 targets where SSE2 is part of the baseline, so the
//! wrappers here are safe to call on any processor the binary runs on.

pub mod f32x4;

use f32x4::F32x4;

use crate::matrix::Mat4;
use crate::simd::kernels;
use crate::vector::Vec4;

#[inline]
pub fn dot4(a: &Vec4, b: &Vec4) -> f32 {
    // SAFETY: SSE2 is statically enabled for this target.
    unsafe { kernels::dot4::<F32x4>(a, b) }
}

#[inline]
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    // SAFETY: SSE2 is statically enabled for this target.
    unsafe { kernels::mat4_mul::<F32x4>(a, b) }
}

#[inline]
pub fn mat4_mul_vec4(m: &Mat4, v: &Vec4) -> Vec4 {
    // SAFETY: SSE2 is statically enabled for this target.
    unsafe { kernels::mat4_mul_vec4::<F32x4>(m, v) }
}
