//! Runtime-dispatched 4-wide `f32` kernels.
//!
//! Three operations are accelerated: the 4-element dot product, the 4×4
//! matrix product and the 4×4 matrix-vector product. Each public entry point
//! reads the process-wide [ceiling](dispatch::ceiling) and runs the fastest
//! kernel it permits:
//!
//! | operation       | x86                         | AArch64 | otherwise |
//! |-----------------|-----------------------------|---------|-----------|
//! | `dot4`          | SSE2                        | NEON    | scalar    |
//! | `mat4_mul`      | AVX, else SSE2              | NEON    | scalar    |
//! | `mat4_mul_vec4` | SSE2                        | NEON    | scalar    |
//!
//! All kernels are bit-identical to the [`scalar`] reference for finite
//! inputs, so lowering the ceiling never changes a result.
//!
//! # Conditional Compilation
//!
//! The build script enables `linmath_x86_simd` on x86 targets with SSE2 and
//! `linmath_neon` on AArch64. Setting `LINMATH_FORCE_SCALAR` at build time
//! compiles every accelerated kernel out.

pub mod detect;
pub mod dispatch;
pub mod level;
pub mod scalar;
pub mod traits;

#[cfg(any(linmath_x86_simd, linmath_neon))]
mod kernels;

#[cfg(linmath_x86_simd)]
pub mod avx;
#[cfg(linmath_x86_simd)]
pub mod sse2;

#[cfg(linmath_neon)]
pub mod neon;

pub use detect::{detected, measure};
pub use dispatch::{
    ceiling, kernel_path, override_ceiling, reset_ceiling, set_ceiling, CeilingGuard, KernelPath,
};
pub use level::{CapabilityLevel, Family};

use crate::matrix::Mat4;
use crate::vector::Vec4;

/// `Σ a[i]·b[i]`, accumulated in index order.
#[inline]
pub fn dot4(a: &Vec4, b: &Vec4) -> f32 {
    let level = ceiling();
    #[cfg(linmath_x86_simd)]
    {
        if level >= CapabilityLevel::Sse2 {
            return sse2::dot4(a, b);
        }
    }
    #[cfg(linmath_neon)]
    {
        if level >= CapabilityLevel::Neon {
            return neon::dot4(a, b);
        }
    }
    let _ = level;
    scalar::dot(a, b)
}

/// Column-major 4×4 product `a · b`.
#[inline]
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let level = ceiling();
    #[cfg(linmath_x86_simd)]
    {
        if level >= CapabilityLevel::Avx {
            // SAFETY: the ceiling is clamped to the detected level, and AVX is
            // only detected when both the processor and the OS support it.
            return unsafe { avx::mat4_mul(a, b) };
        }
        if level >= CapabilityLevel::Sse2 {
            return sse2::mat4_mul(a, b);
        }
    }
    #[cfg(linmath_neon)]
    {
        if level >= CapabilityLevel::Neon {
            return neon::mat4_mul(a, b);
        }
    }
    let _ = level;
    scalar::mat_mul(a, b)
}

/// `m · v` for a column vector `v`.
#[inline]
pub fn mat4_mul_vec4(m: &Mat4, v: &Vec4) -> Vec4 {
    let level = ceiling();
    #[cfg(linmath_x86_simd)]
    {
        if level >= CapabilityLevel::Sse2 {
            return sse2::mat4_mul_vec4(m, v);
        }
    }
    #[cfg(linmath_neon)]
    {
        if level >= CapabilityLevel::Neon {
            return neon::mat4_mul_vec4(m, v);
        }
    }
    let _ = level;
    scalar::mat_mul_vec(m, v)
}
