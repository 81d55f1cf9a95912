//! AVX matrix product.
//!
//! Two result columns are computed per 256-bit register: the low half holds
//! column `c`, the high half column `c + 1`. Each lane still sees the same
//! multiply-then-add sequence as the portable kernel.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::matrix::Mat4;

/// # Safety
///
/// The running processor must support AVX and the OS must preserve YMM state.
#[target_feature(enable = "avx")]
pub unsafe fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    // each column of `a` repeated in both halves
    let mut columns = [_mm256_setzero_ps(); 4];
    for (k, column) in columns.iter_mut().enumerate() {
        let half = _mm_loadu_ps(a[k].as_array().as_ptr());
        *column = _mm256_broadcast_ps(&half);
    }

    let mut out = Mat4::zero();
    let base = out.as_mut_ptr();
    for c in (0..4).step_by(2) {
        let (lo, hi) = (&b[c], &b[c + 1]);

        let weights = |k: usize| (lo[k], hi[k]);
        let (l, h) = weights(0);
        let mut acc = _mm256_mul_ps(columns[0], _mm256_setr_ps(l, l, l, l, h, h, h, h));
        for (k, column) in columns.iter().enumerate().skip(1) {
            let (l, h) = weights(k);
            let pair = _mm256_setr_ps(l, l, l, l, h, h, h, h);
            acc = _mm256_add_ps(acc, _mm256_mul_ps(*column, pair));
        }

        // columns c and c + 1 are contiguous
        _mm256_storeu_ps(base.add(c * 4), acc);
    }
    out
}
