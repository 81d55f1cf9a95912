//! Kernel bodies shared by every 128-bit register type.

use super::traits::SimdVec;
use crate::matrix::Mat4;
use crate::vector::Vec4;

// Σ_k columns[k] · weights[k], k ascending
#[inline(always)]
unsafe fn combine<V: SimdVec<f32>>(columns: &[V; 4], weights: &[f32; 4]) -> V {
    let mut acc = columns[0] * V::splat(weights[0]);
    for k in 1..4 {
        acc = acc + columns[k] * V::splat(weights[k]);
    }
    acc
}

#[inline(always)]
unsafe fn load_columns<V: SimdVec<f32>>(m: &Mat4) -> [V; 4] {
    [
        V::load(m[0].as_array().as_ptr()),
        V::load(m[1].as_array().as_ptr()),
        V::load(m[2].as_array().as_ptr()),
        V::load(m[3].as_array().as_ptr()),
    ]
}

/// # Safety
///
/// The running processor must support the instruction set behind `V`.
#[inline(always)]
pub(crate) unsafe fn dot4<V: SimdVec<f32>>(a: &Vec4, b: &Vec4) -> f32 {
    let product = V::load(a.as_array().as_ptr()) * V::load(b.as_array().as_ptr());
    product.sum_in_order()
}

/// # Safety
///
/// The running processor must support the instruction set behind `V`.
#[inline(always)]
pub(crate) unsafe fn mat4_mul_vec4<V: SimdVec<f32>>(m: &Mat4, v: &Vec4) -> Vec4 {
    let columns = load_columns::<V>(m);
    let mut out = Vec4::zero();
    combine(&columns, v.as_array()).store_at(out.as_mut_array().as_mut_ptr());
    out
}

/// # Safety
///
/// The running processor must support the instruction set behind `V`.
#[inline(always)]
pub(crate) unsafe fn mat4_mul<V: SimdVec<f32>>(a: &Mat4, b: &Mat4) -> Mat4 {
    let columns = load_columns::<V>(a);
    let mut out = Mat4::zero();
    for c in 0..4 {
        combine(&columns, b[c].as_array()).store_at(out[c].as_mut_array().as_mut_ptr());
    }
    out
}
