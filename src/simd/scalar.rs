//! Portable reference kernels.
//!
//! Every accelerated path reproduces these bit for bit: each product is a
//! plain multiply, and products are accumulated in ascending index order
//! starting from the first product rather than from zero.

use crate::element::Element;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Sums `terms` left to right, seeded with the first term. Empty input sums to zero.
#[inline(always)]
pub fn ordered_sum<T: Element>(mut terms: impl Iterator<Item = T>) -> T {
    match terms.next() {
        Some(first) => terms.fold(first, |acc, term| acc + term),
        None => T::zero(),
    }
}

#[inline]
pub fn dot<T: Element, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    ordered_sum(a.iter().zip(b.iter()).map(|(&x, &y)| x * y))
}

#[inline]
pub fn mat_mul<T: Element, const K: usize, const R: usize, const C: usize>(
    a: &Matrix<T, K, R>,
    b: &Matrix<T, C, K>,
) -> Matrix<T, C, R> {
    Matrix::from_fn(|c, r| ordered_sum((0..K).map(|k| a[k][r] * b[c][k])))
}

#[inline]
pub fn mat_mul_vec<T: Element, const C: usize, const R: usize>(
    m: &Matrix<T, C, R>,
    v: &Vector<T, C>,
) -> Vector<T, R> {
    Vector::from_fn(|r| ordered_sum((0..C).map(|c| m[c][r] * v[c])))
}
