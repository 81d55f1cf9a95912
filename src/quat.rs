//! Quaternions for 3D rotation.
//!
//! Stored as a vector part `v = (x, y, z)` followed by the scalar `w`, i.e.
//! `x, y, z, w` in memory. Rotations follow the right-handed convention of
//! [`Matrix::from_rotation_x`] and friends, and [`Quaternion::to_matrix`]
//! produces the same matrix as the equivalent axis rotation.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use num::traits::NumCast;

use crate::element::{Element, Real};
use crate::math;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Smallest pivot radicand [`Quaternion::from_matrix`] will take a square root of.
///
/// The radicand is `4·v_i²` for the pivot component `v_i`, so the identity
/// fallback covers rotations up to roughly `sqrt(1e-6) = 1e-3` rad.
/// Comparing `sqrt(radicand)` instead would shrink that to about `1e-6` rad.
/// Below a few hundredths of a radian the recovered quaternion also loses
/// precision, because the diagonal-only pivot suffers cancellation there.
pub const FROM_MATRIX_PIVOT_EPSILON: f64 = 1.0e-6;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quaternion<T> {
    pub v: Vector<T, 3>,
    pub w: T,
}

pub type Quat = Quaternion<f32>;
pub type DQuat = Quaternion<f64>;

impl<T: Element> Quaternion<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: Vector::new([x, y, z]),
            w,
        }
    }

    #[inline]
    pub fn from_parts(v: Vector<T, 3>, w: T) -> Self {
        Self { v, w }
    }

    /// `(0, 0, 0, 1)`, the rotation by nothing.
    #[inline]
    pub fn identity() -> Self {
        Self::from_parts(Vector::zero(), T::one())
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(Vector::zero(), T::zero())
    }

    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::from_parts(self.v.scale(s), self.w * s)
    }

    /// Four-component dot product, vector part first.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.v.dot(&rhs.v) + self.w * rhs.w
    }

    /// Hamilton product `self · rhs`; applying the result rotates by `rhs` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let v = self.v.cross(&rhs.v) + self.v.scale(rhs.w) + rhs.v.scale(self.w);
        let w = self.w * rhs.w - self.v.dot(&rhs.v);
        Self::from_parts(v, w)
    }

    /// Rotates `v` by this quaternion, which is assumed to be unit length.
    pub fn rotate_vector(&self, v: &Vector<T, 3>) -> Vector<T, 3> {
        let two = T::one() + T::one();
        let c = self.v.cross(v).scale(two);
        *v + c.scale(self.w) + self.v.cross(&c)
    }

    /// Rotation matrix of a unit quaternion, with the homogeneous `[3][3] = 1`.
    pub fn to_matrix(&self) -> Matrix<T, 4, 4> {
        let (a, b, c, d) = (self.w, self.v.x(), self.v.y(), self.v.z());
        let (a2, b2, c2, d2) = (a * a, b * b, c * c, d * d);
        let two = T::one() + T::one();

        let mut m = Matrix::zero();
        m[0][0] = a2 + b2 - c2 - d2;
        m[0][1] = two * (b * c + a * d);
        m[0][2] = two * (b * d - a * c);

        m[1][0] = two * (b * c - a * d);
        m[1][1] = a2 - b2 + c2 - d2;
        m[1][2] = two * (c * d + a * b);

        m[2][0] = two * (b * d + a * c);
        m[2][1] = two * (c * d - a * b);
        m[2][2] = a2 - b2 - c2 + d2;

        m[3][3] = T::one();
        m
    }
}

impl<T: Element + Neg<Output = T>> Quaternion<T> {
    /// `(-v, w)`; the inverse of a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.v, self.w)
    }
}

impl<T: Real> Quaternion<T> {
    #[inline]
    pub fn length(&self) -> T {
        math::sqrt(self.dot(self))
    }

    /// Unit quaternion in the same direction; zero stays zero.
    ///
    /// A quaternion whose squared length overflows to infinity also yields
    /// zero, since its inverse length rounds to zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        let inverse = T::one() / length;
        if length == T::zero() || !inverse.is_finite() {
            return Self::zero();
        }
        self.scale(inverse)
    }

    /// Rotation by `angle` radians around `axis`, which need not be unit length.
    pub fn from_axis_angle(angle: T, axis: &Vector<T, 3>) -> Self {
        let half = angle / (T::one() + T::one());
        let n = axis.normalize();
        Self::from_parts(n.scale(math::sin(half)), math::cos(half))
    }

    /// Recovers a unit quaternion from the rotation block of `m`.
    ///
    /// Pivots on the largest diagonal element of the 3×3 block, which keeps
    /// the square root away from cancellation when the trace is small or
    /// negative. A pivot radicand below [`FROM_MATRIX_PIVOT_EPSILON`] (near
    /// identity rotations, non-finite input) yields the identity. The sign of
    /// the result makes the pivot component non-negative.
    pub fn from_matrix(m: &Matrix<T, 4, 4>) -> Self {
        let mut i = 0;
        for d in 1..3 {
            if m[d][d] > m[i][i] {
                i = d;
            }
        }
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);

        let radicand = T::one() + m[i][i] - m[j][j] - m[k][k];
        let epsilon = <T as NumCast>::from(FROM_MATRIX_PIVOT_EPSILON).unwrap_or_else(T::epsilon);
        if !(radicand >= epsilon) {
            return Self::identity();
        }

        let two = T::one() + T::one();
        let root = math::sqrt(radicand);
        let inverse = T::one() / (two * root);

        // m[c][r] is row r of column c
        let mut v = Vector::zero();
        v[i] = root / two;
        v[j] = (m[i][j] + m[j][i]) * inverse;
        v[k] = (m[i][k] + m[k][i]) * inverse;
        let w = (m[j][k] - m[k][j]) * inverse;

        Self::from_parts(v, w)
    }
}

/// `0..3` address the vector part, `3` is `w`.
impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0..=2 => &self.v[index],
            3 => &self.w,
            _ => panic!("quaternion index out of range: {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0..=2 => &mut self.v[index],
            3 => &mut self.w,
            _ => panic!("quaternion index out of range: {index}"),
        }
    }
}

impl<T: Element> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.v + rhs.v, self.w + rhs.w)
    }
}

impl<T: Element> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.v - rhs.v, self.w - rhs.w)
    }
}

impl<T: Element> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        self.scale(s)
    }
}

impl<T: Element> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Element> Mul<Vector<T, 3>> for Quaternion<T> {
    type Output = Vector<T, 3>;

    #[inline]
    fn mul(self, v: Vector<T, 3>) -> Vector<T, 3> {
        self.rotate_vector(&v)
    }
}
