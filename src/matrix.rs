//! Column-major matrices and the usual graphics transforms.
//!
//! `Matrix<T, C, R>` has `C` columns of `R` rows; `m[c][r]` is the element in
//! column `c`, row `r`. Products follow the column-vector convention:
//! `(A · B)[c][r] = Σ_k A[k][r] · B[c][k]` and `M · v` treats `v` as a column.
//!
//! The transform builders post-multiply, so `m.rotate_x(a)` is `m · Rx(a)`
//! and the new transform is applied to points first.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num::traits::NumCast;

use crate::element::{Element, Real};
use crate::math;
use crate::vector::Vector;

/// Below this length an arbitrary rotation axis is treated as degenerate.
pub const ROTATION_AXIS_EPSILON: f64 = 1.0e-4;

/// `C` columns, each a [`Vector`] of `R` rows, stored contiguously.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const C: usize, const R: usize> {
    cols: [Vector<T, R>; C],
}

pub type Mat2Of<T> = Matrix<T, 2, 2>;
pub type Mat3Of<T> = Matrix<T, 3, 3>;
pub type Mat4Of<T> = Matrix<T, 4, 4>;

pub type Mat2 = Matrix<f32, 2, 2>;
pub type Mat3 = Matrix<f32, 3, 3>;
pub type Mat4 = Matrix<f32, 4, 4>;
pub type Mat2x3 = Matrix<f32, 2, 3>;
pub type Mat2x4 = Matrix<f32, 2, 4>;
pub type Mat3x2 = Matrix<f32, 3, 2>;
pub type Mat3x4 = Matrix<f32, 3, 4>;
pub type Mat4x2 = Matrix<f32, 4, 2>;
pub type Mat4x3 = Matrix<f32, 4, 3>;

pub type DMat2 = Matrix<f64, 2, 2>;
pub type DMat3 = Matrix<f64, 3, 3>;
pub type DMat4 = Matrix<f64, 4, 4>;

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    #[inline]
    pub const fn from_columns(cols: [Vector<T, R>; C]) -> Self {
        Self { cols }
    }

    #[inline]
    pub const fn columns(&self) -> &[Vector<T, R>; C] {
        &self.cols
    }

    #[inline]
    pub fn column(&self, c: usize) -> &Vector<T, R> {
        &self.cols[c]
    }

    /// Pointer to element `[0][0]`; the `C · R` elements follow column by column.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.cols.as_ptr().cast()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.cols.as_mut_ptr().cast()
    }
}

impl<T: Element, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Builds a matrix from nested column arrays, `cols[c][r]`.
    #[inline]
    pub fn new(cols: [[T; R]; C]) -> Self {
        Self::from_fn(|c, r| cols[c][r])
    }

    /// Builds a matrix from `f(column, row)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            cols: core::array::from_fn(|c| Vector::from_fn(|r| f(c, r))),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            cols: [Vector::zero(); C],
        }
    }

    /// Row `r` as a vector of `C` elements.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, C> {
        Vector::from_fn(|c| self.cols[c][r])
    }

    #[inline]
    pub fn transpose(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|c, r| self.cols[r][c])
    }

    /// Multiplies every element by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self {
            cols: core::array::from_fn(|c| self.cols[c].scale(s)),
        }
    }

    /// `self · rhs`. 4×4 `f32` products run on the dispatched SIMD kernel.
    #[inline]
    pub fn multiply<const C2: usize>(&self, rhs: &Matrix<T, C2, C>) -> Matrix<T, C2, R> {
        T::mat_mul(self, rhs)
    }

    /// `self · v` for a column vector `v`.
    #[inline]
    pub fn multiply_vector(&self, v: &Vector<T, C>) -> Vector<T, R> {
        T::mat_mul_vec(self, v)
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|c, r| if c == r { T::one() } else { T::zero() })
    }
}

impl<T: Element> Matrix<T, 3, 3> {
    /// 2D translation in homogeneous coordinates.
    pub fn from_translation(x: T, y: T) -> Self {
        let mut m = Self::identity();
        m[2][0] = x;
        m[2][1] = y;
        m
    }

    /// 2D scale in homogeneous coordinates.
    pub fn from_scale(x: T, y: T) -> Self {
        let mut m = Self::identity();
        m[0][0] = x;
        m[1][1] = y;
        m
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Counter-clockwise 2D rotation in homogeneous coordinates.
    pub fn from_rotation(angle: T) -> Self {
        let (s, c) = (math::sin(angle), math::cos(angle));
        let mut m = Self::identity();
        m[0][0] = c;
        m[0][1] = s;
        m[1][0] = -s;
        m[1][1] = c;
        m
    }
}

impl<T: Element> Matrix<T, 4, 4> {
    /// Translation by `(x, y, z)`.
    pub fn from_translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m[3][0] = x;
        m[3][1] = y;
        m[3][2] = z;
        m
    }

    /// Axis-aligned scale, `diag(x, y, z, 1)`.
    pub fn from_scale(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m[0][0] = x;
        m[1][1] = y;
        m[2][2] = z;
        m
    }

    /// `a ⊗ b` in the upper 3×3 block: `m[i][j] = a[i] · b[j]`, zero elsewhere.
    pub fn outer_product(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Self {
        Self::from_fn(|c, r| {
            if c < 3 && r < 3 {
                a[c] * b[r]
            } else {
                T::zero()
            }
        })
    }

    /// Adds `(x, y, z)` expressed in this matrix's own frame to its translation.
    pub fn translate_in_place(&mut self, x: T, y: T, z: T) {
        let offset = Vector::new([x, y, z, T::zero()]);
        for r in 0..4 {
            let moved = self.row(r).dot(&offset);
            self.cols[3][r] = self.cols[3][r] + moved;
        }
    }

    /// Scales the first three columns by `x`, `y` and `z`.
    pub fn scale_aniso(&self, x: T, y: T, z: T) -> Self {
        let mut m = *self;
        m.cols[0] = m.cols[0].scale(x);
        m.cols[1] = m.cols[1].scale(y);
        m.cols[2] = m.cols[2].scale(z);
        m
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    pub fn from_rotation_x(angle: T) -> Self {
        Self::identity().rotate_x(angle)
    }

    pub fn from_rotation_y(angle: T) -> Self {
        Self::identity().rotate_y(angle)
    }

    pub fn from_rotation_z(angle: T) -> Self {
        Self::identity().rotate_z(angle)
    }

    /// `self · Rx(angle)`, right-handed.
    pub fn rotate_x(&self, angle: T) -> Self {
        let (s, c) = (math::sin(angle), math::cos(angle));
        let (o, l) = (T::zero(), T::one());
        *self * Self::new([[l, o, o, o], [o, c, s, o], [o, -s, c, o], [o, o, o, l]])
    }

    /// `self · Ry(angle)`, right-handed.
    pub fn rotate_y(&self, angle: T) -> Self {
        let (s, c) = (math::sin(angle), math::cos(angle));
        let (o, l) = (T::zero(), T::one());
        *self * Self::new([[c, o, -s, o], [o, l, o, o], [s, o, c, o], [o, o, o, l]])
    }

    /// `self · Rz(angle)`, right-handed.
    pub fn rotate_z(&self, angle: T) -> Self {
        let (s, c) = (math::sin(angle), math::cos(angle));
        let (o, l) = (T::zero(), T::one());
        *self * Self::new([[c, s, o, o], [-s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// `self · R`, where `R` rotates by `angle` around `axis` (Rodrigues).
    ///
    /// `axis` need not be unit length. An axis shorter than
    /// [`ROTATION_AXIS_EPSILON`] leaves the matrix unchanged.
    pub fn rotate(&self, axis: &Vector<T, 3>, angle: T) -> Self {
        let epsilon = <T as NumCast>::from(ROTATION_AXIS_EPSILON).unwrap_or_else(T::epsilon);
        if !(axis.length() > epsilon) {
            return *self;
        }

        let (s, c) = (math::sin(angle), math::cos(angle));
        let u = axis.normalize();
        let projection = Self::outer_product(&u, &u);

        let mut skew = Self::zero();
        skew[0][1] = u.z();
        skew[0][2] = -u.y();
        skew[1][0] = -u.z();
        skew[1][2] = u.x();
        skew[2][0] = u.y();
        skew[2][1] = -u.x();

        let mut rotation = projection + (Self::identity() - projection) * c + skew * s;
        rotation[3][3] = T::one();
        *self * rotation
    }

    /// Right-handed perspective projection to OpenGL clip space (`z ∈ [-1, 1]`).
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let focal = T::one() / math::tan(fov_y / two);
        let depth = far - near;

        let mut m = Self::zero();
        m[0][0] = focal / aspect;
        m[1][1] = focal;
        m[2][2] = -(far + near) / depth;
        m[2][3] = -T::one();
        m[3][2] = -(two * far * near) / depth;
        m
    }

    /// Right-handed orthographic projection to OpenGL clip space.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();

        let mut m = Self::zero();
        m[0][0] = two / (right - left);
        m[1][1] = two / (top - bottom);
        m[2][2] = -two / (far - near);
        m[3][0] = -(right + left) / (right - left);
        m[3][1] = -(top + bottom) / (top - bottom);
        m[3][2] = -(far + near) / (far - near);
        m[3][3] = T::one();
        m
    }
}

impl<T: Element, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, column: usize) -> &Vector<T, R> {
        &self.cols[column]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, column: usize) -> &mut Vector<T, R> {
        &mut self.cols[column]
    }
}

impl<T: Element, const C: usize, const R: usize> Add for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            cols: core::array::from_fn(|c| self.cols[c] + rhs.cols[c]),
        }
    }
}

impl<T: Element, const C: usize, const R: usize> Sub for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            cols: core::array::from_fn(|c| self.cols[c] - rhs.cols[c]),
        }
    }
}

impl<T: Element + Neg<Output = T>, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            cols: core::array::from_fn(|c| -self.cols[c]),
        }
    }
}

impl<T: Element, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        self.scale(s)
    }
}

impl<T: Element, const C: usize, const R: usize, const C2: usize> Mul<Matrix<T, C2, C>>
    for Matrix<T, C, R>
{
    type Output = Matrix<T, C2, R>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C2, C>) -> Matrix<T, C2, R> {
        self.multiply(&rhs)
    }
}

impl<T: Element, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        self.multiply_vector(&v)
    }
}

/// Row vector times matrix: `(v · M)[c] = dot(v, M[c])`.
impl<T: Element, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, m: Matrix<T, C, R>) -> Vector<T, C> {
        Vector::from_fn(|c| self.dot(&m.cols[c]))
    }
}

/// Scales by the reciprocal of `s`.
impl<T: Real, const C: usize, const R: usize> Div<T> for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        self.scale(T::one() / s)
    }
}

impl<T: Element, const C: usize, const R: usize> AddAssign for Matrix<T, C, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element, const C: usize, const R: usize> SubAssign for Matrix<T, C, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = self.scale(s);
    }
}

/// `self = self · rhs`.
impl<T: Element, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Real, const C: usize, const R: usize> DivAssign<T> for Matrix<T, C, R> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn mul(self, m: Matrix<$t, C, R>) -> Matrix<$t, C, R> {
                    m.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
