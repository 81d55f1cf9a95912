//! Fixed-length vectors.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::element::{Element, Real};
use crate::math;

/// `N` elements stored contiguously.
///
/// The length is part of the type, so mixing vectors of different lengths is
/// rejected at compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vec2Of<T> = Vector<T, 2>;
pub type Vec3Of<T> = Vector<T, 3>;
pub type Vec4Of<T> = Vector<T, 4>;

pub type Vec2 = Vector<f32, 2>;
pub type Vec3 = Vector<f32, 3>;
pub type Vec4 = Vector<f32, 4>;

pub type DVec2 = Vector<f64, 2>;
pub type DVec3 = Vector<f64, 3>;
pub type DVec4 = Vector<f64, 4>;

pub type IVec2 = Vector<i32, 2>;
pub type IVec3 = Vector<i32, 3>;
pub type IVec4 = Vector<i32, 4>;

pub type UVec2 = Vector<u32, 2>;
pub type UVec3 = Vector<u32, 3>;
pub type UVec4 = Vector<u32, 4>;

impl<T, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Builds a vector from `f(0), f(1), ..., f(N - 1)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Multiplies every element by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::from_fn(|i| self.data[i] * s)
    }

    /// Sum of elementwise products, accumulated in index order.
    ///
    /// `f32` vectors of length 4 run on the dispatched SIMD kernel.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        T::dot(self, rhs)
    }

    /// Elementwise minimum; when the elements compare unordered, `rhs` wins.
    #[inline]
    pub fn min(&self, rhs: &Self) -> Self {
        Self::from_fn(|i| {
            if self.data[i] < rhs.data[i] {
                self.data[i]
            } else {
                rhs.data[i]
            }
        })
    }

    /// Elementwise maximum; when the elements compare unordered, `rhs` wins.
    #[inline]
    pub fn max(&self, rhs: &Self) -> Self {
        Self::from_fn(|i| {
            if self.data[i] > rhs.data[i] {
                self.data[i]
            } else {
                rhs.data[i]
            }
        })
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean length, `sqrt(dot(v, v))`.
    #[inline]
    pub fn length(&self) -> T {
        math::sqrt(self.dot(self))
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector, or one whose inverse length overflows, yields the
    /// zero vector instead of infinities. So does a vector whose squared
    /// length overflows to infinity: the inverse length is then zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        let inverse = T::one() / length;
        if length == T::zero() || !inverse.is_finite() {
            return Self::zero();
        }
        self.scale(inverse)
    }
}

impl<T: Element> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Element> Vector<T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = rhs.data;
        Self::new([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }

    /// `self - 2·dot(self, normal)·normal`.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self {
        reflect(self, normal)
    }

    /// Appends `w`.
    #[inline]
    pub fn extend(&self, w: T) -> Vector<T, 4> {
        Vector::new([self.data[0], self.data[1], self.data[2], w])
    }
}

impl<T: Element> Vector<T, 4> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Cross product of the first three components; `w` of the result is 1.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        self.truncate().cross(&rhs.truncate()).extend(T::one())
    }

    /// `self - 2·dot(self, normal)·normal`, over all four components.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self {
        reflect(self, normal)
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(&self) -> Vector<T, 3> {
        Vector::new([self.data[0], self.data[1], self.data[2]])
    }
}

#[inline]
fn reflect<T: Element, const N: usize>(v: &Vector<T, N>, normal: &Vector<T, N>) -> Vector<T, N> {
    let two = T::one() + T::one();
    let projection = two * v.dot(normal);
    Vector::from_fn(|i| v.data[i] - projection * normal.data[i])
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Element, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.data[i] + rhs.data[i])
    }
}

impl<T: Element, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.data[i] - rhs.data[i])
    }
}

impl<T: Element + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|i| -self.data[i])
    }
}

impl<T: Element, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        self.scale(s)
    }
}

/// Scales by the reciprocal of `s`.
impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        self.scale(T::one() / s)
    }
}

impl<T: Element, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = self.scale(s);
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
