//! Fixed-size linear algebra for graphics and simulation.
//!
//! [`Vector`], [`Matrix`] (column-major) and [`Quaternion`] are generic over
//! their element type and carry their shape in the type, so mismatched
//! dimensions do not compile. The `f32` 4-element dot product and the 4×4
//! matrix products run on SSE2, AVX or NEON when the host supports them; the
//! choice is made at runtime and can be capped with [`simd::set_ceiling`].
//! Every accelerated kernel is bit-identical to the portable one.
//!
//! Trigonometry and square roots come from [`math`], which does not depend
//! on the platform `libm`.
//!
//! ```
//! use linmath::{Mat4, Vec4};
//!
//! let m = Mat4::from_translation(1.0, 2.0, 3.0);
//! let p = m * Vec4::new([1.0, 2.0, 3.0, 1.0]);
//! assert_eq!(p, Vec4::new([2.0, 4.0, 6.0, 1.0]));
//! ```

pub mod element;
pub mod error;
pub mod math;
pub mod matrix;
pub mod quat;
pub mod simd;
pub mod vector;

pub use element::{Element, Real};
pub use error::{LinmathError, Result};
pub use matrix::{
    DMat2, DMat3, DMat4, Mat2, Mat2Of, Mat2x3, Mat2x4, Mat3, Mat3Of, Mat3x2, Mat3x4, Mat4, Mat4Of,
    Mat4x2, Mat4x3, Matrix,
};
pub use quat::{DQuat, Quat, Quaternion};
pub use simd::CapabilityLevel;
pub use vector::{
    DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec2Of, Vec3, Vec3Of, Vec4,
    Vec4Of, Vector,
};
