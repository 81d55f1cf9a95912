//! Vector algebra behaviour.

use approx::assert_abs_diff_eq;
use linmath::{DVec3, IVec3, Vec2, Vec3, Vec4, Vector};

#[test]
fn test_scenario_dot_add_cross() {
    let a = Vec3::new([1.0, 2.0, 3.0]);
    let b = Vec3::new([4.0, 5.0, 6.0]);

    assert_eq!(a.dot(&b), 32.0);
    assert_eq!(a + b, Vec3::new([5.0, 7.0, 9.0]));
    assert_eq!(a.cross(&b), Vec3::new([-3.0, 6.0, -3.0]));
}

#[test]
fn test_integer_vectors_are_exact() {
    let a = IVec3::new([1, -2, 3]);
    let b = IVec3::new([7, 11, -13]);
    assert_eq!((a + b) - b, a);
    assert_eq!(a.dot(&b), 7 - 22 - 39);
    assert_eq!(a.cross(&b), IVec3::new([-2 * -13 - 3 * 11, 3 * 7 - 1 * -13, 11 - -2 * 7]));
    assert_eq!(3 * a, a * 3);
}

#[test]
fn test_cross_is_orthogonal_and_right_handed() {
    let x = Vec3::new([1.0, 0.0, 0.0]);
    let y = Vec3::new([0.0, 1.0, 0.0]);
    assert_eq!(x.cross(&y), Vec3::new([0.0, 0.0, 1.0]));
    assert_eq!(y.cross(&x), Vec3::new([0.0, 0.0, -1.0]));

    let a = DVec3::new([0.3, -1.2, 2.5]);
    let b = DVec3::new([4.1, 0.7, -0.9]);
    let c = a.cross(&b);
    assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-12);
}

#[test]
fn test_normalize() {
    let v = Vec4::new([1.0, 2.0, 2.0, 4.0]);
    let n = v.normalize();
    assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(n.w(), 0.8, epsilon = 1e-6);

    assert_eq!(Vec3::zero().normalize(), Vec3::zero());
}

#[test]
fn test_normalize_overflowing_length_is_zero() {
    // dot(v, v) overflows to infinity, so the inverse length is zero
    let v = Vec3::new([1.0e20, 0.0, 0.0]);
    assert_eq!(v.normalize(), Vec3::zero());
}

#[test]
fn test_reflect_preserves_length() {
    let v = Vec3::new([3.0, -4.0, 1.0]);
    let n = Vec3::new([1.0, 1.0, 0.0]).normalize();
    let r = v.reflect(&n);
    assert_abs_diff_eq!(r.length(), v.length(), epsilon = 1e-5);
    // the tangential part is unchanged, the normal part flips
    assert_abs_diff_eq!(r.dot(&n), -v.dot(&n), epsilon = 1e-5);
}

#[test]
fn test_min_max_and_splat() {
    let a = Vec2::new([1.0, -3.0]);
    let b = Vec2::splat(0.0);
    assert_eq!(a.min(&b), Vec2::new([0.0, -3.0]));
    assert_eq!(a.max(&b), Vec2::new([1.0, 0.0]));
}

#[test]
fn test_generic_lengths() {
    let a = Vector::<f64, 7>::from_fn(|i| i as f64);
    let b = Vector::<f64, 7>::splat(1.0);
    assert_eq!(a.dot(&b), 21.0);
    assert_eq!((a + b).as_slice()[6], 7.0);
    assert_eq!(a.iter().count(), 7);
}

#[test]
fn test_indexing_and_mutation() {
    let mut v = Vec4::zero();
    v[2] = 5.0;
    v += Vec4::splat(1.0);
    v *= 2.0;
    assert_eq!(v.as_array(), &[2.0, 2.0, 12.0, 2.0]);
    assert_eq!(-v, v * -1.0);
}
