//! Every dispatch path must produce bit-identical results.
//!
//! The ceiling is process-wide, so every test here takes `SERIAL` first.

use std::sync::Mutex;

use linmath::simd::dispatch::{ceiling_from_env, CEILING_ENV};
use linmath::simd::{self, CapabilityLevel, KernelPath};
use linmath::{LinmathError, Mat4, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> std::sync::MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

fn assert_bits_eq(a: &Mat4, b: &Mat4) {
    for c in 0..4 {
        for r in 0..4 {
            assert_eq!(
                a[c][r].to_bits(),
                b[c][r].to_bits(),
                "[{c}][{r}]: {} vs {}",
                a[c][r],
                b[c][r]
            );
        }
    }
}

/// Runs `f` with the ceiling forced to `level`.
fn with_ceiling<R>(level: CapabilityLevel, f: impl FnOnce() -> R) -> R {
    let _guard = simd::override_ceiling(level);
    f()
}

#[test]
fn test_scenario_rotation_product_scalar_vs_best() {
    let _serial = serial();
    let a = Mat4::from_rotation_x(0.7);
    let b = Mat4::from_rotation_y(1.3);

    let scalar = with_ceiling(CapabilityLevel::None, || a * b);
    let best = with_ceiling(simd::detected(), || a * b);
    assert_bits_eq(&scalar, &best);

    let u = Vec4::new([0.7, -1.3, 2.9, 0.25]);
    let v = Vec4::new([-4.1, 0.3, 1.7, 8.0]);
    let scalar = with_ceiling(CapabilityLevel::None, || u.dot(&v));
    let best = with_ceiling(simd::detected(), || u.dot(&v));
    assert_eq!(scalar.to_bits(), best.to_bits());
}

#[test]
fn test_every_level_is_bit_identical_random() {
    let _serial = serial();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..500 {
        let a = Mat4::from_fn(|_, _| rng.random_range(-1.0e3..1.0e3));
        let b = Mat4::from_fn(|_, _| rng.random_range(-1.0e3..1.0e3));
        let v = Vec4::from_fn(|_| rng.random_range(-1.0e3..1.0e3));

        let reference = with_ceiling(CapabilityLevel::None, || (a * b, a * v, a[0].dot(&v)));
        for level in CapabilityLevel::ALL {
            let (m, mv, d) = with_ceiling(level, || (a * b, a * v, a[0].dot(&v)));
            assert_bits_eq(&m, &reference.0);
            for i in 0..4 {
                assert_eq!(mv[i].to_bits(), reference.1[i].to_bits(), "{level}: row {i}");
            }
            assert_eq!(d.to_bits(), reference.2.to_bits(), "{level}");
        }
    }
}

#[test]
fn test_signed_zero_is_preserved_across_paths() {
    let _serial = serial();
    let a = Vec4::new([-0.0, 0.0, -0.0, 0.0]);
    let b = Vec4::new([1.0, -0.0, 1.0, -0.0]);

    let scalar = with_ceiling(CapabilityLevel::None, || a.dot(&b));
    let best = with_ceiling(simd::detected(), || a.dot(&b));
    assert_eq!(scalar.to_bits(), best.to_bits());
    assert!(scalar.is_sign_negative());
}

#[test]
fn test_kernel_path_follows_ceiling() {
    let _serial = serial();
    {
        let guard = simd::override_ceiling(CapabilityLevel::None);
        assert_eq!(guard.active(), CapabilityLevel::None);
        assert_eq!(simd::kernel_path(), KernelPath::Scalar);
    }

    let guard = simd::override_ceiling(simd::detected());
    let path = simd::kernel_path();
    match guard.active() {
        CapabilityLevel::None => assert_eq!(path, KernelPath::Scalar),
        CapabilityLevel::Neon => assert!(matches!(path, KernelPath::Neon | KernelPath::Scalar)),
        _ => assert!(matches!(path, KernelPath::Wide | KernelPath::Scalar)),
    }
}

#[test]
fn test_override_never_exceeds_hardware() {
    let _serial = serial();
    let detected = simd::detected();
    for level in CapabilityLevel::ALL {
        let active = simd::set_ceiling(level);
        assert!(
            active == CapabilityLevel::None || active <= detected,
            "{level} -> {active} on {detected}"
        );
    }
    simd::reset_ceiling();
}

#[test]
fn test_environment_override() {
    let _serial = serial();

    std::env::set_var(CEILING_ENV, "none");
    assert_eq!(ceiling_from_env(), Ok(Some(CapabilityLevel::None)));
    assert_eq!(simd::reset_ceiling(), CapabilityLevel::None);

    std::env::set_var(CEILING_ENV, "avx-512");
    assert!(matches!(
        ceiling_from_env(),
        Err(LinmathError::Configuration { .. })
    ));
    // malformed values are ignored
    assert_eq!(simd::reset_ceiling(), simd::detected());

    std::env::remove_var(CEILING_ENV);
    assert_eq!(ceiling_from_env(), Ok(None));
    assert_eq!(simd::reset_ceiling(), simd::detected());
}
