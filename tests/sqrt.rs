//! Precision tests for the portable square root against `f32::sqrt`.

use linmath::math::sqrt;

#[test]
fn test_sqrt_precision_comparison() {
    let test_cases = [
        // Small positive values
        vec![0.01f32, 0.1, 0.25],
        // Perfect squares
        vec![1.0f32, 4.0, 9.0, 16.0, 25.0, 36.0],
        // Larger values
        vec![100.0f32, 256.0, 1024.0, 10000.0],
        // Very small positive values
        vec![1e-8f32, 1e-6, 1e-4, 1e-2],
        // Large values
        vec![50000.0f32, 100000.0, 1000000.0, 3.0e38],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        for &input in test_case {
            let expected = input.sqrt();
            let actual = sqrt(input);
            let relative_error = (actual - expected).abs() / expected;

            println!("  Input: {input:e}, std: {expected:.8e}, portable: {actual:.8e}, rel: {relative_error:.2e}");
            assert!(
                relative_error < 1e-6,
                "sqrt({input}): std={expected}, portable={actual}, rel_error={relative_error:.2e}"
            );
        }
    }
}

#[test]
fn test_sqrt_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..1000 {
        let input: f32 = rng.random_range(1e-3..1e6);
        let expected = input.sqrt();
        let relative_error = (sqrt(input) - expected).abs() / expected;
        assert!(relative_error < 1e-6, "sqrt({input}): rel_error={relative_error:.2e}");
    }

    for _ in 0..1000 {
        let input: f64 = rng.random_range(1e-3..1e9);
        let expected = input.sqrt();
        let relative_error = (sqrt(input) - expected).abs() / expected;
        assert!(relative_error < 1e-14, "sqrt({input}): rel_error={relative_error:.2e}");
    }
}

#[test]
fn test_sqrt_special_values() {
    assert_eq!(sqrt(0.0f32), 0.0);
    assert_eq!(sqrt(-0.0f32), 0.0);
    assert_eq!(sqrt(-1.0f32), 0.0);
    assert_eq!(sqrt(f32::NAN), 0.0);
    assert_eq!(sqrt(f32::NEG_INFINITY), 0.0);
    assert_eq!(sqrt(f32::INFINITY), f32::INFINITY);
    assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
}

#[test]
fn test_sqrt_subnormal_inputs() {
    for input in [f32::from_bits(1), f32::from_bits(0x0000_1234), f32::MIN_POSITIVE / 3.0] {
        let expected = input.sqrt();
        let relative_error = (sqrt(input) - expected).abs() / expected;
        assert!(relative_error < 1e-6, "sqrt({input:e}): rel_error={relative_error:.2e}");
    }
}
