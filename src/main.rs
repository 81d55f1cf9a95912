use linmath::simd::{self, CapabilityLevel};
use linmath::{Mat4, Quat, Vec3, Vec4};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_matrix(name: &str, m: &Mat4) {
    println!("{name} (column-major, printed row by row):");
    for r in 0..4 {
        let row = m.row(r);
        println!(
            "  [{:>9.5}, {:>9.5}, {:>9.5}, {:>9.5}]",
            row[0], row[1], row[2], row[3]
        );
    }
}

fn bits_match(a: &Mat4, b: &Mat4) -> bool {
    (0..4).all(|c| (0..4).all(|r| a[c][r].to_bits() == b[c][r].to_bits()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let detected = simd::detected();
    let ceiling = simd::ceiling();
    info!(%detected, %ceiling, path = ?simd::kernel_path(), "SIMD dispatch");
    println!("detected capability: {detected}");
    println!("active ceiling:      {ceiling}");
    println!("kernel path:         {:?}", simd::kernel_path());

    // --- Vectors ---
    let a = Vec3::new([1.0, 2.0, 3.0]);
    let b = Vec3::new([4.0, 5.0, 6.0]);
    println!("\n--- Vectors ---");
    println!("a = {:?}, b = {:?}", a.as_array(), b.as_array());
    println!("dot(a, b)   = {}", a.dot(&b));
    println!("a + b       = {:?}", (a + b).as_array());
    println!("cross(a, b) = {:?}", a.cross(&b).as_array());
    println!("|a|         = {:.6}", a.length());

    // --- Matrices ---
    println!("\n--- Matrices ---");
    let moved = Mat4::from_translation(1.0, 2.0, 3.0) * Vec4::new([1.0, 2.0, 3.0, 1.0]);
    println!("translate(1, 2, 3) * (1, 2, 3, 1) = {:?}", moved.as_array());

    let rx = Mat4::from_rotation_x(0.7);
    let ry = Mat4::from_rotation_y(1.3);
    let product = rx * ry;
    print_matrix("rotate_x(0.7) * rotate_y(1.3)", &product);

    let projection = Mat4::perspective(linmath::math::radians(60.0), 16.0 / 9.0, 0.1, 100.0);
    print_matrix("perspective(60 deg, 16:9, 0.1, 100)", &projection);

    // --- Quaternions ---
    println!("\n--- Quaternions ---");
    let q = Quat::from_axis_angle(linmath::math::PI_HALF, &Vec3::new([0.0, 0.0, 1.0]));
    let turned = q * Vec3::new([1.0, 0.0, 0.0]);
    println!("quarter turn about z applied to x = {:?}", turned.as_array());
    let p = q * q.conjugate();
    println!("q * conjugate(q) = v {:?}, w {}", p.v.as_array(), p.w);

    // --- Dispatch ---
    println!("\n--- Scalar vs accelerated ---");
    let scalar = {
        let _guard = simd::override_ceiling(CapabilityLevel::None);
        (rx * ry, Vec4::new([0.3, -1.7, 2.2, 0.9]).dot(&Vec4::new([1.1, 0.4, -0.6, 2.5])))
    };
    let fast = (
        rx * ry,
        Vec4::new([0.3, -1.7, 2.2, 0.9]).dot(&Vec4::new([1.1, 0.4, -0.6, 2.5])),
    );
    println!("mat4 product bit-identical: {}", bits_match(&scalar.0, &fast.0));
    println!(
        "dot4 bit-identical:         {}",
        scalar.1.to_bits() == fast.1.to_bits()
    );
}
