use std::env;

// Kernel families this crate can compile, keyed by the cfg flag they enable
#[derive(Debug)]
struct KernelFamily {
    cfg_flag: &'static str,
    arches: &'static [&'static str],
    // target features that must be statically enabled for the family's scalar
    // float code to match its vector lanes
    required_features: &'static [&'static str],
}

impl KernelFamily {
    fn families() -> Vec<KernelFamily> {
        vec![
            KernelFamily {
                cfg_flag: "linmath_x86_simd",
                arches: &["x86", "x86_64"],
                required_features: &["sse2"],
            },
            KernelFamily {
                cfg_flag: "linmath_neon",
                arches: &["aarch64"],
                required_features: &["neon"],
            },
        ]
    }

    fn supported(&self, target: &TargetInfo) -> bool {
        self.arches.contains(&target.arch.as_str())
            && self
                .required_features
                .iter()
                .all(|feature| target.features.iter().any(|f| f == feature))
    }
}

struct TargetInfo {
    arch: String,
    features: Vec<String>,
}

impl TargetInfo {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_string)
            .collect();

        TargetInfo { arch, features }
    }
}

// Compiles out every accelerated path; only the portable scalar kernels remain
const FORCE_SCALAR_ENV: &str = "LINMATH_FORCE_SCALAR";
const FORCE_SCALAR_CFG: &str = "linmath_force_scalar";

fn force_scalar() -> bool {
    match env::var(FORCE_SCALAR_ENV) {
        Ok(value) => !matches!(value.trim(), "" | "0" | "false" | "off"),
        Err(_) => false,
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={FORCE_SCALAR_ENV}");

    // Disable flag warnings for build
    println!("cargo::rustc-check-cfg=cfg({FORCE_SCALAR_CFG})");
    for family in KernelFamily::families() {
        println!("cargo::rustc-check-cfg=cfg({})", family.cfg_flag);
    }

    if force_scalar() {
        println!("cargo:rustc-cfg={FORCE_SCALAR_CFG}");
        return;
    }

    let target = TargetInfo::from_env();
    for family in KernelFamily::families() {
        if family.supported(&target) {
            println!("cargo:rustc-cfg={}", family.cfg_flag);
        }
    }
}
