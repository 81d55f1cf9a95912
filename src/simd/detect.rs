//! Runtime detection of the host's vector capability.
//!
//! On x86 the processor is asked directly through `CPUID`, and AVX is only
//! reported when the operating system has enabled the extended register state
//! (`OSXSAVE` plus the SSE and AVX bits of `XCR0`). AArch64 always has NEON.
//! Every other target, and builds with `linmath_force_scalar`, report
//! [`CapabilityLevel::None`].

use std::sync::OnceLock;

use tracing::debug;

use super::level::CapabilityLevel;

static DETECTED: OnceLock<CapabilityLevel> = OnceLock::new();

/// Highest level the processor and operating system support, measured once
/// per process.
pub fn detected() -> CapabilityLevel {
    *DETECTED.get_or_init(|| {
        let level = measure();
        debug!(
            %level,
            arch = std::env::consts::ARCH,
            "measured SIMD capability"
        );
        level
    })
}

/// Queries the hardware without caching.
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    not(linmath_force_scalar)
))]
pub fn measure() -> CapabilityLevel {
    x86::measure()
}

/// Queries the hardware without caching.
#[cfg(all(target_arch = "aarch64", not(linmath_force_scalar)))]
pub fn measure() -> CapabilityLevel {
    CapabilityLevel::Neon
}

/// Queries the hardware without caching.
#[cfg(any(
    linmath_force_scalar,
    not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))
))]
pub fn measure() -> CapabilityLevel {
    CapabilityLevel::None
}

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    not(linmath_force_scalar)
))]
mod x86 {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::{CpuidResult, __cpuid_count, _xgetbv};
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::{CpuidResult, __cpuid_count, _xgetbv};

    use crate::simd::level::CapabilityLevel;

    const LEAF_VENDOR: u32 = 0;
    const LEAF_FEATURES: u32 = 1;
    const LEAF_EXTENDED_FEATURES: u32 = 7;

    const EDX_SSE2: u32 = 1 << 26;
    const ECX_OSXSAVE: u32 = 1 << 27;
    const ECX_AVX: u32 = 1 << 28;
    const EBX_AVX2: u32 = 1 << 5;

    // XMM and YMM state enabled by the OS
    const XCR0_SSE_AVX: u64 = 0b110;

    #[allow(unused_unsafe)]
    fn cpuid(leaf: u32, subleaf: u32) -> CpuidResult {
        // SAFETY: CPUID exists on every processor able to run this code.
        unsafe { __cpuid_count(leaf, subleaf) }
    }

    #[target_feature(enable = "xsave")]
    unsafe fn xcr0() -> u64 {
        _xgetbv(0)
    }

    pub(super) fn measure() -> CapabilityLevel {
        let max_leaf = cpuid(LEAF_VENDOR, 0).eax;
        if max_leaf < LEAF_FEATURES {
            return CapabilityLevel::None;
        }

        let features = cpuid(LEAF_FEATURES, 0);
        let sse2 = features.edx & EDX_SSE2 != 0;
        let avx = features.ecx & ECX_AVX != 0;
        let osxsave = features.ecx & ECX_OSXSAVE != 0;

        if avx && osxsave {
            // SAFETY: OSXSAVE reports that XGETBV is available and enabled.
            let ymm_enabled = unsafe { xcr0() } & XCR0_SSE_AVX == XCR0_SSE_AVX;
            if ymm_enabled {
                let avx2 = max_leaf >= LEAF_EXTENDED_FEATURES
                    && cpuid(LEAF_EXTENDED_FEATURES, 0).ebx & EBX_AVX2 != 0;
                return if avx2 {
                    CapabilityLevel::Avx2
                } else {
                    CapabilityLevel::Avx
                };
            }
        }

        if sse2 {
            CapabilityLevel::Sse2
        } else {
            CapabilityLevel::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_is_stable() {
        assert_eq!(detected(), detected());
        assert_eq!(detected(), measure());
    }

    #[cfg(all(target_arch = "x86_64", not(linmath_force_scalar)))]
    #[test]
    fn test_x86_64_has_at_least_sse2() {
        assert!(detected() >= CapabilityLevel::Sse2);
    }

    #[cfg(all(target_arch = "x86_64", not(linmath_force_scalar)))]
    #[test]
    fn test_agrees_with_std_feature_detection() {
        let expected = if is_x86_feature_detected!("avx2") {
            CapabilityLevel::Avx2
        } else if is_x86_feature_detected!("avx") {
            CapabilityLevel::Avx
        } else {
            CapabilityLevel::Sse2
        };
        assert_eq!(measure(), expected);
    }

    #[cfg(all(target_arch = "aarch64", not(linmath_force_scalar)))]
    #[test]
    fn test_aarch64_reports_neon() {
        assert_eq!(detected(), CapabilityLevel::Neon);
    }

    #[cfg(linmath_force_scalar)]
    #[test]
    fn test_forced_scalar_reports_none() {
        assert_eq!(detected(), CapabilityLevel::None);
    }
}
