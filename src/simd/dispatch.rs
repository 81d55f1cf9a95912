//! Process-wide dispatch ceiling.
//!
//! The ceiling caps which accelerated kernels may run. It starts at the
//! detected level, optionally lowered through `LINMATH_SIMD_CEILING`, and can
//! be changed at runtime with [`set_ceiling`] or scoped with
//! [`override_ceiling`]. Requests above what the host supports are clamped to
//! the detected level, so an accelerated kernel never runs on a processor
//! that lacks it.

use std::env::{self, VarError};
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{debug, warn};

use super::detect::detected;
use super::level::CapabilityLevel;
use crate::error::{configuration_error, Result};

/// Environment variable read once, when the ceiling is first needed.
pub const CEILING_ENV: &str = "LINMATH_SIMD_CEILING";

const UNSET: u8 = u8::MAX;

static CEILING: AtomicU8 = AtomicU8::new(UNSET);

/// Kernel family a dispatched 4-wide operation will run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPath {
    /// Portable reference kernels.
    Scalar,
    /// SSE2 kernels, plus the AVX matrix product when the ceiling allows it.
    Wide,
    Neon,
}

/// Current ceiling.
pub fn ceiling() -> CapabilityLevel {
    match CapabilityLevel::from_bits(CEILING.load(Ordering::Acquire)) {
        Some(level) => level,
        None => initialize(),
    }
}

fn initialize() -> CapabilityLevel {
    let host = detected();
    let level = match ceiling_from_env() {
        Ok(Some(requested)) => clamp(requested, host),
        Ok(None) => host,
        Err(error) => {
            warn!(%error, "ignoring SIMD ceiling override");
            host
        }
    };

    match CEILING.compare_exchange(UNSET, level.to_bits(), Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            debug!(ceiling = %level, detected = %host, "initialised SIMD ceiling");
            level
        }
        // another thread got there first
        Err(current) => CapabilityLevel::from_bits(current).unwrap_or(level),
    }
}

/// Reads the ceiling override from the environment.
///
/// Returns `Ok(None)` when the variable is absent or blank.
pub fn ceiling_from_env() -> Result<Option<CapabilityLevel>> {
    match env::var(CEILING_ENV) {
        Ok(value) => parse_ceiling(&value),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(configuration_error(
            CEILING_ENV,
            raw.to_string_lossy(),
            "value is not valid unicode",
        )),
    }
}

// blank means no override
fn parse_ceiling(value: &str) -> Result<Option<CapabilityLevel>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<CapabilityLevel>()
        .map(Some)
        .map_err(|error| configuration_error(CEILING_ENV, value, error.to_string()))
}

/// Caps `requested` at what `host` can actually execute.
///
/// A request at or below the host level is kept. A request above it in the
/// same family becomes the host level. A request from another instruction
/// family cannot run at all and falls back to `None`.
pub fn clamp(requested: CapabilityLevel, host: CapabilityLevel) -> CapabilityLevel {
    match requested.partial_cmp(&host) {
        Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal) => requested,
        Some(std::cmp::Ordering::Greater) => host,
        None => CapabilityLevel::None,
    }
}

/// Sets the ceiling and returns the level that actually took effect.
pub fn set_ceiling(level: CapabilityLevel) -> CapabilityLevel {
    let effective = clamp(level, detected());
    CEILING.store(effective.to_bits(), Ordering::Release);

    if effective == level {
        debug!(ceiling = %effective, "SIMD ceiling set");
    } else {
        debug!(
            requested = %level,
            ceiling = %effective,
            "SIMD ceiling clamped to host capability"
        );
    }
    effective
}

/// Forgets any override and re-derives the ceiling from detection and the
/// environment.
pub fn reset_ceiling() -> CapabilityLevel {
    CEILING.store(UNSET, Ordering::Release);
    ceiling()
}

/// Sets the ceiling until the returned guard is dropped.
pub fn override_ceiling(level: CapabilityLevel) -> CeilingGuard {
    let previous = ceiling();
    let active = set_ceiling(level);
    CeilingGuard { previous, active }
}

/// Restores the previous ceiling on drop.
#[must_use = "the previous ceiling is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CeilingGuard {
    previous: CapabilityLevel,
    active: CapabilityLevel,
}

impl CeilingGuard {
    /// Level in force while the guard lives.
    pub fn active(&self) -> CapabilityLevel {
        self.active
    }

    pub fn previous(&self) -> CapabilityLevel {
        self.previous
    }
}

impl Drop for CeilingGuard {
    fn drop(&mut self) {
        CEILING.store(self.previous.to_bits(), Ordering::Release);
        debug!(ceiling = %self.previous, "SIMD ceiling restored");
    }
}

/// Kernel family the 4-wide operations currently dispatch to.
pub fn kernel_path() -> KernelPath {
    path_for(ceiling())
}

/// Kernel family the 4-wide operations dispatch to under `level`.
pub fn path_for(level: CapabilityLevel) -> KernelPath {
    #[cfg(linmath_x86_simd)]
    {
        if level >= CapabilityLevel::Sse2 {
            return KernelPath::Wide;
        }
    }
    #[cfg(linmath_neon)]
    {
        if level >= CapabilityLevel::Neon {
            return KernelPath::Neon;
        }
    }
    let _ = level;
    KernelPath::Scalar
}
