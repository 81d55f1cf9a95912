//! Capability levels and their partial order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{unknown_level, LinmathError};

/// Vector instruction tier a kernel may use.
///
/// Levels only compare within their own instruction family. `None` sits
/// below every level; the x86 tiers are totally ordered
/// (`Sse2 < Avx < Avx2`); `Neon` has no order relative to any x86 tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CapabilityLevel {
    None = 0,
    Sse2 = 1,
    Avx = 2,
    Avx2 = 3,
    Neon = 4,
}

/// Instruction family a [`CapabilityLevel`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Plain scalar code, available everywhere.
    Portable,
    X86,
    Arm,
}

impl CapabilityLevel {
    pub const ALL: [CapabilityLevel; 5] = [
        CapabilityLevel::None,
        CapabilityLevel::Sse2,
        CapabilityLevel::Avx,
        CapabilityLevel::Avx2,
        CapabilityLevel::Neon,
    ];

    pub const fn family(self) -> Family {
        match self {
            CapabilityLevel::None => Family::Portable,
            CapabilityLevel::Sse2 | CapabilityLevel::Avx | CapabilityLevel::Avx2 => Family::X86,
            CapabilityLevel::Neon => Family::Arm,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            CapabilityLevel::None => "none",
            CapabilityLevel::Sse2 => "sse2",
            CapabilityLevel::Avx => "avx",
            CapabilityLevel::Avx2 => "avx2",
            CapabilityLevel::Neon => "neon",
        }
    }

    // position inside the family; `None` is rank 0 of every family
    const fn rank(self) -> u8 {
        match self {
            CapabilityLevel::None => 0,
            CapabilityLevel::Sse2 => 1,
            CapabilityLevel::Avx => 2,
            CapabilityLevel::Avx2 => 3,
            CapabilityLevel::Neon => 1,
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(CapabilityLevel::None),
            1 => Some(CapabilityLevel::Sse2),
            2 => Some(CapabilityLevel::Avx),
            3 => Some(CapabilityLevel::Avx2),
            4 => Some(CapabilityLevel::Neon),
            _ => None,
        }
    }
}

impl PartialOrd for CapabilityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let comparable = self.family() == other.family()
            || self.family() == Family::Portable
            || other.family() == Family::Portable;

        if comparable {
            Some(self.rank().cmp(&other.rank()))
        } else {
            None
        }
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapabilityLevel {
    type Err = LinmathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("scalar") {
            return Ok(CapabilityLevel::None);
        }

        CapabilityLevel::ALL
            .into_iter()
            .find(|level| wanted.eq_ignore_ascii_case(level.name()))
            .ok_or_else(|| unknown_level(s))
    }
}
