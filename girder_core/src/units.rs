//! # Unit Types
//!
//! Type-safe wrappers for the units this library actually uses. These are
//! lightweight f64 newtypes rather than a full units library:
//!
//! - US building codes work in a fixed unit set (kip, in, ksi, s)
//! - JSON serialization stays clean (just numbers)
//! - Zero runtime overhead
//!
//! The SI side exists for material property conversion only (ksi ⇄ MPa),
//! mirroring the stress conversion in the AISC material tables.
//!
//! The calculation modules themselves carry raw f64 fields with
//! unit-suffixed names (`fy`, `hn_ft`, `area_in2`); the newtype wrappers
//! are offered for callers that want typed quantities at their own API
//! boundaries, and convert to and from raw values via `value()`/`new()`.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::units::{Feet, Inches, Ksi, Mpa};
//!
//! let height = Feet(30.0);
//! let height_in: Inches = height.into();
//! assert_eq!(height_in.0, 360.0);
//!
//! let fy = Ksi(50.0);
//! let fy_si: Mpa = fy.into();
//! assert!((fy_si.0 - 344.74).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Exact ksi-to-MPa conversion factor (1 kip/in² in MPa).
pub const KSI_TO_MPA: f64 = 6.89475908677537;

/// System of units for material properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Customary US units (kip, in, ksi, s)
    #[default]
    Us,
    /// International System (N, mm, MPa, s)
    Si,
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Us => write!(f, "US"),
            UnitSystem::Si => write!(f, "SI"),
        }
    }
}

/// Convert a raw stress value between unit systems (ksi ⇄ MPa).
///
/// Identity when `from == to`.
pub fn convert_stress(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Us, UnitSystem::Si) => value * KSI_TO_MPA,
        (UnitSystem::Si, UnitSystem::Us) => value / KSI_TO_MPA,
        _ => value,
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Force and Stress Units
// ============================================================================

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

/// Stress in megapascals (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl From<Ksi> for Mpa {
    fn from(ksi: Ksi) -> Self {
        Mpa(ksi.0 * KSI_TO_MPA)
    }
}

impl From<Mpa> for Ksi {
    fn from(mpa: Mpa) -> Self {
        Ksi(mpa.0 / KSI_TO_MPA)
    }
}

// ============================================================================
// Time Units
// ============================================================================

/// Time in seconds (structural periods)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Kips);
impl_arithmetic!(Ksi);
impl_arithmetic!(Mpa);
impl_arithmetic!(Seconds);
