//! # Seismic Member Checks (AISC 341-16)
//!
//! Width-to-thickness (compactness) checks for members of seismic force
//! resisting systems.
//!
//! Seismic systems require members to sustain large inelastic rotations, so
//! AISC 341-16 Table D1.1 imposes stricter slenderness limits than the
//! compact limits of AISC 360. The limits scale with `sqrt(E / Ry·Fy)` and,
//! for beam and column webs, reduce with the axial load ratio Ca.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::presets;
//! use girder_core::seismic::{check_wtr_wide_flange, DuctilityLevel, MemberType};
//! use girder_core::shapes::default_db;
//!
//! let shape = default_db().lookup("W14X82").unwrap();
//! let check = check_wtr_wide_flange(
//!     shape,
//!     MemberType::Column,
//!     DuctilityLevel::High,
//!     0.1,
//!     &presets::a992(),
//! )
//! .unwrap();
//! assert!(check.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::SteelMaterial;
use crate::shapes::SteelShape;
use crate::units::UnitSystem;

/// Role of the member in the seismic force resisting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    /// Diagonal brace
    Brace,
    /// Flexural member
    Beam,
    /// Axial/flexural member
    Column,
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberType::Brace => write!(f, "Brace"),
            MemberType::Beam => write!(f, "Beam"),
            MemberType::Column => write!(f, "Column"),
        }
    }
}

/// Required ductility classification per AISC 341-16 D1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuctilityLevel {
    /// Moderately ductile members
    Moderate,
    /// Highly ductile members
    High,
}

impl std::fmt::Display for DuctilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuctilityLevel::Moderate => write!(f, "Moderately ductile"),
            DuctilityLevel::High => write!(f, "Highly ductile"),
        }
    }
}

/// Result of a width-to-thickness check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shape": "W14X82",
///   "h_tw": 22.4,
///   "h_tw_max": 53.0,
///   "bf_2tf": 5.92,
///   "bf_2tf_max": 7.35
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WtrCheck {
    /// AISC manual label of the checked shape
    pub shape: String,

    /// Web slenderness h/tw of the section
    pub h_tw: f64,

    /// Limiting web slenderness for the given ductility
    pub h_tw_max: f64,

    /// Flange slenderness bf/2tf of the section
    pub bf_2tf: f64,

    /// Limiting flange slenderness for the given ductility
    pub bf_2tf_max: f64,
}

impl WtrCheck {
    /// Check passes when both ratios are within their limits.
    pub fn passes(&self) -> bool {
        self.h_tw <= self.h_tw_max && self.bf_2tf <= self.bf_2tf_max
    }

    /// Ratio-of-ratios for the web, for reporting (h/tw over its limit).
    pub fn web_unity(&self) -> f64 {
        self.h_tw / self.h_tw_max
    }

    /// Ratio-of-ratios for the flange.
    pub fn flange_unity(&self) -> f64 {
        self.bf_2tf / self.bf_2tf_max
    }
}

/// Check the width-to-thickness ratios of a wide-flange seismic member.
///
/// `ca` is the axial load ratio Pu / (φc·Py); it adjusts the web limit for
/// beams and columns and has no effect on braces. Must be in `[0, 1)`.
///
/// The material must be in US units to match the section ratios from the
/// shapes database.
///
/// Reference: AISC 341-16, Table D1.1.
pub fn check_wtr_wide_flange(
    shape: &SteelShape,
    member_type: MemberType,
    level: DuctilityLevel,
    ca: f64,
    material: &SteelMaterial,
) -> DesignResult<WtrCheck> {
    if !(0.0..1.0).contains(&ca) {
        return Err(DesignError::invalid_input(
            "ca",
            ca.to_string(),
            "Axial load ratio Ca must be in [0, 1)",
        ));
    }
    if material.units != UnitSystem::Us {
        return Err(DesignError::invalid_input(
            "material",
            material.display_name(),
            "Width-to-thickness checks require US-unit material properties",
        ));
    }

    let h_tw = shape.require_h_tw()?;
    let bf_2tf = shape.require_bf_2tf()?;

    let common_root = (material.e / material.expected_fy()).sqrt();

    let (h_tw_max, bf_2tf_max) = match member_type {
        MemberType::Brace => {
            let limit = 1.57 * common_root;
            (limit, limit)
        }
        MemberType::Beam | MemberType::Column => match level {
            DuctilityLevel::Moderate => {
                let bt_max = 0.40 * common_root;
                let ht_max = if ca <= 0.114 {
                    3.96 * common_root * (1.0 - 3.04 * ca)
                } else {
                    (1.29 * common_root * (2.12 - ca)).max(1.57 * common_root)
                };
                (ht_max, bt_max)
            }
            DuctilityLevel::High => {
                let bt_max = 0.32 * common_root;
                let ht_max = if ca <= 0.114 {
                    2.57 * common_root * (1.0 - 1.04 * ca)
                } else {
                    (0.88 * common_root * (2.68 - ca)).max(1.57 * common_root)
                };
                (ht_max, bt_max)
            }
        },
    };

    Ok(WtrCheck {
        shape: shape.label.clone(),
        h_tw,
        h_tw_max,
        bf_2tf,
        bf_2tf_max,
    })
}
