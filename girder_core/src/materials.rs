//! # Steel Materials
//!
//! Structural steel material definitions and the expected-strength factors
//! used in seismic design.
//!
//! Reference design values come from AISC 341-16 Table A3.1, which tabulates
//! the expected yield stress factor Ry and expected tensile strength factor
//! Rt per ASTM designation and product form:
//!
//! ```text
//! eFy = Ry × Fy      expected yield stress
//! eFu = Rt × Fu      expected tensile strength
//! ```
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::SteelMaterial;
//!
//! let a992 = SteelMaterial::from_name("A992").unwrap();
//! assert_eq!(a992.fy, 50.0);
//! assert_eq!(a992.expected_fy(), 55.000000000000007);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::units::{convert_stress, UnitSystem};

/// Default elastic modulus in US units (ksi), per AISC 360-16.
pub const E_US_KSI: f64 = 29000.0;

/// Default elastic modulus in SI units (MPa).
pub const E_SI_MPA: f64 = 200000.0;

/// Product form a material specification applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Application {
    /// Hot-rolled structural shapes (W, C, L, ...)
    HotRolled,
    /// Hollow structural sections
    Hss,
    /// Steel pipe
    Pipe,
    /// Plates and bars
    Plate,
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Application::HotRolled => write!(f, "Hot-rolled"),
            Application::Hss => write!(f, "HSS"),
            Application::Pipe => write!(f, "Pipe"),
            Application::Plate => write!(f, "Plate"),
        }
    }
}

impl Application {
    fn matches(&self, s: &str) -> bool {
        let s = s.to_uppercase();
        match self {
            Application::HotRolled => s == "HOT-ROLLED" || s == "HOT ROLLED" || s == "SHAPE",
            Application::Hss => s == "HSS",
            Application::Pipe => s == "PIPE",
            Application::Plate => s == "PLATE",
        }
    }
}

/// A structural steel material.
///
/// Strengths are stored in the system given by `units`; `fy` and `fu` share
/// that system. Ry and Rt are dimensionless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// ASTM designation (e.g., "A992")
    pub designation: String,

    /// Grade within the designation, if the spec has grades (e.g., "C")
    pub grade: Option<String>,

    /// Product form this entry applies to
    pub application: Application,

    /// Elastic modulus (ksi or MPa per `units`)
    pub e: f64,

    /// Specified minimum yield stress (ksi or MPa per `units`)
    pub fy: f64,

    /// Specified minimum tensile strength (ksi or MPa per `units`)
    pub fu: f64,

    /// Expected yield stress factor Ry
    pub ry: f64,

    /// Expected tensile strength factor Rt
    pub rt: f64,

    /// Unit system the stress values are expressed in
    pub units: UnitSystem,
}

impl SteelMaterial {
    /// Create a material, validating the strength values.
    ///
    /// `e` of `None` selects the default modulus for the unit system
    /// (29000 ksi US, 200000 MPa SI).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        designation: impl Into<String>,
        grade: Option<String>,
        application: Application,
        fy: f64,
        fu: f64,
        ry: f64,
        rt: f64,
        e: Option<f64>,
        units: UnitSystem,
    ) -> DesignResult<Self> {
        if fy <= 0.0 {
            return Err(DesignError::invalid_input(
                "fy",
                fy.to_string(),
                "Yield stress must be positive",
            ));
        }
        if fy > fu {
            return Err(DesignError::invalid_input(
                "fy",
                fy.to_string(),
                "Yield stress must not exceed tensile strength",
            ));
        }
        if ry < 1.0 || rt < 1.0 {
            return Err(DesignError::invalid_input(
                "ry/rt",
                format!("{}/{}", ry, rt),
                "Expected strength factors must be at least 1.0",
            ));
        }

        let e = e.unwrap_or(match units {
            UnitSystem::Us => E_US_KSI,
            UnitSystem::Si => E_SI_MPA,
        });

        Ok(SteelMaterial {
            designation: designation.into(),
            grade,
            application,
            e,
            fy,
            fu,
            ry,
            rt,
            units,
        })
    }

    /// Look up a material by ASTM designation alone.
    ///
    /// Fails with `AmbiguousMaterial` if the designation has multiple grades
    /// (e.g., "A500" needs a grade).
    pub fn from_name(designation: &str) -> DesignResult<Self> {
        Self::from_spec(designation, None, None)
    }

    /// Look up a material, narrowing by grade and/or application.
    ///
    /// A partial specification resolves as long as exactly one table entry
    /// matches:
    ///
    /// ```rust
    /// use girder_core::materials::SteelMaterial;
    ///
    /// let m = SteelMaterial::from_spec("A500", Some("C"), Some("HSS")).unwrap();
    /// assert_eq!(m.fu, 62.0);
    ///
    /// // Grade alone is sufficient here
    /// let m = SteelMaterial::from_spec("A500", Some("C"), None).unwrap();
    /// assert_eq!(m.fu, 62.0);
    /// ```
    pub fn from_spec(
        designation: &str,
        grade: Option<&str>,
        application: Option<&str>,
    ) -> DesignResult<Self> {
        let want = designation.to_uppercase();
        let matches: Vec<&SteelMaterial> = MATERIAL_TABLE
            .iter()
            .filter(|m| m.designation.to_uppercase() == want)
            .filter(|m| match grade {
                Some(g) => m
                    .grade
                    .as_deref()
                    .is_some_and(|mg| mg.eq_ignore_ascii_case(g)),
                None => true,
            })
            .filter(|m| match application {
                Some(a) => m.application.matches(a),
                None => true,
            })
            .collect();

        match matches.len() {
            0 => Err(DesignError::material_not_found(display_spec(
                designation,
                grade,
                application,
            ))),
            1 => Ok(matches[0].clone()),
            n => Err(DesignError::AmbiguousMaterial {
                material_name: display_spec(designation, grade, application),
                count: n,
            }),
        }
    }

    /// Expected yield stress, eFy = Ry × Fy.
    pub fn expected_fy(&self) -> f64 {
        self.fy * self.ry
    }

    /// Expected tensile strength, eFu = Rt × Fu.
    pub fn expected_fu(&self) -> f64 {
        self.fu * self.rt
    }

    /// Return a copy of this material with stresses in the given system.
    pub fn in_units(&self, units: UnitSystem) -> Self {
        if units == self.units {
            return self.clone();
        }
        SteelMaterial {
            designation: self.designation.clone(),
            grade: self.grade.clone(),
            application: self.application,
            e: convert_stress(self.e, self.units, units),
            fy: convert_stress(self.fy, self.units, units),
            fu: convert_stress(self.fu, self.units, units),
            ry: self.ry,
            rt: self.rt,
            units,
        }
    }

    /// Display name including grade, e.g. "A500 Gr. C".
    pub fn display_name(&self) -> String {
        match &self.grade {
            Some(g) => format!("{} Gr. {}", self.designation, g),
            None => self.designation.clone(),
        }
    }
}

impl std::fmt::Display for SteelMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Fy={} Fu={} {})",
            self.display_name(),
            self.fy,
            self.fu,
            match self.units {
                UnitSystem::Us => "ksi",
                UnitSystem::Si => "MPa",
            }
        )
    }
}

fn display_spec(designation: &str, grade: Option<&str>, application: Option<&str>) -> String {
    let mut s = designation.to_string();
    if let Some(g) = grade {
        s.push_str(" Gr. ");
        s.push_str(g);
    }
    if let Some(a) = application {
        s.push_str(" (");
        s.push_str(a);
        s.push(')');
    }
    s
}

fn table_entry(
    designation: &str,
    grade: Option<&str>,
    application: Application,
    fy: f64,
    fu: f64,
    ry: f64,
    rt: f64,
) -> SteelMaterial {
    SteelMaterial {
        designation: designation.to_string(),
        grade: grade.map(|g| g.to_string()),
        application,
        e: E_US_KSI,
        fy,
        fu,
        ry,
        rt,
        units: UnitSystem::Us,
    }
}

/// Built-in material table per AISC 341-16 Table A3.1 (US units).
static MATERIAL_TABLE: Lazy<Vec<SteelMaterial>> = Lazy::new(|| {
    vec![
        table_entry("A36", None, Application::HotRolled, 36.0, 58.0, 1.5, 1.2),
        table_entry(
            "A572",
            Some("50"),
            Application::HotRolled,
            50.0,
            65.0,
            1.1,
            1.1,
        ),
        table_entry("A992", None, Application::HotRolled, 50.0, 65.0, 1.1, 1.1),
        table_entry("A500", Some("B"), Application::Hss, 46.0, 58.0, 1.4, 1.3),
        table_entry("A500", Some("C"), Application::Hss, 50.0, 62.0, 1.3, 1.2),
        table_entry("A1085", None, Application::Hss, 50.0, 65.0, 1.25, 1.15),
        table_entry("A53", Some("B"), Application::Pipe, 35.0, 60.0, 1.6, 1.2),
    ]
});

/// Common materials by name, for call sites that want a default without a
/// fallible lookup.
pub mod presets {
    use super::*;

    /// ASTM A992 (wide-flange shapes), Fy = 50 ksi.
    pub fn a992() -> SteelMaterial {
        SteelMaterial::from_name("A992").expect("A992 is in the built-in table")
    }

    /// ASTM A500 Gr. C (HSS), Fy = 50 ksi.
    pub fn a500_gr_c() -> SteelMaterial {
        SteelMaterial::from_spec("A500", Some("C"), None).expect("A500 Gr. C is in the table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_material_lookup_exact_match() {
        // Material is specified exactly.
        let material = SteelMaterial::from_spec("A500", Some("C"), Some("HSS")).unwrap();
        assert_relative_eq!(material.e, 29000.0);
        assert_relative_eq!(material.fy, 50.0);
        assert_relative_eq!(material.fu, 62.0);
        assert_relative_eq!(material.ry, 1.3);
        assert_relative_eq!(material.rt, 1.2);
    }

    #[test]
    fn test_material_lookup_slice_match_grade_only() {
        // Partially specified, but sufficient to match.
        let material = SteelMaterial::from_spec("A500", Some("C"), None).unwrap();
        assert_relative_eq!(material.fy, 50.0);
        assert_relative_eq!(material.fu, 62.0);
        assert_relative_eq!(material.ry, 1.3);
        assert_relative_eq!(material.rt, 1.2);
    }

    #[test]
    fn test_material_lookup_designation_only() {
        let material = SteelMaterial::from_name("A992").unwrap();
        assert_relative_eq!(material.e, 29000.0);
        assert_relative_eq!(material.fy, 50.0);
        assert_relative_eq!(material.fu, 65.0);
        assert_relative_eq!(material.ry, 1.1);
        assert_relative_eq!(material.rt, 1.1);
    }

    #[test]
    fn test_material_lookup_ambiguous() {
        let result = SteelMaterial::from_name("A500");
        assert!(matches!(
            result,
            Err(DesignError::AmbiguousMaterial { count: 2, .. })
        ));
    }

    #[test]
    fn test_material_lookup_not_found() {
        let result = SteelMaterial::from_name("A999");
        assert_eq!(result.unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_expected_strengths() {
        let a36 = SteelMaterial::from_name("A36").unwrap();
        assert_relative_eq!(a36.expected_fy(), 54.0);
        assert_relative_eq!(a36.expected_fu(), 69.6);
    }

    #[test]
    fn test_new_rejects_fy_above_fu() {
        let result = SteelMaterial::new(
            "X",
            None,
            Application::Plate,
            70.0,
            65.0,
            1.1,
            1.1,
            None,
            UnitSystem::Us,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_si_conversion() {
        let a992 = SteelMaterial::from_name("A992").unwrap();
        let si = a992.in_units(UnitSystem::Si);
        assert_relative_eq!(si.fy, 344.737954, epsilon = 1e-5);
        assert_relative_eq!(si.e, 199947.0, epsilon = 1.0);
        // Dimensionless factors unchanged
        assert_relative_eq!(si.ry, 1.1);

        let back = si.in_units(UnitSystem::Us);
        assert_relative_eq!(back.fy, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_display_name() {
        let a500c = presets::a500_gr_c();
        assert_eq!(a500c.display_name(), "A500 Gr. C");
        assert_eq!(presets::a992().display_name(), "A992");
    }

    #[test]
    fn test_serialization() {
        let m = presets::a992();
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: SteelMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
