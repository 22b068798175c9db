//! # Seismic Loads (ASCE 7-16)
//!
//! Site coefficients, design spectral accelerations, approximate periods,
//! and the seismic response coefficient per ASCE 7-16 Chapters 11 and 12.
//!
//! The usual workflow mirrors the code:
//!
//! 1. mapped accelerations Ss, S1 for the site (from hazard maps, supplied
//!    by the caller);
//! 2. site coefficients Fa, Fv → SMS, SM1 → SDS, SD1;
//! 3. approximate period Ta and its upper limit Cu·Ta;
//! 4. seismic response coefficient Cs.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::asce7::{self, SiteClass, StructureType};
//!
//! let fa = asce7::site_coefficient_fa(SiteClass::D, 0.75).unwrap();
//! let sds = asce7::sds(fa * 0.75);
//! assert_eq!(fa, 1.2);
//! assert!((sds - 0.6).abs() < 1e-12);
//!
//! let ta = asce7::approximate_period(30.0, StructureType::SteelMomentFrame).unwrap();
//! assert!((ta - 0.028 * 30f64.powf(0.8)).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::numeric::interp1_clamped;

/// Site classification per ASCE 7-16 Chapter 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteClass {
    /// Hard rock
    A,
    /// Rock
    B,
    /// Very dense soil and soft rock
    C,
    /// Stiff soil
    D,
    /// Soft clay soil
    E,
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            SiteClass::A => 'A',
            SiteClass::B => 'B',
            SiteClass::C => 'C',
            SiteClass::D => 'D',
            SiteClass::E => 'E',
        };
        write!(f, "{}", c)
    }
}

// Table 11.4-1 columns
const SS_KNOTS: [f64; 6] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5];
// Table 11.4-2 columns
const S1_KNOTS: [f64; 6] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];

/// Short-period site coefficient Fa per ASCE 7-16 Table 11.4-1.
///
/// Values between columns are linearly interpolated; Ss beyond the table
/// range takes the edge column, as the table notes direct. Site class E
/// with Ss ≥ 1.0 requires a site-specific study and is an error.
pub fn site_coefficient_fa(site_class: SiteClass, ss: f64) -> DesignResult<f64> {
    if ss < 0.0 {
        return Err(DesignError::invalid_input(
            "ss",
            ss.to_string(),
            "Mapped acceleration must be non-negative",
        ));
    }

    let row: [f64; 6] = match site_class {
        SiteClass::A => [0.8; 6],
        SiteClass::B => [0.9; 6],
        SiteClass::C => [1.3, 1.3, 1.2, 1.2, 1.2, 1.2],
        SiteClass::D => [1.6, 1.4, 1.2, 1.1, 1.0, 1.0],
        SiteClass::E => {
            if ss >= 1.0 {
                return Err(DesignError::invalid_input(
                    "site_class",
                    "E",
                    "Site class E with Ss >= 1.0 requires a site-specific study",
                ));
            }
            [2.4, 1.7, 1.3, 1.1, 0.9, 0.8]
        }
    };

    interp1_clamped(&SS_KNOTS, &row, ss)
}

/// Long-period site coefficient Fv per ASCE 7-16 Table 11.4-2.
///
/// Site class E with S1 > 0.1 requires a site-specific study and is an
/// error.
pub fn site_coefficient_fv(site_class: SiteClass, s1: f64) -> DesignResult<f64> {
    if s1 < 0.0 {
        return Err(DesignError::invalid_input(
            "s1",
            s1.to_string(),
            "Mapped acceleration must be non-negative",
        ));
    }

    let row: [f64; 6] = match site_class {
        SiteClass::A => [0.8; 6],
        SiteClass::B => [0.8; 6],
        SiteClass::C => [1.5, 1.5, 1.5, 1.5, 1.5, 1.4],
        SiteClass::D => [2.4, 2.2, 2.0, 1.9, 1.8, 1.7],
        SiteClass::E => {
            if s1 > 0.1 {
                return Err(DesignError::invalid_input(
                    "site_class",
                    "E",
                    "Site class E with S1 > 0.1 requires a site-specific study",
                ));
            }
            [4.2; 6]
        }
    };

    interp1_clamped(&S1_KNOTS, &row, s1)
}

/// MCE spectral acceleration at short periods, SMS = Fa·Ss (Eq. 11.4-1).
pub fn sms(fa: f64, ss: f64) -> f64 {
    fa * ss
}

/// MCE spectral acceleration at 1 s, SM1 = Fv·S1 (Eq. 11.4-2).
pub fn sm1(fv: f64, s1: f64) -> f64 {
    fv * s1
}

/// Design spectral acceleration at short periods, SDS = ⅔·SMS (Eq. 11.4-3).
pub fn sds(sms: f64) -> f64 {
    2.0 / 3.0 * sms
}

/// Design spectral acceleration at 1 s, SD1 = ⅔·SM1 (Eq. 11.4-4).
pub fn sd1(sm1: f64) -> f64 {
    2.0 / 3.0 * sm1
}

/// Design response spectrum ordinate Sa(T) per ASCE 7-16 Section 11.4.6.
///
/// `tl` is the long-period transition period TL from the hazard maps.
pub fn design_spectral_acceleration(t: f64, sds: f64, sd1: f64, tl: f64) -> DesignResult<f64> {
    if t < 0.0 {
        return Err(DesignError::invalid_input(
            "t",
            t.to_string(),
            "Period must be non-negative",
        ));
    }
    if sds <= 0.0 || sd1 <= 0.0 || tl <= 0.0 {
        return Err(DesignError::invalid_input(
            "sds/sd1/tl",
            format!("{}/{}/{}", sds, sd1, tl),
            "Spectral parameters must be positive",
        ));
    }

    let ts = sd1 / sds;
    let t0 = 0.2 * ts;

    let sa = if t < t0 {
        sds * (0.4 + 0.6 * t / t0)
    } else if t <= ts {
        sds
    } else if t <= tl {
        sd1 / t
    } else {
        sd1 * tl / (t * t)
    };

    Ok(sa)
}

/// Structure type for the approximate period parameters of Table 12.8-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    /// Steel moment-resisting frame
    SteelMomentFrame,
    /// Concrete moment-resisting frame
    ConcreteMomentFrame,
    /// Steel eccentrically braced frame
    SteelEccentricallyBraced,
    /// Steel buckling-restrained braced frame
    SteelBucklingRestrainedBraced,
    /// All other structural systems
    Other,
}

impl StructureType {
    /// Approximate period parameters (Ct, x) per Table 12.8-2.
    ///
    /// Ct is in ft-based units; heights passed to [`approximate_period`]
    /// must be in feet.
    pub fn period_parameters(&self) -> (f64, f64) {
        match self {
            StructureType::SteelMomentFrame => (0.028, 0.8),
            StructureType::ConcreteMomentFrame => (0.016, 0.9),
            StructureType::SteelEccentricallyBraced => (0.03, 0.75),
            StructureType::SteelBucklingRestrainedBraced => (0.03, 0.75),
            StructureType::Other => (0.02, 0.75),
        }
    }
}

/// Approximate fundamental period Ta = Ct·hn^x (Eq. 12.8-7).
///
/// `hn_ft` is the structural height in feet.
pub fn approximate_period(hn_ft: f64, structure_type: StructureType) -> DesignResult<f64> {
    let (ct, x) = structure_type.period_parameters();
    approximate_period_coeffs(hn_ft, ct, x)
}

/// Approximate fundamental period from raw Ct and x parameters.
///
/// Used directly where a methodology prescribes its own coefficients.
pub fn approximate_period_coeffs(hn_ft: f64, ct: f64, x: f64) -> DesignResult<f64> {
    if hn_ft <= 0.0 {
        return Err(DesignError::invalid_input(
            "hn_ft",
            hn_ft.to_string(),
            "Structure height must be positive",
        ));
    }
    if ct <= 0.0 {
        return Err(DesignError::invalid_input(
            "ct",
            ct.to_string(),
            "Period parameter Ct must be positive",
        ));
    }
    Ok(ct * hn_ft.powf(x))
}

// Table 12.8-1 knots
const CU_SD1: [f64; 5] = [0.1, 0.15, 0.2, 0.3, 0.4];
const CU_VALUES: [f64; 5] = [1.7, 1.6, 1.5, 1.4, 1.4];

/// Coefficient for the upper limit on calculated period, Cu, per Table
/// 12.8-1. Linearly interpolated on SD1 and clamped at the table edges.
pub fn period_upper_limit_coeff(sd1: f64) -> DesignResult<f64> {
    if sd1 < 0.0 {
        return Err(DesignError::invalid_input(
            "sd1",
            sd1.to_string(),
            "SD1 must be non-negative",
        ));
    }
    interp1_clamped(&CU_SD1, &CU_VALUES, sd1)
}

/// Seismic response coefficient Cs per ASCE 7-16 Section 12.8.1.1.
///
/// - `r` — response modification factor
/// - `ie` — importance factor
/// - `t` — fundamental period (s)
/// - `tl` — long-period transition period (s)
/// - `sds`, `sd1`, `s1` — spectral parameters (g)
///
/// Applies the Eq. 12.8-3/12.8-4 upper limits and the Eq. 12.8-5/12.8-6
/// lower limits (including the 0.5·S1/(R/Ie) floor when S1 ≥ 0.6 g).
pub fn seismic_response_coeff(
    r: f64,
    ie: f64,
    t: f64,
    tl: f64,
    sds: f64,
    sd1: f64,
    s1: f64,
) -> DesignResult<f64> {
    if r <= 0.0 || ie <= 0.0 {
        return Err(DesignError::invalid_input(
            "r/ie",
            format!("{}/{}", r, ie),
            "R and Ie must be positive",
        ));
    }
    if t <= 0.0 || tl <= 0.0 {
        return Err(DesignError::invalid_input(
            "t/tl",
            format!("{}/{}", t, tl),
            "Periods must be positive",
        ));
    }

    let r_over_ie = r / ie;
    let mut cs = sds / r_over_ie;

    // Eq. 12.8-3 / 12.8-4 upper limit
    let cs_max = if t <= tl {
        sd1 / (t * r_over_ie)
    } else {
        sd1 * tl / (t * t * r_over_ie)
    };
    cs = cs.min(cs_max);

    // Eq. 12.8-5 lower limit
    let mut cs_min = (0.044 * sds * ie).max(0.01);

    // Eq. 12.8-6 applies for high-seismicity sites
    if s1 >= 0.6 {
        cs_min = cs_min.max(0.5 * s1 / r_over_ie);
    }

    Ok(cs.max(cs_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fa_tabulated() {
        assert_relative_eq!(site_coefficient_fa(SiteClass::A, 0.5).unwrap(), 0.8);
        assert_relative_eq!(site_coefficient_fa(SiteClass::D, 0.75).unwrap(), 1.2);
        assert_relative_eq!(site_coefficient_fa(SiteClass::C, 0.25).unwrap(), 1.3);
    }

    #[test]
    fn test_fa_interpolated() {
        // Midway between the 0.75 and 1.0 columns for site D
        let fa = site_coefficient_fa(SiteClass::D, 0.875).unwrap();
        assert_relative_eq!(fa, 1.15);
    }

    #[test]
    fn test_fa_clamped_beyond_table() {
        assert_relative_eq!(site_coefficient_fa(SiteClass::D, 2.0).unwrap(), 1.0);
        assert_relative_eq!(site_coefficient_fa(SiteClass::D, 0.1).unwrap(), 1.6);
    }

    #[test]
    fn test_fa_site_e_requires_study() {
        assert!(site_coefficient_fa(SiteClass::E, 1.0).is_err());
        assert!(site_coefficient_fa(SiteClass::E, 0.5).is_ok());
    }

    #[test]
    fn test_fv_tabulated() {
        assert_relative_eq!(site_coefficient_fv(SiteClass::D, 0.3).unwrap(), 2.0);
        assert_relative_eq!(site_coefficient_fv(SiteClass::C, 0.6).unwrap(), 1.4);
    }

    #[test]
    fn test_fv_interpolated() {
        let fv = site_coefficient_fv(SiteClass::D, 0.35).unwrap();
        assert_relative_eq!(fv, 1.95);
    }

    #[test]
    fn test_fv_site_e_requires_study() {
        assert!(site_coefficient_fv(SiteClass::E, 0.3).is_err());
        assert_relative_eq!(site_coefficient_fv(SiteClass::E, 0.1).unwrap(), 4.2);
    }

    #[test]
    fn test_design_parameters_chain() {
        // Site D, Ss = 1.5, S1 = 0.6
        let fa = site_coefficient_fa(SiteClass::D, 1.5).unwrap();
        let fv = site_coefficient_fv(SiteClass::D, 0.6).unwrap();
        let sds_v = sds(sms(fa, 1.5));
        let sd1_v = sd1(sm1(fv, 0.6));
        assert_relative_eq!(sds_v, 1.0);
        assert_relative_eq!(sd1_v, 0.68);
    }

    #[test]
    fn test_design_spectrum_regions() {
        let (sds_v, sd1_v, tl) = (1.0, 0.6, 8.0);
        // Ts = 0.6 s, T0 = 0.12 s
        assert_relative_eq!(
            design_spectral_acceleration(0.0, sds_v, sd1_v, tl).unwrap(),
            0.4
        );
        assert_relative_eq!(
            design_spectral_acceleration(0.3, sds_v, sd1_v, tl).unwrap(),
            1.0
        );
        assert_relative_eq!(
            design_spectral_acceleration(1.2, sds_v, sd1_v, tl).unwrap(),
            0.5
        );
        // Beyond TL: sd1 * TL / T^2
        assert_relative_eq!(
            design_spectral_acceleration(10.0, sds_v, sd1_v, tl).unwrap(),
            0.048
        );
    }

    #[test]
    fn test_approximate_period() {
        let ta = approximate_period(30.0, StructureType::SteelMomentFrame).unwrap();
        assert_relative_eq!(ta, 0.028 * 30f64.powf(0.8), epsilon = 1e-12);

        let ta = approximate_period(30.0, StructureType::Other).unwrap();
        assert_relative_eq!(ta, 0.02 * 30f64.powf(0.75), epsilon = 1e-12);
    }

    #[test]
    fn test_approximate_period_invalid() {
        assert!(approximate_period(0.0, StructureType::Other).is_err());
        assert!(approximate_period_coeffs(30.0, 0.0, 0.75).is_err());
    }

    #[test]
    fn test_period_upper_limit_coeff() {
        assert_relative_eq!(period_upper_limit_coeff(0.1).unwrap(), 1.7);
        assert_relative_eq!(period_upper_limit_coeff(0.175).unwrap(), 1.55);
        assert_relative_eq!(period_upper_limit_coeff(0.3).unwrap(), 1.4);
        // Clamped at the edges
        assert_relative_eq!(period_upper_limit_coeff(0.05).unwrap(), 1.7);
        assert_relative_eq!(period_upper_limit_coeff(0.6).unwrap(), 1.4);
    }

    #[test]
    fn test_cs_short_period_plateau() {
        // T below Ts: Eq. 12.8-2 governs
        let cs = seismic_response_coeff(8.0, 1.0, 0.5, 8.0, 1.0, 0.6, 0.4).unwrap();
        assert_relative_eq!(cs, 1.0 / 8.0);
    }

    #[test]
    fn test_cs_velocity_region_cap() {
        let cs = seismic_response_coeff(8.0, 1.0, 2.0, 8.0, 1.0, 0.6, 0.4).unwrap();
        assert_relative_eq!(cs, 0.6 / (2.0 * 8.0));
    }

    #[test]
    fn test_cs_floor() {
        // Long period, small sd1: the 0.044*SDS*Ie floor governs
        let cs = seismic_response_coeff(8.0, 1.0, 4.0, 8.0, 1.0, 0.2, 0.4).unwrap();
        assert_relative_eq!(cs, 0.044);
    }

    #[test]
    fn test_cs_high_s1_floor() {
        let cs = seismic_response_coeff(8.0, 1.0, 4.0, 8.0, 1.0, 0.2, 0.75).unwrap();
        // 0.5 * 0.75 / 8 = 0.0469 > 0.044
        assert_relative_eq!(cs, 0.5 * 0.75 / 8.0);
    }

    #[test]
    fn test_cs_long_period_transition() {
        // SDS kept low so the 0.044*SDS*Ie floor stays below the caps
        let inside = seismic_response_coeff(8.0, 1.0, 6.0, 8.0, 0.25, 1.0, 0.4).unwrap();
        let beyond = seismic_response_coeff(8.0, 1.0, 9.0, 8.0, 0.25, 1.0, 0.4).unwrap();
        assert_relative_eq!(inside, 1.0 / (6.0 * 8.0));
        assert_relative_eq!(beyond, 1.0 * 8.0 / (81.0 * 8.0));
    }

    #[test]
    fn test_cs_invalid_inputs() {
        assert!(seismic_response_coeff(0.0, 1.0, 1.0, 8.0, 1.0, 0.6, 0.4).is_err());
        assert!(seismic_response_coeff(8.0, 1.0, 0.0, 8.0, 1.0, 0.6, 0.4).is_err());
    }

    #[test]
    fn test_site_coefficients_reject_nan() {
        for class in [SiteClass::A, SiteClass::D, SiteClass::E] {
            assert!(site_coefficient_fa(class, f64::NAN).is_err());
            assert!(site_coefficient_fv(class, f64::NAN).is_err());
        }
        assert!(period_upper_limit_coeff(f64::NAN).is_err());
    }
}
