//! # girder_core - Steel Design and Seismic Load Calculations
//!
//! `girder_core` is a library of structural engineering design utilities:
//! steel material and section data with expected-strength factors per
//! AISC 341-16, seismic width-to-thickness checks, ASCE 7-16 seismic load
//! parameters, FEMA P695 collapse assessment helpers, and supporting
//! numeric, text, and data-file tools.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Standards-Traced**: Every coefficient cites its table or equation
//!
//! ## Quick Start
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
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&check).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Steel materials with AISC 341-16 expected strengths
//! - [`shapes`] - AISC shapes database with lookup and selection
//! - [`seismic`] - Width-to-thickness checks per AISC 341-16 Table D1.1
//! - [`asce7`] - ASCE 7-16 seismic design parameters
//! - [`fema_p695`] - FEMA P695 collapse assessment helpers
//! - [`matfile`] - MATLAB Level 5 MAT-file reader
//! - [`text`] - Plaintext boxes and LaTeX section names
//! - [`numeric`] - Interpolation and the probit function
//! - [`units`] - Unit systems and type-safe wrappers
//! - [`errors`] - Structured error types

pub mod asce7;
pub mod errors;
pub mod fema_p695;
pub mod materials;
pub mod matfile;
pub mod numeric;
pub mod seismic;
pub mod shapes;
pub mod text;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{DesignError, DesignResult};
pub use materials::SteelMaterial;
pub use seismic::{check_wtr_wide_flange, DuctilityLevel, MemberType, WtrCheck};
pub use shapes::{default_db, ShapeDb, SteelShape};
