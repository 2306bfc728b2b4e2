//! Consultorio Core Library
//!
//! Patient-record logic shared by the clinic backend and its clients.
//!
//! # Architecture
//!
//! ```text
//! carnet_identidad ("85010112345")
//!         │
//!         ▼
//!   clean digits ──► decode YYMMDDC ──► century rule (0-5 → 19xx, 6-9 → 20xx)
//!                                               │
//!                                     future date? ──yes──► retry as 19xx
//!                                               │
//!                                               ▼
//!                             BirthInfo { fecha_nacimiento, edad, edad_texto }
//!                                               │
//!                                               ▼
//!                                 PatientView (API / list / form preview)
//! ```
//!
//! # Core Principle
//!
//! **Derivation never fails.** A missing or malformed carnet yields unknown birth
//! date and age; it never rejects the patient record that carries it.
//!
//! # Modules
//!
//! - [`carnet`]: Carnet parsing, century rule and age calculation
//! - [`models`]: Patient record and view types

pub mod carnet;
pub mod models;

// Re-export commonly used types
pub use carnet::{
    age_from_carnet, calculate_age, derive_birth_info, format_birth_date, parse_birth_date,
    try_parse_birth_date, BirthInfo, BirthInfoDeriver, CarnetError, Century, DeriverConfig,
    ParsedIdentityFields,
};
pub use models::{Patient, PatientView};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ConsultorioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<chrono::ParseError> for ConsultorioError {
    fn from(e: chrono::ParseError) -> Self {
        ConsultorioError::InvalidInput(format!("Reference date: {}", e))
    }
}

impl From<serde_json::Error> for ConsultorioError {
    fn from(e: serde_json::Error) -> Self {
        ConsultorioError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Derive birth date and age from a carnet using the device clock.
#[uniffi::export]
pub fn derive_birth_info_now(carnet: Option<String>) -> FfiBirthInfo {
    carnet::derive_birth_info_today(carnet.as_deref()).into()
}

/// Derive birth date and age from a carnet as of an ISO `YYYY-MM-DD` date.
#[uniffi::export]
pub fn derive_birth_info_at(
    carnet: Option<String>,
    today: String,
) -> Result<FfiBirthInfo, ConsultorioError> {
    let today = NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d")?;
    Ok(derive_birth_info(carnet.as_deref(), today).into())
}

/// Derive birth info with a JSON deriver configuration (e.g. `{"age_unit": "years"}`).
#[uniffi::export]
pub fn derive_birth_info_with_config(
    carnet: Option<String>,
    config_json: String,
) -> Result<FfiBirthInfo, ConsultorioError> {
    let config = DeriverConfig::from_json(&config_json)?;
    let deriver = BirthInfoDeriver::with_config(config);
    Ok(deriver.derive(carnet.as_deref(), carnet::local_today()).into())
}

/// Format an ISO birth date for display as `DD/MM/YYYY`.
#[uniffi::export]
pub fn format_birth_date_iso(birth_date: String) -> Result<String, ConsultorioError> {
    let date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")?;
    Ok(format_birth_date(date))
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe birth info.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiBirthInfo {
    /// ISO `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub age: Option<u32>,
    pub age_label: Option<String>,
}

impl From<BirthInfo> for FfiBirthInfo {
    fn from(info: BirthInfo) -> Self {
        Self {
            birth_date: info.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            age: info.age,
            age_label: info.age_label,
        }
    }
}
