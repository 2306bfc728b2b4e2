//! Birth info packaging for patient records and views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{calculate_age, parse_birth_date};

/// Unit appended to the age in labels.
pub const DEFAULT_AGE_UNIT: &str = "años";

/// Birth date, age and age label derived from a carnet.
///
/// Serializes with the field names the patient API exposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthInfo {
    /// Decoded birth date, ISO `YYYY-MM-DD` on the wire
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: Option<NaiveDate>,
    /// Age in completed years
    #[serde(rename = "edad")]
    pub age: Option<u32>,
    /// Age with its unit, e.g. "39 años"
    #[serde(rename = "edad_texto")]
    pub age_label: Option<String>,
}

impl BirthInfo {
    /// Whether nothing could be derived.
    pub fn is_unknown(&self) -> bool {
        self.birth_date.is_none()
    }
}

/// Deriver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeriverConfig {
    /// Unit appended to the age label
    pub age_unit: String,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            age_unit: DEFAULT_AGE_UNIT.to_string(),
        }
    }
}

impl DeriverConfig {
    /// Load settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Turns carnet numbers into [`BirthInfo`].
#[derive(Debug, Clone, Default)]
pub struct BirthInfoDeriver {
    config: DeriverConfig,
}

impl BirthInfoDeriver {
    /// Create a deriver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deriver with the given settings.
    pub fn with_config(config: DeriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// Derive birth date, age and label as of `today`.
    ///
    /// Never fails: a missing or unreadable carnet gives an all-`None` result.
    pub fn derive(&self, raw: Option<&str>, today: NaiveDate) -> BirthInfo {
        let birth_date = parse_birth_date(raw, today);
        let age = calculate_age(birth_date, today);

        BirthInfo {
            birth_date,
            age,
            age_label: age.map(|a| self.age_label(a)),
        }
    }

    /// Format an age with the configured unit.
    pub fn age_label(&self, age: u32) -> String {
        format!("{} {}", age, self.config.age_unit)
    }
}

/// Derive birth info with the default deriver.
pub fn derive_birth_info(raw: Option<&str>, today: NaiveDate) -> BirthInfo {
    BirthInfoDeriver::new().derive(raw, today)
}

/// Same as [`derive_birth_info`] with today's local date.
pub fn derive_birth_info_today(raw: Option<&str>) -> BirthInfo {
    derive_birth_info(raw, super::local_today())
}
