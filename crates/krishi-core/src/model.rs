use crate::error::KrishiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of field area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Acre,
    Hectare,
}

impl AreaUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "ha",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaUnit::Acre => write!(f, "acre"),
            AreaUnit::Hectare => write!(f, "hectare"),
        }
    }
}

impl FromStr for AreaUnit {
    type Err = KrishiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acre" | "acres" | "ac" => Ok(AreaUnit::Acre),
            "hectare" | "hectares" | "ha" => Ok(AreaUnit::Hectare),
            other => Err(KrishiError::validation(
                "unit",
                format!("unknown area unit '{other}' (expected 'acre' or 'hectare')"),
            )),
        }
    }
}

/// A dosage request as entered by the user.
///
/// `field_size` is kept as the raw text so that parsing problems are reported
/// by the calculator as validation errors on that field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageQuery {
    pub crop: String,
    pub substance: String,
    pub field_size: String,
    #[serde(default)]
    pub unit: AreaUnit,
}

impl DosageQuery {
    pub fn new(
        crop: impl Into<String>,
        substance: impl Into<String>,
        field_size: impl Into<String>,
        unit: AreaUnit,
    ) -> Self {
        Self {
            crop: crop.into(),
            substance: substance.into(),
            field_size: field_size.into(),
            unit,
        }
    }
}
