use crate::model::AreaUnit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dosage table: recommended application rates per crop and substance.
///
/// Crops and substances keep their declared order. The calculator relies on
/// it: the first matching substance wins, and the first entry is the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDosageTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub crops: Vec<CropDosages>,
}

/// All known substances for one crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDosages {
    /// Crop identifier (lowercase), e.g. "rice".
    pub crop: String,
    pub substances: Vec<SubstanceDosage>,
}

/// Application rate for a single (crop, substance) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceDosage {
    /// Canonical substance name (lowercase).
    pub substance: String,
    /// Concentrate in ml per acre.
    pub volume_per_acre: Decimal,
    /// Concentrate in ml per hectare.
    pub volume_per_hectare: Decimal,
    /// Water in litres per acre.
    pub water_per_acre: Decimal,
    /// Water in litres per hectare.
    pub water_per_hectare: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

impl SubstanceDosage {
    pub fn volume_per(&self, unit: AreaUnit) -> Decimal {
        match unit {
            AreaUnit::Acre => self.volume_per_acre,
            AreaUnit::Hectare => self.volume_per_hectare,
        }
    }

    pub fn water_per(&self, unit: AreaUnit) -> Decimal {
        match unit {
            AreaUnit::Acre => self.water_per_acre,
            AreaUnit::Hectare => self.water_per_hectare,
        }
    }
}

impl CropDosageTable {
    /// Substances for a crop by exact identifier. Unknown crops yield an empty slice.
    pub fn lookup(&self, crop: &str) -> &[SubstanceDosage] {
        self.crops
            .iter()
            .find(|c| c.crop == crop)
            .map(|c| c.substances.as_slice())
            .unwrap_or(&[])
    }

    /// Crop identifiers in declared order.
    pub fn crops(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|c| c.crop.as_str())
    }
}
