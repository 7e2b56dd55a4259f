use crate::model::AreaUnit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recommended spray mix for one dosage query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageResult {
    /// Crop identifier the dosage was computed for.
    pub crop: String,
    /// Substance name as the user typed it.
    pub requested_substance: String,
    /// Canonical name of the table entry that was used.
    pub substance: String,
    pub field_size: Decimal,
    pub unit: AreaUnit,
    /// Concentrate in millilitres, rounded to the nearest integer.
    pub volume_ml: u64,
    /// Water in litres, rounded to the nearest integer.
    pub water_l: u64,
    /// True when no entry matched the requested substance and the crop's
    /// default entry was used instead.
    pub approximate_match: bool,
    /// Human-readable explanation of the computation.
    pub reason: String,
}

impl DosageResult {
    /// Notice to show alongside an approximate result.
    pub fn notice(&self) -> Option<String> {
        if !self.approximate_match {
            return None;
        }
        Some(format!(
            "exact dosage for '{}' not found, showing default ({})",
            self.requested_substance, self.substance
        ))
    }
}
