pub mod builtin;
pub mod schema;

use crate::error::KrishiError;
use rust_decimal::Decimal;
use schema::CropDosageTable;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Hectare-to-acre factor used by the reference table (1 ha ~ 2.47 acres, rounded).
pub fn hectare_factor() -> Decimal {
    Decimal::new(25, 1)
}

/// Load a dosage table from a JSON file.
pub fn load_table(path: &Path) -> Result<CropDosageTable, KrishiError> {
    let content = std::fs::read_to_string(path).map_err(|e| KrishiError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table = parse_table(&content, path)?;
    debug!(path = %path.display(), crops = table.crops.len(), "loaded dosage table");
    Ok(table)
}

/// Parse a dosage table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<CropDosageTable, KrishiError> {
    let table: CropDosageTable =
        serde_json::from_str(json).map_err(|e| KrishiError::TableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a dosage table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<CropDosageTable, KrishiError> {
    let table: CropDosageTable = serde_json::from_str(json).map_err(KrishiError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a dosage table is well-formed.
pub fn validate_table(table: &CropDosageTable) -> Result<(), KrishiError> {
    if table.crops.is_empty() {
        return Err(KrishiError::TableInvalid("crops must not be empty".into()));
    }

    let mut seen_crops = HashSet::new();
    for crop in &table.crops {
        if crop.crop.trim().is_empty() {
            return Err(KrishiError::TableInvalid(
                "crop name must not be empty".into(),
            ));
        }
        if crop.crop != crop.crop.trim().to_lowercase() {
            return Err(KrishiError::TableInvalid(format!(
                "crop identifier '{}' must be lowercase without surrounding spaces",
                crop.crop
            )));
        }
        if !seen_crops.insert(crop.crop.clone()) {
            return Err(KrishiError::TableInvalid(format!(
                "crop '{}' is listed more than once",
                crop.crop
            )));
        }

        // The first entry is the fallback dosage, so every crop needs one
        if crop.substances.is_empty() {
            return Err(KrishiError::TableInvalid(format!(
                "crop '{}' has no substances",
                crop.crop
            )));
        }

        let mut seen_substances = HashSet::new();
        for dosage in &crop.substances {
            if dosage.substance.trim().is_empty() {
                return Err(KrishiError::TableInvalid(format!(
                    "crop '{}' has a substance with an empty name",
                    crop.crop
                )));
            }
            if !seen_substances.insert(dosage.substance.to_lowercase()) {
                return Err(KrishiError::TableInvalid(format!(
                    "substance '{}' is listed more than once for crop '{}'",
                    dosage.substance, crop.crop
                )));
            }

            let rates = [
                ("volume_per_acre", dosage.volume_per_acre),
                ("volume_per_hectare", dosage.volume_per_hectare),
                ("water_per_acre", dosage.water_per_acre),
                ("water_per_hectare", dosage.water_per_hectare),
            ];
            for (field, value) in rates {
                if value <= Decimal::ZERO {
                    return Err(KrishiError::TableInvalid(format!(
                        "substance '{}' for crop '{}' has non-positive {} ({})",
                        dosage.substance, crop.crop, field, value
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Report entries whose per-hectare rates are not 2.5x the per-acre rates.
///
/// Values are only reported, never corrected.
pub fn consistency_warnings(table: &CropDosageTable) -> Vec<String> {
    let mut warnings = Vec::new();
    for crop in &table.crops {
        for dosage in &crop.substances {
            let pairs = [
                ("volume", dosage.volume_per_acre, dosage.volume_per_hectare),
                ("water", dosage.water_per_acre, dosage.water_per_hectare),
            ];
            for (kind, per_acre, per_hectare) in pairs {
                let expected = per_acre * hectare_factor();
                if per_hectare != expected {
                    warnings.push(format!(
                        "{}/{}: {} per hectare is {} (2.5 x {} per acre would be {})",
                        crop.crop, dosage.substance, kind, per_hectare, per_acre, expected
                    ));
                }
            }
        }
    }
    warnings
}
