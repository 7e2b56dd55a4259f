pub mod advisory;
pub mod dosage;
pub mod error;
pub mod model;
pub mod table;

use dosage::DosageResult;
use error::KrishiError;
use model::DosageQuery;
use table::schema::CropDosageTable;

/// Main API entry point: compute a dosage against the built-in reference table.
pub fn calculate_dosage(query: &DosageQuery) -> Result<DosageResult, KrishiError> {
    let table = table::builtin::reference_table()?;
    dosage::calculate(query, table)
}

/// Compute a dosage against a custom table, or the reference table when `None`.
pub fn calculate_dosage_with(
    query: &DosageQuery,
    table: Option<&CropDosageTable>,
) -> Result<DosageResult, KrishiError> {
    match table {
        Some(table) => dosage::calculate(query, table),
        None => calculate_dosage(query),
    }
}
