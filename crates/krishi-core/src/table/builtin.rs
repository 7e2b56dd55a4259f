use crate::error::KrishiError;
use crate::table::schema::CropDosageTable;
use std::sync::LazyLock;

const REFERENCE_DOSAGE_JSON: &str = include_str!("../../../../tables/reference-dosage.json");

static REFERENCE_TABLE: LazyLock<Result<CropDosageTable, String>> = LazyLock::new(|| {
    super::parse_table_str(REFERENCE_DOSAGE_JSON).map_err(|e| e.to_string())
});

/// The built-in reference dosage table, parsed and validated on first use.
pub fn reference_table() -> Result<&'static CropDosageTable, KrishiError> {
    REFERENCE_TABLE
        .as_ref()
        .map_err(|reason| KrishiError::TableInvalid(reason.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::consistency_warnings;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_table_loads() {
        let table = reference_table().unwrap();
        assert!(table.crops().any(|c| c == "rice"));
        assert!(table.crops().any(|c| c == "wheat"));
    }

    #[test]
    fn test_wheat_starts_with_cypermethrin() {
        let table = reference_table().unwrap();
        let first = &table.lookup("wheat")[0];
        assert_eq!(first.substance, "cypermethrin");
        assert_eq!(first.volume_per_acre, dec!(150));
        assert_eq!(first.water_per_acre, dec!(150));
    }

    #[test]
    fn test_reference_hectare_rates_are_consistent() {
        let table = reference_table().unwrap();
        assert!(consistency_warnings(table).is_empty());
    }
}
