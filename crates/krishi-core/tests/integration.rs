//! Integration tests for calculate_dosage() against the built-in reference
//! table and against custom tables loaded from JSON.

use krishi_core::calculate_dosage;
use krishi_core::calculate_dosage_with;
use krishi_core::error::KrishiError;
use krishi_core::model::{AreaUnit, DosageQuery};
use krishi_core::table::builtin::reference_table;
use krishi_core::table::{load_table, parse_table_str};
use std::io::Write;

fn query(crop: &str, substance: &str, size: &str, unit: AreaUnit) -> DosageQuery {
    DosageQuery::new(crop, substance, size, unit)
}

// ---------------------------------------------------------------------------
// Test 1: Rice, cypermethrin, 2 acres
// ---------------------------------------------------------------------------
#[test]
fn rice_cypermethrin_two_acres() {
    let result = calculate_dosage(&query("rice", "cypermethrin", "2", AreaUnit::Acre)).unwrap();
    assert_eq!(result.substance, "cypermethrin");
    assert_eq!(result.volume_ml, 400);
    assert_eq!(result.water_l, 400);
    assert!(!result.approximate_match);
}

// ---------------------------------------------------------------------------
// Test 2: Unknown substance on wheat falls back to the first wheat entry
// ---------------------------------------------------------------------------
#[test]
fn wheat_unknown_substance_falls_back() {
    let result = calculate_dosage(&query("wheat", "xyz-unknown", "1", AreaUnit::Acre)).unwrap();
    assert_eq!(result.substance, "cypermethrin");
    assert_eq!(result.volume_ml, 150);
    assert_eq!(result.water_l, 150);
    assert!(result.approximate_match);
    assert!(result.notice().is_some());
}

// ---------------------------------------------------------------------------
// Test 3: Crop not in table
// ---------------------------------------------------------------------------
#[test]
fn banana_is_unknown_crop() {
    for substance in ["cypermethrin", "anything", "mancozeb"] {
        let err = calculate_dosage(&query("banana", substance, "1", AreaUnit::Acre)).unwrap_err();
        assert!(matches!(err, KrishiError::UnknownCrop { .. }));
        assert!(err.is_user_error());
        assert!(err.to_string().contains("Krushi Seva Kendra"));
    }
}

// ---------------------------------------------------------------------------
// Test 4: Negative field size
// ---------------------------------------------------------------------------
#[test]
fn negative_field_size_is_validation_error() {
    let err = calculate_dosage(&query("rice", "cypermethrin", "-3", AreaUnit::Acre)).unwrap_err();
    match err {
        KrishiError::Validation { field, .. } => assert_eq!(field, "field_size"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test 5: Every exact entry in the reference table computes round(rate * size)
// ---------------------------------------------------------------------------
#[test]
fn exact_entries_are_not_approximate() {
    let table = reference_table().unwrap();
    for crop in &table.crops {
        for dosage in &crop.substances {
            for unit in [AreaUnit::Acre, AreaUnit::Hectare] {
                let result =
                    calculate_dosage(&query(&crop.crop, &dosage.substance, "3", unit)).unwrap();
                assert!(
                    !result.approximate_match,
                    "{}/{} should match exactly",
                    crop.crop,
                    dosage.substance
                );
                assert_eq!(result.substance, dosage.substance);
                let expected = (dosage.volume_per(unit) * rust_decimal::Decimal::from(3))
                    .round()
                    .to_string();
                assert_eq!(result.volume_ml.to_string(), expected);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Test 6: Containment in either direction
// ---------------------------------------------------------------------------
#[test]
fn partial_and_extended_names_match() {
    let short = calculate_dosage(&query("rice", "cyper", "1", AreaUnit::Acre)).unwrap();
    assert_eq!(short.substance, "cypermethrin");
    assert!(!short.approximate_match);

    let long = calculate_dosage(&query("rice", "cypermethrin pro", "1", AreaUnit::Acre)).unwrap();
    assert_eq!(long.substance, "cypermethrin");
    assert!(!long.approximate_match);
    assert_eq!(long.requested_substance, "cypermethrin pro");
}

// ---------------------------------------------------------------------------
// Test 7: Hectare volumes are 2.5x acre volumes for the same magnitude
// ---------------------------------------------------------------------------
#[test]
fn hectare_to_acre_ratio() {
    let acre = calculate_dosage(&query("wheat", "mancozeb", "4", AreaUnit::Acre)).unwrap();
    let hectare = calculate_dosage(&query("wheat", "mancozeb", "4", AreaUnit::Hectare)).unwrap();
    let ratio = hectare.volume_ml as f64 / acre.volume_ml as f64;
    assert!((ratio - 2.5).abs() < 0.01, "ratio was {ratio}");
}

// ---------------------------------------------------------------------------
// Test 8: Non-numeric and zero field sizes
// ---------------------------------------------------------------------------
#[test]
fn non_numeric_field_sizes_rejected() {
    for size in ["", "two", "0", "0.0", "1/2"] {
        let err = calculate_dosage(&query("rice", "cypermethrin", size, AreaUnit::Acre)).unwrap_err();
        assert!(
            matches!(err, KrishiError::Validation { field: "field_size", .. }),
            "size {size:?} gave {err:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Test 9: Custom table from file, with literal (non-2.5x) hectare values
// ---------------------------------------------------------------------------
#[test]
fn custom_table_from_file() {
    let json = r#"{
        "name": "Village table",
        "version": "0.1",
        "crops": [
            {
                "crop": "banana",
                "substances": [
                    {
                        "substance": "carbendazim",
                        "volume_per_acre": "100",
                        "volume_per_hectare": "247",
                        "water_per_acre": "150",
                        "water_per_hectare": "370"
                    }
                ]
            }
        ]
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let table = load_table(file.path()).unwrap();

    let result = calculate_dosage_with(
        &query("banana", "carbendazim", "2", AreaUnit::Hectare),
        Some(&table),
    )
    .unwrap();
    assert_eq!(result.volume_ml, 494);
    assert_eq!(result.water_l, 740);

    // Reference table is used when no custom table is given
    let err = calculate_dosage_with(&query("banana", "carbendazim", "2", AreaUnit::Acre), None)
        .unwrap_err();
    assert!(matches!(err, KrishiError::UnknownCrop { .. }));
}

// ---------------------------------------------------------------------------
// Test 10: Query deserialized from JSON
// ---------------------------------------------------------------------------
#[test]
fn query_from_json() {
    let q: DosageQuery = serde_json::from_str(
        r#"{ "crop": "cotton", "substance": "Imidacloprid", "field_size": "1.5", "unit": "hectare" }"#,
    )
    .unwrap();
    let result = calculate_dosage(&q).unwrap();
    assert_eq!(result.substance, "imidacloprid");
    assert_eq!(result.unit, AreaUnit::Hectare);
    // 100 ml/ha * 1.5 = 150
    assert_eq!(result.volume_ml, 150);
}

// ---------------------------------------------------------------------------
// Test 11: Invalid custom table is rejected before any calculation
// ---------------------------------------------------------------------------
#[test]
fn invalid_custom_table_rejected() {
    let json = r#"{
        "name": "Bad",
        "version": "0.1",
        "crops": [
            { "crop": "rice", "substances": [ { "substance": "x", "volume_per_acre": "-1", "volume_per_hectare": "1", "water_per_acre": "1", "water_per_hectare": "1" } ] }
        ]
    }"#;
    assert!(matches!(
        parse_table_str(json),
        Err(KrishiError::TableInvalid(_))
    ));
}
