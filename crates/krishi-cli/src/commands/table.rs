use krishi_core::error::KrishiError;
use krishi_core::table::builtin;
use krishi_core::table::schema::CropDosageTable;
use std::path::{Path, PathBuf};

use crate::config::Config;

fn with_table<F>(flag: Option<PathBuf>, config: &Config, f: F) -> Result<(), KrishiError>
where
    F: FnOnce(&CropDosageTable) -> Result<(), KrishiError>,
{
    match super::custom_table(flag, config)? {
        Some(table) => f(&table),
        None => f(builtin::reference_table()?),
    }
}

pub fn list(table: Option<PathBuf>, config: &Config) -> Result<(), KrishiError> {
    with_table(table, config, |table| {
        println!("{} (v{})\n", table.name, table.version);
        if let Some(ref desc) = table.description {
            println!("{}\n", desc);
        }
        println!("Crops:\n");
        for crop in &table.crops {
            let names: Vec<&str> = crop.substances.iter().map(|s| s.substance.as_str()).collect();
            println!("  {:<12} {}", crop.crop, names.join(", "));
        }
        println!();
        Ok(())
    })
}

pub fn explain(crop: &str, table: Option<PathBuf>, config: &Config) -> Result<(), KrishiError> {
    with_table(table, config, |table| {
        let key = crop.trim().to_lowercase();
        let entries = table.lookup(&key);
        if entries.is_empty() {
            return Err(KrishiError::UnknownCrop { crop: key });
        }

        println!("{} -- {} (v{})\n", key, table.name, table.version);
        println!("Substances are matched by partial name, in the order listed.");
        println!("If nothing matches, the first substance is used as the default.\n");

        let max_name_len = entries
            .iter()
            .map(|e| e.substance.len())
            .max()
            .unwrap_or(12)
            .max("Substance".len());

        println!(
            "  {:<width$}  {:>10}  {:>10}  {:>10}  {:>10}  Note",
            "Substance",
            "ml/acre",
            "ml/ha",
            "L/acre",
            "L/ha",
            width = max_name_len
        );
        println!("  {}", "-".repeat(max_name_len + 4 * 12 + 6));

        for entry in entries {
            println!(
                "  {:<width$}  {:>10}  {:>10}  {:>10}  {:>10}  {}",
                entry.substance,
                entry.volume_per_acre.to_string(),
                entry.volume_per_hectare.to_string(),
                entry.water_per_acre.to_string(),
                entry.water_per_hectare.to_string(),
                entry.note.as_deref().unwrap_or(""),
                width = max_name_len
            );
        }
        println!();
        Ok(())
    })
}

pub fn schema() -> Result<(), KrishiError> {
    print!(
        r#"JSON Dosage Table Schema
========================

A dosage table lists, for each crop, the substances it can be sprayed with
and how much concentrate and water to use per unit of field area. When you
run `krishi dose`, the substance you name is looked up in the crop's list.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  crops         (array, required)   List of crops (see below)

Each crop in the "crops" array:
  crop          (string, required)  Crop identifier, lowercase (e.g., "rice")
  substances    (array, required)   Ordered list of substance dosages. Must
                                    not be empty: the first entry is the
                                    default when no substance matches.

Each substance:
  substance           (string, required)  Canonical name. Matched by partial
                                          name in either direction, first
                                          entry wins.
  volume_per_acre     (string, required)  Concentrate in ml per acre
  volume_per_hectare  (string, required)  Concentrate in ml per hectare
  water_per_acre      (string, required)  Water in L per acre
  water_per_hectare   (string, required)  Water in L per hectare
  note                (string, optional)  Target pest or remark

All rates must be greater than zero. Per-hectare rates are used as written;
`krishi table validate` warns when they are not 2.5x the per-acre rate.

Example:
{{
  "name": "Village table",
  "version": "1.0",
  "crops": [
    {{
      "crop": "rice",
      "substances": [
        {{
          "substance": "cypermethrin",
          "volume_per_acre": "200",
          "volume_per_hectare": "500",
          "water_per_acre": "200",
          "water_per_hectare": "500",
          "note": "Stem borer"
        }}
      ]
    }}
  ]
}}

Note: rates must be quoted strings, not bare numbers, to preserve exact
decimal precision (e.g., "33.5" not 33.5).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), KrishiError> {
    let table = krishi_core::table::load_table(file)?;

    let substances: usize = table.crops.iter().map(|c| c.substances.len()).sum();
    println!("Table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Crops: {}", table.crops().collect::<Vec<_>>().join(", "));
    println!("  Entries: {} substances", substances);

    let warnings = krishi_core::table::consistency_warnings(&table);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
