pub mod advisory;
pub mod config;
pub mod dose;
pub mod table;

use crate::config::Config;
use krishi_core::error::KrishiError;
use krishi_core::model::AreaUnit;
use krishi_core::table::schema::CropDosageTable;
use std::path::PathBuf;

/// Load the custom table from `--table` or the config, if either names one.
pub fn custom_table(
    flag: Option<PathBuf>,
    config: &Config,
) -> Result<Option<CropDosageTable>, KrishiError> {
    match flag.or_else(|| config.table.clone()) {
        Some(path) => Ok(Some(krishi_core::table::load_table(&path)?)),
        None => Ok(None),
    }
}

/// Output format from `--output`, falling back to the config.
pub fn output_format(flag: Option<String>, config: &Config) -> String {
    flag.unwrap_or_else(|| config.output_format.clone())
}

/// Area unit from `--unit`, falling back to the config.
pub fn area_unit(flag: Option<&str>, config: &Config) -> Result<AreaUnit, KrishiError> {
    match flag {
        Some(u) => u.parse(),
        None => Ok(config.default_unit),
    }
}
