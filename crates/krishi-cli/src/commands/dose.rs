use krishi_core::error::KrishiError;
use krishi_core::model::DosageQuery;
use std::path::PathBuf;

use crate::config::Config;
use crate::output;

pub struct DoseArgs {
    pub crop: String,
    pub substance: String,
    pub size: String,
    pub unit: Option<String>,
    pub table: Option<PathBuf>,
    pub output: Option<String>,
    pub verbose: bool,
}

pub fn run(args: DoseArgs, config: &Config) -> Result<(), KrishiError> {
    let unit = super::area_unit(args.unit.as_deref(), config)?;

    let table = super::custom_table(args.table, config)?;
    let query = DosageQuery::new(args.crop, args.substance, args.size, unit);
    let result = krishi_core::calculate_dosage_with(&query, table.as_ref())?;

    match super::output_format(args.output, config).as_str() {
        "json" => output::json::print(&result)?,
        _ => output::table::print_dosage(&result, args.verbose),
    }

    Ok(())
}
