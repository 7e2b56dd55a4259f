use chrono::Datelike;
use krishi_core::advisory;
use krishi_core::error::KrishiError;

use crate::config::Config;
use crate::output;

pub fn season(
    month: Option<u32>,
    output_format: Option<String>,
    config: &Config,
) -> Result<(), KrishiError> {
    let month = month.unwrap_or_else(|| chrono::Local::now().month());
    let advisory = advisory::seasonal_advisory(month)?;

    match super::output_format(output_format, config).as_str() {
        "json" => output::json::print(&advisory)?,
        _ => output::table::print_advisory(&advisory),
    }
    Ok(())
}

pub fn issue(
    issue: &str,
    output_format: Option<String>,
    config: &Config,
) -> Result<(), KrishiError> {
    let advice = advisory::lookup_issue(issue)?;

    match super::output_format(output_format, config).as_str() {
        "json" => output::json::print(&advice)?,
        _ => output::table::print_issue(&advice),
    }
    Ok(())
}
