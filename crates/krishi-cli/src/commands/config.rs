use krishi_core::error::KrishiError;

use crate::config::Config;

pub fn show(config: &Config) -> Result<(), KrishiError> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn path() -> Result<(), KrishiError> {
    let path = Config::path()?;
    let status = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", path.display(), status);
    Ok(())
}
