use krishi_core::error::KrishiError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), KrishiError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
