use crate::dosage::outcome::DosageResult;
use crate::error::KrishiError;
use crate::model::DosageQuery;
use crate::table::schema::{CropDosageTable, SubstanceDosage};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::{debug, warn};

/// Compute the spray mix for a query against a dosage table.
///
/// Input is validated first (crop, field size, substance). The substance is
/// then matched against the crop's entries in table order; if nothing matches,
/// the crop's first entry is used and the result is flagged as approximate.
pub fn calculate(
    query: &DosageQuery,
    table: &CropDosageTable,
) -> Result<DosageResult, KrishiError> {
    let crop = query.crop.trim().to_lowercase();
    if crop.is_empty() {
        return Err(KrishiError::validation("crop", "crop must not be empty"));
    }

    let field_size = parse_field_size(&query.field_size)?;

    let requested = query.substance.trim();
    if requested.is_empty() {
        return Err(KrishiError::validation(
            "substance",
            "substance name must not be empty",
        ));
    }

    let entries = table.lookup(&crop);
    let Some((default_entry, _)) = entries.split_first() else {
        return Err(KrishiError::UnknownCrop { crop });
    };

    let (dosage, approximate_match) = match match_substance(entries, requested) {
        Some(dosage) => {
            debug!(crop = %crop, requested, matched = %dosage.substance, "substance resolved");
            (dosage, false)
        }
        None => {
            warn!(
                crop = %crop,
                requested,
                fallback = %default_entry.substance,
                "no substance match, using crop default"
            );
            (default_entry, true)
        }
    };

    let unit = query.unit;
    let volume_rate = dosage.volume_per(unit);
    let water_rate = dosage.water_per(unit);
    let volume_ml = scale(volume_rate, field_size)?;
    let water_l = scale(water_rate, field_size)?;

    let mut reason = format!(
        "{}: {} ml/{} x {} {} = {} ml concentrate; {} L/{} x {} {} = {} L water",
        dosage.substance,
        volume_rate,
        unit.symbol(),
        field_size,
        unit.symbol(),
        volume_ml,
        water_rate,
        unit.symbol(),
        field_size,
        unit.symbol(),
        water_l
    );
    if approximate_match {
        reason = format!(
            "no entry for '{}' on {}, using default {}. {}",
            requested, crop, dosage.substance, reason
        );
    }

    Ok(DosageResult {
        crop,
        requested_substance: requested.to_string(),
        substance: dosage.substance.clone(),
        field_size,
        unit,
        volume_ml,
        water_l,
        approximate_match,
        reason,
    })
}

/// Find the first entry whose name contains the query, or is contained in it.
///
/// Comparison is case-insensitive. Entries are tested in order and the first
/// hit wins, so "cyper" and "cypermethrin pro" both select "cypermethrin".
pub fn match_substance<'a>(
    entries: &'a [SubstanceDosage],
    query: &str,
) -> Option<&'a SubstanceDosage> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    entries.iter().find(|entry| {
        let name = entry.substance.to_lowercase();
        name.contains(&needle) || needle.contains(&name)
    })
}

/// Most fractional digits a `Decimal` can hold without rounding.
const MAX_DECIMAL_PLACES: usize = 28;

/// Parse a field size typed by the user. Must be a finite number above zero.
fn parse_field_size(raw: &str) -> Result<Decimal, KrishiError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(KrishiError::validation(
            "field_size",
            "field size must not be empty",
        ));
    }

    // Decimal::from_str accepts digit separators such as "1_000"
    if s.contains('_') {
        return Err(not_a_number(s));
    }

    // Catch this before parsing: Decimal::from_str rounds extra digits away silently
    let mantissa = s.split(['e', 'E']).next().unwrap_or(s);
    if let Some((_, fraction)) = mantissa.split_once('.') {
        if fraction.len() > MAX_DECIMAL_PLACES {
            return Err(too_precise(s));
        }
    }

    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 && v < 1.0 => too_precise(s),
            Ok(v) if v.is_finite() && v >= 1.0 => {
                KrishiError::validation("field_size", format!("'{s}' is too large"))
            }
            Ok(v) if v.is_finite() => KrishiError::validation(
                "field_size",
                format!("field size must be greater than zero, got {s}"),
            ),
            _ => not_a_number(s),
        })?;

    if value <= Decimal::ZERO {
        return Err(KrishiError::validation(
            "field_size",
            format!("field size must be greater than zero, got {value}"),
        ));
    }

    Ok(value)
}

fn not_a_number(s: &str) -> KrishiError {
    KrishiError::validation("field_size", format!("'{s}' is not a number"))
}

fn too_precise(s: &str) -> KrishiError {
    KrishiError::validation(
        "field_size",
        format!("'{s}' has more than {MAX_DECIMAL_PLACES} decimal places"),
    )
}

/// Multiply a per-unit rate by the field size and round half-up to an integer.
fn scale(rate: Decimal, field_size: Decimal) -> Result<u64, KrishiError> {
    rate.checked_mul(field_size)
        .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|v| v.to_u64())
        .ok_or_else(|| KrishiError::validation("field_size", "field size is too large"))
}
