use krishi_core::advisory::{IssueAdvice, SeasonalAdvisory};
use krishi_core::dosage::DosageResult;
use std::fmt::Write;

pub fn print_dosage(result: &DosageResult, verbose: bool) {
    print!("{}", format_dosage(result, verbose));
}

pub fn format_dosage(result: &DosageResult, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== Dosage for {} ({} {}) ===\n",
        result.crop, result.field_size, result.unit
    );
    let _ = writeln!(out, "  Substance:    {}", result.substance);
    let _ = writeln!(out, "  Concentrate:  {} ml", result.volume_ml);
    let _ = writeln!(out, "  Water:        {} L", result.water_l);
    out.push('\n');

    if let Some(notice) = result.notice() {
        let _ = writeln!(out, "  Note: {notice}\n");
    }

    if verbose {
        let _ = writeln!(out, "  {}\n", result.reason);
    }

    out
}

pub fn print_advisory(advisory: &SeasonalAdvisory) {
    println!("=== Seasonal advisory ===\n");
    println!("  Current season: {}", advisory.season);
    println!("  {}", advisory.advice);
    println!();
}

pub fn print_issue(advice: &IssueAdvice) {
    println!("=== Crop issue: {} ===\n", advice.description);
    println!("  {}", advice.recommendation);
    println!();
}
