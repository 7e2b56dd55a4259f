use crate::error::KrishiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Indian cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon season, June to September.
    Kharif,
    /// Winter season, October to January.
    Rabi,
    /// Summer season between Rabi and Kharif, February to May.
    Zaid,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif"),
            Season::Rabi => write!(f, "Rabi"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

impl Season {
    pub fn advice(&self) -> &'static str {
        match self {
            Season::Kharif => "High risk of fungal diseases. Monitor leaves regularly.",
            Season::Rabi => "Avoid over-irrigation. Watch for pest infestation.",
            Season::Zaid => "Ensure adequate irrigation and protect crops from heat stress.",
        }
    }
}

/// Season for a calendar month (1 = January).
pub fn season_for_month(month: u32) -> Result<Season, KrishiError> {
    match month {
        6..=9 => Ok(Season::Kharif),
        10..=12 | 1 => Ok(Season::Rabi),
        2..=5 => Ok(Season::Zaid),
        _ => Err(KrishiError::validation(
            "month",
            format!("month must be between 1 and 12, got {month}"),
        )),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalAdvisory {
    pub month: u32,
    pub season: Season,
    pub advice: String,
}

pub fn seasonal_advisory(month: u32) -> Result<SeasonalAdvisory, KrishiError> {
    let season = season_for_month(month)?;
    Ok(SeasonalAdvisory {
        month,
        season,
        advice: season.advice().to_string(),
    })
}

/// A symptom observed in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservedIssue {
    LeafSpots,
    PestDamage,
    Yellowing,
}

pub const ISSUE_KEYS: &[&str] = &["leaf", "pest", "yellow"];

const GENERAL_RECOMMENDATION: &str = "Possible cause detected. Recommended to consult Krushi Seva Kendra or apply basic organic treatment.";

impl ObservedIssue {
    /// Parse an issue key or description, matching whole words only.
    pub fn from_str_loose(s: &str) -> Option<ObservedIssue> {
        let lower = s.trim().to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has = |keys: &[&str]| words.iter().any(|w| keys.contains(w));

        if has(&["leaf", "leaves", "spot", "spots", "discoloration", "discolouration", "discolored"]) {
            Some(ObservedIssue::LeafSpots)
        } else if has(&["pest", "pests", "insect", "insects", "hole", "holes"]) {
            Some(ObservedIssue::PestDamage)
        } else if has(&["yellow", "yellowing", "yellowed"]) {
            Some(ObservedIssue::Yellowing)
        } else {
            None
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ObservedIssue::LeafSpots => "Leaf spots / discoloration",
            ObservedIssue::PestDamage => "Pest holes / insects",
            ObservedIssue::Yellowing => "Yellowing of crop",
        }
    }
}

impl fmt::Display for ObservedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAdvice {
    pub issue: ObservedIssue,
    pub description: String,
    pub recommendation: String,
}

pub fn issue_advice(issue: ObservedIssue) -> IssueAdvice {
    IssueAdvice {
        issue,
        description: issue.description().to_string(),
        recommendation: GENERAL_RECOMMENDATION.to_string(),
    }
}

/// Parse a free-text issue and return its advice.
pub fn lookup_issue(raw: &str) -> Result<IssueAdvice, KrishiError> {
    ObservedIssue::from_str_loose(raw)
        .map(issue_advice)
        .ok_or_else(|| {
            KrishiError::validation(
                "issue",
                format!(
                    "unrecognized issue '{}'. Available: {}",
                    raw.trim(),
                    ISSUE_KEYS.join(", ")
                ),
            )
        })
}
