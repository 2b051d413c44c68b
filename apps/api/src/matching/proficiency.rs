//! Proficiency levels a student declares for a skill, and their scoring weights.
//!
//! Levels arrive from the profile store as free-form strings. Parsing is
//! case-insensitive and never fails: anything outside the four known levels
//! becomes `Unrecognized`, which carries the raw text and weighs the same as
//! `Beginner`.

use serde::{Deserialize, Serialize};

pub const BEGINNER_WEIGHT: f64 = 0.4;
pub const INTERMEDIATE_WEIGHT: f64 = 0.7;
pub const ADVANCED_WEIGHT: f64 = 0.9;
pub const EXPERT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    /// Raw value that matched none of the known levels.
    Unrecognized(String),
}

impl ProficiencyLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "BEGINNER" => ProficiencyLevel::Beginner,
            "INTERMEDIATE" => ProficiencyLevel::Intermediate,
            "ADVANCED" => ProficiencyLevel::Advanced,
            "EXPERT" => ProficiencyLevel::Expert,
            _ => ProficiencyLevel::Unrecognized(raw.to_string()),
        }
    }

    /// Scoring weight in `[0.4, 1.0]`. Unrecognized levels fall back to the beginner weight.
    pub fn weight(&self) -> f64 {
        match self {
            ProficiencyLevel::Beginner => BEGINNER_WEIGHT,
            ProficiencyLevel::Intermediate => INTERMEDIATE_WEIGHT,
            ProficiencyLevel::Advanced => ADVANCED_WEIGHT,
            ProficiencyLevel::Expert => EXPERT_WEIGHT,
            ProficiencyLevel::Unrecognized(_) => BEGINNER_WEIGHT,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ProficiencyLevel::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProficiencyLevel::Beginner => "BEGINNER",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
            ProficiencyLevel::Expert => "EXPERT",
            ProficiencyLevel::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProficiencyLevel {
    fn from(raw: String) -> Self {
        ProficiencyLevel::parse(&raw)
    }
}

impl From<&str> for ProficiencyLevel {
    fn from(raw: &str) -> Self {
        ProficiencyLevel::parse(raw)
    }
}

impl From<ProficiencyLevel> for String {
    fn from(level: ProficiencyLevel) -> Self {
        level.as_str().to_string()
    }
}
