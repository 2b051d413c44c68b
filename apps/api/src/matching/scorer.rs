//! Skill match scoring: compares a student's declared skills against a posting's
//! required skills and produces a percentage used to rank recommendations.
//!
//! Default: `WeightedSkillScorer` (lenient, unknown levels weigh as beginner).
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::proficiency::{ProficiencyLevel, EXPERT_WEIGHT};

/// Boost applied to skills a posting marks as mandatory.
pub const REQUIRED_MULTIPLIER: f64 = 1.2;
pub const OPTIONAL_MULTIPLIER: f64 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models
// ────────────────────────────────────────────────────────────────────────────

/// A skill the student claims, with a declared proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProficiency {
    pub skill_id: String,
    pub level: ProficiencyLevel,
}

/// A skill a posting declares, optionally flagged mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub skill_id: String,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Percentage in 0..=100, rounded to two decimals.
    pub score: f64,
    pub skill_matches: usize,
    pub total_skills: usize,
}

impl MatchScore {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            skill_matches: 0,
            total_skills: 0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Unknown proficiency level '{level}' for skill {skill_id}")]
    UnknownProficiency { skill_id: String, level: String },
}

/// How unrecognized proficiency levels are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Unknown levels silently score as beginner.
    #[default]
    Lenient,
    /// Unknown levels on the candidate side are rejected.
    Strict,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scorer backend carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        candidate_skills: &[SkillProficiency],
        required_skills: &[RequiredSkill],
    ) -> Result<MatchScore, MatchError>;

    /// Label reported to clients for transparency.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSkillScorer {
    pub policy: MatchPolicy,
}

impl WeightedSkillScorer {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }
}

impl MatchScorer for WeightedSkillScorer {
    fn score(
        &self,
        candidate_skills: &[SkillProficiency],
        required_skills: &[RequiredSkill],
    ) -> Result<MatchScore, MatchError> {
        match self.policy {
            MatchPolicy::Lenient => Ok(compute_match_score(candidate_skills, required_skills)),
            MatchPolicy::Strict => compute_match_score_strict(candidate_skills, required_skills),
        }
    }

    fn backend(&self) -> &'static str {
        match self.policy {
            MatchPolicy::Lenient => "weighted",
            MatchPolicy::Strict => "weighted-strict",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted match algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Computes the weighted skill match between a candidate and a posting.
///
/// Algorithm:
/// 1. For each required skill, find the first candidate skill with the same id.
/// 2. On a hit: `skill_matches += 1`, `weighted += level_weight × multiplier`
///    (multiplier 1.2 for mandatory skills, 1.0 otherwise).
/// 3. `max_possible = total_skills × 1.0 × 1.2` (every skill matched at expert, mandatory).
/// 4. `score = min(100, weighted / max_possible × 100)`, rounded to 2 decimals.
///
/// A posting with no required skills scores 0, not 100.
pub fn compute_match_score(
    candidate_skills: &[SkillProficiency],
    required_skills: &[RequiredSkill],
) -> MatchScore {
    let total_skills = required_skills.len();
    if total_skills == 0 {
        return MatchScore::empty();
    }

    let mut skill_matches = 0;
    let mut weighted_score = 0.0_f64;

    for required in required_skills {
        let Some(candidate) = candidate_skills
            .iter()
            .find(|c| c.skill_id == required.skill_id)
        else {
            continue;
        };

        skill_matches += 1;
        let multiplier = if required.required {
            REQUIRED_MULTIPLIER
        } else {
            OPTIONAL_MULTIPLIER
        };
        weighted_score += candidate.level.weight() * multiplier;
    }

    let max_possible_score = total_skills as f64 * EXPERT_WEIGHT * REQUIRED_MULTIPLIER;
    let score = ((weighted_score / max_possible_score) * 100.0).min(100.0);

    MatchScore {
        score: round_to_hundredths(score),
        skill_matches,
        total_skills,
    }
}

/// Same as [`compute_match_score`] but rejects candidate skills whose level is not
/// one of the four known proficiency levels.
pub fn compute_match_score_strict(
    candidate_skills: &[SkillProficiency],
    required_skills: &[RequiredSkill],
) -> Result<MatchScore, MatchError> {
    if let Some(bad) = candidate_skills.iter().find(|c| !c.level.is_recognized()) {
        return Err(MatchError::UnknownProficiency {
            skill_id: bad.skill_id.clone(),
            level: bad.level.as_str().to_string(),
        });
    }
    Ok(compute_match_score(candidate_skills, required_skills))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
