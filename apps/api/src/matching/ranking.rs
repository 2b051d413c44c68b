//! Ranking of postings for a student: scores every posting, buckets it into a
//! tier, and orders by descending score.
//!
//! The sort is stable: postings with equal scores keep the order they were
//! loaded in (newest first).

use serde::{Deserialize, Serialize};

use crate::matching::scorer::{MatchError, MatchScore, MatchScorer, SkillProficiency};
use crate::matching::tiers::{MatchTier, TierThresholds};
use crate::models::posting::PostingSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: PostingSummary,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    pub tier: MatchTier,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierSummary {
    pub high: usize,
    pub medium: usize,
    pub other: usize,
    pub total: usize,
}

impl TierSummary {
    pub fn from_ranked(ranked: &[ScoredPosting]) -> Self {
        ranked.iter().fold(TierSummary::default(), |mut acc, p| {
            match p.tier {
                MatchTier::High => acc.high += 1,
                MatchTier::Medium => acc.medium += 1,
                MatchTier::Other => acc.other += 1,
            }
            acc.total += 1;
            acc
        })
    }
}

/// Overrides every posting skill's `required` flag with `true`.
///
/// The marketplace treats all declared posting skills as mandatory when ranking.
pub fn mark_all_required(postings: &mut [PostingSummary]) {
    for skill in postings.iter_mut().flat_map(|p| p.required_skills.iter_mut()) {
        skill.required = true;
    }
}

pub fn rank_postings(
    scorer: &dyn MatchScorer,
    candidate_skills: &[SkillProficiency],
    postings: Vec<PostingSummary>,
    thresholds: &TierThresholds,
) -> Result<Vec<ScoredPosting>, MatchError> {
    let mut scored = postings
        .into_iter()
        .map(|posting| -> Result<ScoredPosting, MatchError> {
            let match_score = scorer.score(candidate_skills, &posting.required_skills)?;
            Ok(ScoredPosting {
                tier: MatchTier::for_score(match_score.score, thresholds),
                posting,
                match_score,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.match_score.score.total_cmp(&a.match_score.score));
    Ok(scored)
}
