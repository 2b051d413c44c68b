//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::ranking::{mark_all_required, rank_postings, ScoredPosting, TierSummary};
use crate::matching::scorer::{
    MatchError, MatchScore, MatchScorer, RequiredSkill, SkillProficiency,
};
use crate::matching::store::{load_active_postings, load_candidate_skills};
use crate::models::posting::{PostingKind, PostingSummary};
use crate::state::AppState;

const MAX_RECOMMENDATIONS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub candidate_skills: Vec<SkillProficiency>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(default)]
    pub kind: PostingKind,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: Uuid,
    pub kind: PostingKind,
    pub summary: TierSummary,
    pub postings: Vec<ScoredPosting>,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores caller-supplied skills against caller-supplied requirements. No database access.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchScore>, AppError> {
    let score = state
        .match_scorer
        .score(&request.candidate_skills, &request.required_skills)?;
    Ok(Json(score))
}

/// GET /api/v1/students/:user_id/recommendations?kind=job|internship&limit=N
///
/// Ranks every active posting of `kind` against the student's skills.
/// A user without a student profile gets an empty list, not an error.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    if let Some(limit) = params.limit {
        if limit == 0 || limit > MAX_RECOMMENDATIONS {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {MAX_RECOMMENDATIONS}"
            )));
        }
    }

    let (candidate_skills, postings) = match load_candidate_skills(&state.db, user_id).await? {
        Some(skills) => (skills, load_active_postings(&state.db, params.kind).await?),
        None => (Vec::new(), Vec::new()),
    };

    let response = build_recommendations(
        user_id,
        params.kind,
        &state.config,
        state.match_scorer.as_ref(),
        &candidate_skills,
        postings,
        params.limit,
    )?;

    info!(
        "Ranked {} {} postings for user {user_id} ({} high, {} medium)",
        response.summary.total,
        params.kind.as_str(),
        response.summary.high,
        response.summary.medium
    );

    Ok(Json(response))
}

/// Scores, tiers and ranks loaded postings. The tier summary counts all postings,
/// even when `limit` truncates the returned list.
pub fn build_recommendations(
    user_id: Uuid,
    kind: PostingKind,
    config: &Config,
    scorer: &dyn MatchScorer,
    candidate_skills: &[SkillProficiency],
    mut postings: Vec<PostingSummary>,
    limit: Option<usize>,
) -> Result<RecommendationsResponse, MatchError> {
    if config.treat_all_skills_required {
        mark_all_required(&mut postings);
    }

    let mut ranked = rank_postings(scorer, candidate_skills, postings, &config.tier_thresholds)?;
    let summary = TierSummary::from_ranked(&ranked);

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    Ok(RecommendationsResponse {
        user_id,
        kind,
        summary,
        postings: ranked,
        scorer_backend: scorer.backend().to_string(),
    })
}
