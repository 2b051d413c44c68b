use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::scorer::RequiredSkill;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostingKind {
    #[default]
    Job,
    Internship,
}

impl PostingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostingKind::Job => "job",
            PostingKind::Internship => "internship",
        }
    }
}

/// An active job or internship row joined with its employer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostingRow {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostingSkillRow {
    pub posting_id: Uuid,
    pub skill_id: String,
    pub required: bool,
}

/// A posting as handed to the scorer: summary fields plus its declared skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostingSummary {
    pub id: Uuid,
    pub kind: PostingKind,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub required_skills: Vec<RequiredSkill>,
}
