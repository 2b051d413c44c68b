//! Read-only access to the marketplace's profile and posting tables.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::proficiency::ProficiencyLevel;
use crate::matching::scorer::{RequiredSkill, SkillProficiency};
use crate::models::posting::{PostingKind, PostingRow, PostingSkillRow, PostingSummary};
use crate::models::student::StudentSkillRow;

struct PostingTables {
    postings: &'static str,
    skills: &'static str,
    foreign_key: &'static str,
}

fn tables_for(kind: PostingKind) -> PostingTables {
    match kind {
        PostingKind::Job => PostingTables {
            postings: "jobs",
            skills: "job_skills",
            foreign_key: "job_id",
        },
        PostingKind::Internship => PostingTables {
            postings: "internships",
            skills: "internship_skills",
            foreign_key: "internship_id",
        },
    }
}

/// Returns the declared skills of the student owning `user_id`, or `None` if the
/// user has no student profile.
pub async fn load_candidate_skills(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Vec<SkillProficiency>>, AppError> {
    let profile_id: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM student_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    let Some(profile_id) = profile_id else {
        debug!("No student profile for user {user_id}");
        return Ok(None);
    };

    let rows: Vec<StudentSkillRow> = sqlx::query_as(
        "SELECT skill_id, level FROM student_skills WHERE student_profile_id = $1 ORDER BY created_at",
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await?;

    debug!("Loaded {} skills for student profile {profile_id}", rows.len());
    Ok(Some(to_candidate_skills(rows)))
}

/// Returns all active postings of `kind`, newest first, with their declared skills.
pub async fn load_active_postings(
    pool: &PgPool,
    kind: PostingKind,
) -> Result<Vec<PostingSummary>, AppError> {
    let tables = tables_for(kind);

    let rows: Vec<PostingRow> = sqlx::query_as(&format!(
        r#"
        SELECT p.id, p.title, p.location, p.created_at, e.company_name
        FROM {postings} p
        JOIN employer_profiles e ON e.id = p.employer_profile_id
        WHERE p.is_active = TRUE
        ORDER BY p.created_at DESC
        "#,
        postings = tables.postings,
    ))
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let skill_rows: Vec<PostingSkillRow> = sqlx::query_as(&format!(
        "SELECT {fk} AS posting_id, skill_id, required FROM {skills} WHERE {fk} = ANY($1)",
        fk = tables.foreign_key,
        skills = tables.skills,
    ))
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    debug!(
        "Loaded {} active {} postings with {} skill rows",
        rows.len(),
        kind.as_str(),
        skill_rows.len()
    );
    Ok(assemble_postings(kind, rows, skill_rows))
}

fn to_candidate_skills(rows: Vec<StudentSkillRow>) -> Vec<SkillProficiency> {
    rows.into_iter()
        .map(|row| SkillProficiency {
            level: ProficiencyLevel::from(row.level),
            skill_id: row.skill_id,
        })
        .collect()
}

/// Attaches skill rows to their postings, preserving posting order.
fn assemble_postings(
    kind: PostingKind,
    rows: Vec<PostingRow>,
    skill_rows: Vec<PostingSkillRow>,
) -> Vec<PostingSummary> {
    let mut by_posting: HashMap<Uuid, Vec<RequiredSkill>> = HashMap::new();
    for skill in skill_rows {
        by_posting
            .entry(skill.posting_id)
            .or_default()
            .push(RequiredSkill {
                skill_id: skill.skill_id,
                required: skill.required,
            });
    }

    rows.into_iter()
        .map(|row| PostingSummary {
            required_skills: by_posting.remove(&row.id).unwrap_or_default(),
            id: row.id,
            kind,
            title: row.title,
            company_name: row.company_name,
            location: row.location,
            created_at: row.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn posting_row(title: &str) -> PostingRow {
        PostingRow {
            id: Uuid::new_v4(),
            title: title.to_string(),
            location: None,
            company_name: "Tech Solutions Inc.".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_assemble_groups_skills_by_posting() {
        let first = posting_row("first");
        let second = posting_row("second");
        let skills = vec![
            PostingSkillRow {
                posting_id: second.id,
                skill_id: "react".to_string(),
                required: true,
            },
            PostingSkillRow {
                posting_id: first.id,
                skill_id: "js".to_string(),
                required: false,
            },
            PostingSkillRow {
                posting_id: second.id,
                skill_id: "ts".to_string(),
                required: true,
            },
        ];

        let postings = assemble_postings(PostingKind::Internship, vec![first, second], skills);

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "first");
        assert_eq!(postings[0].kind, PostingKind::Internship);
        assert_eq!(postings[0].required_skills.len(), 1);
        assert!(!postings[0].required_skills[0].required);
        let second_ids: Vec<_> = postings[1]
            .required_skills
            .iter()
            .map(|s| s.skill_id.as_str())
            .collect();
        assert_eq!(second_ids, vec!["react", "ts"]);
    }

    #[test]
    fn test_posting_without_skills_gets_empty_list() {
        let postings = assemble_postings(PostingKind::Job, vec![posting_row("bare")], vec![]);
        assert!(postings[0].required_skills.is_empty());
    }

    #[test]
    fn test_candidate_levels_are_parsed() {
        let skills = to_candidate_skills(vec![
            StudentSkillRow {
                skill_id: "js".to_string(),
                level: "advanced".to_string(),
            },
            StudentSkillRow {
                skill_id: "sql".to_string(),
                level: "PRO".to_string(),
            },
        ]);
        assert_eq!(skills[0].level, ProficiencyLevel::Advanced);
        assert!(!skills[1].level.is_recognized());
    }

    #[test]
    fn test_tables_for_kind() {
        assert_eq!(tables_for(PostingKind::Job).skills, "job_skills");
        assert_eq!(tables_for(PostingKind::Internship).foreign_key, "internship_id");
    }
}
