// Skill matching: proficiency weights, the match scorer, tiering and ranking of
// postings for a student, plus the read-only stores and HTTP handlers around it.

pub mod handlers;
pub mod proficiency;
pub mod ranking;
pub mod scorer;
pub mod store;
pub mod tiers;
