use anyhow::{bail, Context, Result};

use crate::matching::scorer::MatchPolicy;
use crate::matching::tiers::TierThresholds;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub match_policy: MatchPolicy,
    pub treat_all_skills_required: bool,
    pub tier_thresholds: TierThresholds,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_policy = if env_flag("STRICT_PROFICIENCY_LEVELS", false)? {
            MatchPolicy::Strict
        } else {
            MatchPolicy::Lenient
        };

        let tier_thresholds = TierThresholds {
            high: env_parse("MATCH_HIGH_THRESHOLD", 70.0)?,
            medium: env_parse("MATCH_MEDIUM_THRESHOLD", 40.0)?,
        };
        validate_thresholds(&tier_thresholds)?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            port: env_parse("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_policy,
            treat_all_skills_required: env_flag("TREAT_ALL_SKILLS_REQUIRED", true)?,
            tier_thresholds,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).with_context(|| format!("{key} must be true or false")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{other}'"),
    }
}

fn validate_thresholds(t: &TierThresholds) -> Result<()> {
    let in_range = |v: f64| (0.0..=100.0).contains(&v);
    if !in_range(t.high) || !in_range(t.medium) {
        bail!("Match tier thresholds must be within 0 and 100");
    }
    if t.medium > t.high {
        bail!(
            "MATCH_MEDIUM_THRESHOLD ({}) must not exceed MATCH_HIGH_THRESHOLD ({})",
            t.medium,
            t.high
        );
    }
    Ok(())
}
