use serde::{Deserialize, Serialize};

/// Display bucket for a match score on the recommendations view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Other,
}

/// Lower bounds (inclusive) of the high and medium tiers, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            medium: 40.0,
        }
    }
}

impl MatchTier {
    pub fn for_score(score: f64, thresholds: &TierThresholds) -> Self {
        match score {
            s if s >= thresholds.high => MatchTier::High,
            s if s >= thresholds.medium => MatchTier::Medium,
            _ => MatchTier::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let t = TierThresholds::default();
        assert_eq!(MatchTier::for_score(100.0, &t), MatchTier::High);
        assert_eq!(MatchTier::for_score(70.0, &t), MatchTier::High);
        assert_eq!(MatchTier::for_score(69.99, &t), MatchTier::Medium);
        assert_eq!(MatchTier::for_score(40.0, &t), MatchTier::Medium);
        assert_eq!(MatchTier::for_score(39.99, &t), MatchTier::Other);
        assert_eq!(MatchTier::for_score(0.0, &t), MatchTier::Other);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = TierThresholds {
            high: 90.0,
            medium: 50.0,
        };
        assert_eq!(MatchTier::for_score(85.0, &t), MatchTier::Medium);
        assert_eq!(MatchTier::for_score(45.0, &t), MatchTier::Other);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&MatchTier::High).unwrap(), "\"high\"");
    }
}
