//! Score bands
//!
//! Six tiers shared by every score dimension. The same ladder classifies
//! overall, pronunciation, fluency, vocabulary and grammar scores.

use serde::Serialize;

use crate::ladder::Ladder;

/// Band tier, highest first
///
/// Serializes as the internal tier key (`"veryGood"`), which the report
/// exposes as the performance level. The display label is [`Tier::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Expert,
    VeryGood,
    Good,
    Competent,
    Modest,
    Limited,
}

impl Tier {
    /// All tiers, highest first
    pub const ALL: [Tier; 6] = [
        Tier::Expert,
        Tier::VeryGood,
        Tier::Good,
        Tier::Competent,
        Tier::Modest,
        Tier::Limited,
    ];

    /// Internal tier key
    pub fn key(&self) -> &'static str {
        match self {
            Tier::Expert => "expert",
            Tier::VeryGood => "veryGood",
            Tier::Good => "good",
            Tier::Competent => "competent",
            Tier::Modest => "modest",
            Tier::Limited => "limited",
        }
    }

    /// Display label shown on the report
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Expert => "Expert",
            Tier::VeryGood => "Very Good",
            Tier::Good => "Good",
            Tier::Competent => "Competent",
            Tier::Modest => "Modest",
            Tier::Limited => "Limited",
        }
    }

    /// Display color (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Expert => "#00c853",
            Tier::VeryGood => "#2196f3",
            Tier::Good => "#667eea",
            Tier::Competent => "#ff9800",
            Tier::Modest => "#ff5722",
            Tier::Limited => "#f44336",
        }
    }
}

/// Band ladder: 8.5 / 7.5 / 6.5 / 5.5 / 4.5, else Limited
pub const BAND_LADDER: Ladder<Tier> = Ladder::new(
    &[
        (8.5, Tier::Expert),
        (7.5, Tier::VeryGood),
        (6.5, Tier::Good),
        (5.5, Tier::Competent),
        (4.5, Tier::Modest),
    ],
    Tier::Limited,
);

/// Band label and color for one score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub band: &'static str,
    pub color: &'static str,
}

impl From<Tier> for ScoreBand {
    fn from(tier: Tier) -> Self {
        Self {
            band: tier.label(),
            color: tier.color(),
        }
    }
}

/// Tier for a score (the performance level tag)
pub fn performance_level(score: f64) -> Tier {
    BAND_LADDER.classify(score)
}

/// Band label and color for a score
pub fn band(score: f64) -> ScoreBand {
    performance_level(score).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band(9.0).band, "Expert");
        assert_eq!(band(8.5).band, "Expert");
        assert_eq!(band(8.4999).band, "Very Good");
        assert_eq!(band(7.5).band, "Very Good");
        assert_eq!(band(7.4999).band, "Good");
        assert_eq!(band(6.5).band, "Good");
        assert_eq!(band(6.4999).band, "Competent");
        assert_eq!(band(5.5).band, "Competent");
        assert_eq!(band(5.4999).band, "Modest");
        assert_eq!(band(4.5).band, "Modest");
        assert_eq!(band(4.4999).band, "Limited");
        assert_eq!(band(0.0).band, "Limited");
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(band(7.8), ScoreBand { band: "Very Good", color: "#2196f3" });
        assert_eq!(band(1.0).color, "#f44336");
        assert_eq!(band(8.9).color, "#00c853");
    }

    #[test]
    fn test_scores_outside_nominal_range() {
        assert_eq!(performance_level(12.0), Tier::Expert);
        assert_eq!(performance_level(-3.0), Tier::Limited);
    }

    #[test]
    fn test_tier_serializes_as_key() {
        for tier in Tier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.key()));
        }
    }

    #[test]
    fn test_ladder_thresholds() {
        let thresholds: Vec<f64> = BAND_LADDER.thresholds().collect();
        assert_eq!(thresholds, vec![8.5, 7.5, 6.5, 5.5, 4.5]);
    }
}
