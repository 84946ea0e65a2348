//! CEFR level classification
//!
//! Applied to the overall score only. The CEFR ladder is its own scale and
//! deliberately does not share cut points with the band ladder: B1 starts at
//! 5.0 and A2 at 4.0, where the corresponding bands start at 5.5 and 4.5.

use serde::Serialize;

use crate::ladder::Ladder;

/// Common European Framework of Reference level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// Level code, e.g. "B2"
    pub fn code(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Short name, e.g. "Upper Intermediate"
    pub fn name(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "Beginner",
            CefrLevel::A2 => "Elementary",
            CefrLevel::B1 => "Intermediate",
            CefrLevel::B2 => "Upper Intermediate",
            CefrLevel::C1 => "Advanced",
            CefrLevel::C2 => "Proficient",
        }
    }

    /// Official descriptor
    pub fn description(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "Breakthrough or Beginner",
            CefrLevel::A2 => "Waystage or Elementary",
            CefrLevel::B1 => "Threshold or Intermediate",
            CefrLevel::B2 => "Vantage or Upper Intermediate",
            CefrLevel::C1 => "Effective Operational Proficiency",
            CefrLevel::C2 => "Mastery or Proficiency",
        }
    }
}

/// CEFR ladder: 8.5 / 7.5 / 6.5 / 5 / 4, else A1
pub const CEFR_LADDER: Ladder<CefrLevel> = Ladder::new(
    &[
        (8.5, CefrLevel::C2),
        (7.5, CefrLevel::C1),
        (6.5, CefrLevel::B2),
        (5.0, CefrLevel::B1),
        (4.0, CefrLevel::A2),
    ],
    CefrLevel::A1,
);

/// CEFR level as exposed in the report payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CefrInfo {
    pub level: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<CefrLevel> for CefrInfo {
    fn from(level: CefrLevel) -> Self {
        Self {
            level: level.code(),
            name: level.name(),
            description: level.description(),
        }
    }
}

/// CEFR level for an overall score
pub fn cefr(score: f64) -> CefrInfo {
    CEFR_LADDER.classify(score).into()
}
