//! Enriched report assembly
//!
//! Fans the classifier out over one [`AssessmentRecord`]. Each dimension is
//! classified on its own score; there is no cross-dimension logic.

use serde::Serialize;

use crate::band::{band, performance_level, ScoreBand, Tier};
use crate::cefr::{cefr, CefrInfo};
use crate::feedback::{feedback_for, Dimension};
use crate::record::{AssessmentRecord, Scores, Student};

/// Band per skill dimension (overall is reported separately as `scoreBand`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBands {
    pub pronunciation: ScoreBand,
    pub fluency: ScoreBand,
    pub vocabulary: ScoreBand,
    pub grammar: ScoreBand,
}

/// A value for the overall score and each skill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerDimension<T> {
    pub overall: T,
    pub pronunciation: T,
    pub fluency: T,
    pub vocabulary: T,
    pub grammar: T,
}

impl<T> PerDimension<T> {
    fn from_scores(scores: &Scores, mut derive: impl FnMut(Dimension, f64) -> T) -> Self {
        Self {
            overall: derive(Dimension::Overall, scores.overall),
            pronunciation: derive(Dimension::Pronunciation, scores.pronunciation),
            fluency: derive(Dimension::Fluency, scores.fluency),
            vocabulary: derive(Dimension::Vocabulary, scores.vocabulary),
            grammar: derive(Dimension::Grammar, scores.grammar),
        }
    }
}

/// Response payload for `GET /api/assessment`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub student: Student,
    pub max_score: f64,
    pub scores: Scores,
    pub cefr_level: CefrInfo,
    pub score_band: ScoreBand,
    pub skill_bands: SkillBands,
    pub performance_levels: PerDimension<Tier>,
    pub feedback: PerDimension<&'static str>,
}

impl AssessmentReport {
    /// Derive the enriched report for one record
    pub fn assemble(record: &AssessmentRecord) -> Self {
        let scores = record.scores;

        Self {
            student: record.student.clone(),
            max_score: record.max_score,
            scores,
            cefr_level: cefr(scores.overall),
            score_band: band(scores.overall),
            skill_bands: SkillBands {
                pronunciation: band(scores.pronunciation),
                fluency: band(scores.fluency),
                vocabulary: band(scores.vocabulary),
                grammar: band(scores.grammar),
            },
            performance_levels: PerDimension::from_scores(&scores, |_, score| {
                performance_level(score)
            }),
            feedback: PerDimension::from_scores(&scores, |dimension, score| {
                feedback_for(dimension, performance_level(score))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::feedback;

    fn record(overall: f64) -> AssessmentRecord {
        AssessmentRecord {
            student: Student {
                name: "Mia Chen".to_string(),
                test_date: "2024-03-15".to_string(),
                test_type: "Speaking Assessment".to_string(),
            },
            max_score: 9.0,
            scores: Scores {
                overall,
                pronunciation: 8.6,
                fluency: 7.5,
                vocabulary: 6.0,
                grammar: 4.0,
            },
        }
    }

    #[test]
    fn test_overall_7_8() {
        let report = AssessmentReport::assemble(&record(7.8));
        assert_eq!(report.score_band.band, "Very Good");
        assert_eq!(report.score_band.color, "#2196f3");
        assert_eq!(report.cefr_level.level, "C1");
        assert_eq!(report.cefr_level.name, "Advanced");
    }

    #[test]
    fn test_overall_exactly_6_5() {
        let report = AssessmentReport::assemble(&record(6.5));
        assert_eq!(report.score_band.band, "Good");
        assert_eq!(report.cefr_level.level, "B2");
    }

    #[test]
    fn test_each_skill_classified_independently() {
        let report = AssessmentReport::assemble(&record(7.0));
        assert_eq!(report.skill_bands.pronunciation.band, "Expert");
        assert_eq!(report.skill_bands.fluency.band, "Very Good");
        assert_eq!(report.skill_bands.vocabulary.band, "Competent");
        assert_eq!(report.skill_bands.grammar.band, "Limited");

        assert_eq!(report.performance_levels.overall, Tier::Good);
        assert_eq!(report.performance_levels.pronunciation, Tier::Expert);
        assert_eq!(report.performance_levels.grammar, Tier::Limited);
    }

    #[test]
    fn test_feedback_uses_dimension_rows() {
        let report = AssessmentReport::assemble(&record(7.0));
        assert_eq!(report.feedback.overall, feedback(7.0, "overall"));
        assert_eq!(report.feedback.pronunciation, feedback(8.6, "pronunciation"));
        assert_eq!(report.feedback.fluency, feedback(7.5, "fluency"));
        assert_eq!(report.feedback.vocabulary, feedback(6.0, "vocabulary"));
        assert_eq!(report.feedback.grammar, feedback(4.0, "grammar"));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let input = record(5.2);
        let first = serde_json::to_string(&AssessmentReport::assemble(&input)).unwrap();
        let second = serde_json::to_string(&AssessmentReport::assemble(&input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_shape() {
        let value = serde_json::to_value(AssessmentReport::assemble(&record(7.8))).unwrap();

        assert_eq!(value["student"]["testDate"], "2024-03-15");
        assert_eq!(value["maxScore"], 9.0);
        assert_eq!(value["scores"]["overall"], 7.8);
        assert_eq!(value["cefrLevel"]["level"], "C1");
        assert_eq!(value["scoreBand"]["band"], "Very Good");
        assert_eq!(value["skillBands"]["pronunciation"]["band"], "Expert");
        assert!(value["skillBands"].get("overall").is_none());
        assert_eq!(value["performanceLevels"]["overall"], "veryGood");
        assert_eq!(value["performanceLevels"]["grammar"], "limited");
        assert!(value["feedback"]["overall"].is_string());
    }
}
