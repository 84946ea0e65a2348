//! Classifier properties across the public API
//!
//! Tests cover:
//! - Closed lower bounds at every band and CEFR threshold
//! - Everything at or above 8.5 is Expert / C2
//! - Feedback fallback for unrecognized dimensions
//! - Determinism of repeated calls

use speakscore_common::band::BAND_LADDER;
use speakscore_common::cefr::CEFR_LADDER;
use speakscore_common::{band, cefr, feedback, performance_level, Tier};

const EPSILON: f64 = 1e-4;

#[test]
fn test_top_tier_for_all_high_scores() {
    let mut score = 8.5;
    while score <= 9.0 {
        assert_eq!(band(score).band, "Expert", "score {}", score);
        assert_eq!(cefr(score).level, "C2", "score {}", score);
        score += 0.05;
    }
}

#[test]
fn test_every_band_threshold_is_closed_below() {
    let thresholds: Vec<f64> = BAND_LADDER.thresholds().collect();
    let tiers = Tier::ALL;

    for (i, threshold) in thresholds.iter().enumerate() {
        assert_eq!(performance_level(*threshold), tiers[i], "at {}", threshold);
        assert_eq!(
            performance_level(threshold - EPSILON),
            tiers[i + 1],
            "just below {}",
            threshold
        );
    }
}

#[test]
fn test_every_cefr_threshold_is_closed_below() {
    let expected = [
        (8.5, "C2", "C1"),
        (7.5, "C1", "B2"),
        (6.5, "B2", "B1"),
        (5.0, "B1", "A2"),
        (4.0, "A2", "A1"),
    ];
    let thresholds: Vec<f64> = CEFR_LADDER.thresholds().collect();
    assert_eq!(thresholds, vec![8.5, 7.5, 6.5, 5.0, 4.0]);

    for (threshold, at, below) in expected {
        assert_eq!(cefr(threshold).level, at, "at {}", threshold);
        assert_eq!(cefr(threshold - EPSILON).level, below, "below {}", threshold);
    }
}

#[test]
fn test_bands_are_monotonic() {
    let mut previous = performance_level(-1.0);
    let mut score = -1.0;
    while score <= 10.0 {
        let tier = performance_level(score);
        // Tier ordering is highest first, so rising scores never move down the list
        assert!(tier <= previous, "tier dropped at {}", score);
        previous = tier;
        score += 0.01;
    }
}

#[test]
fn test_pronunciation_and_grammar_texts_differ_per_tier() {
    for score in [9.0, 8.0, 7.0, 6.0, 5.0, 1.0] {
        assert_ne!(feedback(score, "pronunciation"), feedback(score, "grammar"));
    }
}

#[test]
fn test_unknown_dimension_never_fails() {
    for score in [9.0, 8.0, 7.0, 6.0, 5.0, 1.0, -2.0, f64::NAN] {
        assert_eq!(feedback(score, "unknown"), feedback(score, "overall"));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for score in [0.0, 4.5, 6.5, 7.8, 8.5] {
        assert_eq!(band(score), band(score));
        assert_eq!(cefr(score), cefr(score));
        assert_eq!(feedback(score, "fluency"), feedback(score, "fluency"));
    }
}
