//! Feedback text lookup
//!
//! Two-level table: dimension name → tier → paragraph. Unknown dimension names
//! resolve to the "overall" row.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::band::{performance_level, Tier};

/// Score dimension reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Overall,
    Pronunciation,
    Fluency,
    Vocabulary,
    Grammar,
}

impl Dimension {
    /// The four skill dimensions (everything except overall)
    pub const SKILLS: [Dimension; 4] = [
        Dimension::Pronunciation,
        Dimension::Fluency,
        Dimension::Vocabulary,
        Dimension::Grammar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Overall => "overall",
            Dimension::Pronunciation => "pronunciation",
            Dimension::Fluency => "fluency",
            Dimension::Vocabulary => "vocabulary",
            Dimension::Grammar => "grammar",
        }
    }

    /// Parse a dimension name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "overall" => Some(Dimension::Overall),
            "pronunciation" => Some(Dimension::Pronunciation),
            "fluency" => Some(Dimension::Fluency),
            "vocabulary" => Some(Dimension::Vocabulary),
            "grammar" => Some(Dimension::Grammar),
            _ => None,
        }
    }
}

type TierText = HashMap<Tier, &'static str>;

fn row(texts: [&'static str; 6]) -> TierText {
    Tier::ALL.into_iter().zip(texts).collect()
}

static FEEDBACK: Lazy<HashMap<Dimension, TierText>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        Dimension::Pronunciation,
        row([
            "Demonstrates native-like pronunciation with excellent articulation, natural intonation, and stress patterns. Speech is effortlessly understood.",
            "Pronunciation is clear and accurate with only rare minor errors. Natural rhythm and intonation are well-maintained throughout.",
            "Generally clear pronunciation with occasional minor errors in complex words. Does not impede communication.",
            "Pronunciation is understandable but shows noticeable L1 influence. Some sounds may be mispronounced.",
            "Frequent pronunciation errors that sometimes cause listener strain. Basic words are usually clear.",
            "Pronunciation difficulties significantly affect intelligibility. Requires frequent repetition.",
        ]),
    );
    table.insert(
        Dimension::Fluency,
        row([
            "Speaks fluently and spontaneously with natural flow. Can express ideas effortlessly without noticeable searching for words.",
            "Speaks with ease and fluency. Only occasional hesitation when searching for precise expressions.",
            "Maintains flow of speech with some hesitation. Can link ideas coherently with minor pauses.",
            "Can keep going but pauses frequently to plan and correct. Speech may be slow but remains coherent.",
            "Noticeable hesitation and frequent pauses. May lose coherence in longer responses.",
            "Very slow, fragmented speech with long pauses. Difficult to follow extended responses.",
        ]),
    );
    table.insert(
        Dimension::Vocabulary,
        row([
            "Uses a wide range of vocabulary naturally and precisely. Employs idiomatic expressions and collocations effortlessly.",
            "Good command of broad vocabulary. Can vary formulation and use less common words appropriately.",
            "Adequate vocabulary for most topics. Occasional circumlocution when lacking specific words.",
            "Sufficient vocabulary for familiar topics but limitations evident in complex discussions.",
            "Basic vocabulary adequate for simple communication. Struggles with abstract or specialized topics.",
            "Very limited vocabulary restricts communication to basic needs and familiar situations.",
        ]),
    );
    table.insert(
        Dimension::Grammar,
        row([
            "Maintains consistent grammatical control of complex language. Errors are rare and difficult to spot.",
            "Good grammatical control. Errors are infrequent and do not cause misunderstanding.",
            "Generally accurate use of grammar. Some errors in complex structures but meaning remains clear.",
            "Reasonable accuracy in familiar contexts. Errors occur but basic meaning is usually conveyed.",
            "Limited range of structures. Frequent errors in complex sentences but simple structures are usually correct.",
            "Basic grammatical patterns only. Frequent errors may impede communication.",
        ]),
    );
    table.insert(
        Dimension::Overall,
        row([
            "Exceptional communicative competence. Can express ideas fluently, accurately, and with sophistication appropriate for any context.",
            "Strong communicative ability. Can handle complex language tasks with confidence and accuracy.",
            "Effective communication skills for most situations. Minor limitations in complex or unfamiliar contexts.",
            "Adequate communication for familiar topics. Can handle routine tasks but may struggle with complexity.",
            "Basic communication possible in predictable situations. Limited ability to elaborate or handle unexpected topics.",
            "Communication limited to very basic exchanges. Significant support may be needed.",
        ]),
    );
    table
});

/// Feedback paragraph for a known dimension and tier
pub fn feedback_for(dimension: Dimension, tier: Tier) -> &'static str {
    FEEDBACK
        .get(&dimension)
        .or_else(|| FEEDBACK.get(&Dimension::Overall))
        .and_then(|texts| texts.get(&tier))
        .copied()
        .unwrap_or_default()
}

/// Feedback paragraph for a score in the named dimension
///
/// Unrecognized dimension names use the overall row.
pub fn feedback(score: f64, dimension: &str) -> &'static str {
    let dimension = Dimension::parse(dimension).unwrap_or(Dimension::Overall);
    feedback_for(dimension, performance_level(score))
}
