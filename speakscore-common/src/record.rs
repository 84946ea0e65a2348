//! Assessment record model and loading
//!
//! The record is read-only input. It is loaded fresh from disk on every call to
//! [`AssessmentRecord::load`]; nothing is cached and nothing is written back.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::Result;

/// Default upper end of the score scale
pub const DEFAULT_MAX_SCORE: f64 = 9.0;

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

/// Student identity and test metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    /// ISO 8601 date string, passed through unchanged
    pub test_date: String,
    pub test_type: String,
}

/// Per-dimension scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: f64,
    pub pronunciation: f64,
    pub fluency: f64,
    pub vocabulary: f64,
    pub grammar: f64,
}

/// One student's assessment as stored in the backing file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub student: Student,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    pub scores: Scores,
}

impl AssessmentRecord {
    /// Parse a record from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse the record at `path`
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Reading assessment record from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }
}
