//! # SpeakScore Common Library
//!
//! Shared code for the SpeakScore report service:
//! - Score classification (band, CEFR level, feedback text)
//! - Assessment record model and loading
//! - Enriched report assembly
//! - Configuration loading

pub mod band;
pub mod cefr;
pub mod config;
pub mod error;
pub mod feedback;
pub mod ladder;
pub mod record;
pub mod report;

pub use band::{band, performance_level, ScoreBand, Tier};
pub use cefr::{cefr, CefrInfo, CefrLevel};
pub use error::{Error, Result};
pub use feedback::{feedback, Dimension};
pub use record::{AssessmentRecord, Scores, Student};
pub use report::AssessmentReport;
