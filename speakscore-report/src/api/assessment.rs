//! Assessment report endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use speakscore_common::{AssessmentRecord, AssessmentReport};
use tracing::{debug, error};

use crate::AppState;

/// GET /api/assessment
///
/// Reads the backing record, classifies every dimension and returns the
/// enriched report. Any failure to read or parse the record is a 500; no
/// partial payload is ever returned.
pub async fn get_assessment(
    State(state): State<AppState>,
) -> Result<Json<AssessmentReport>, AssessmentError> {
    let record = AssessmentRecord::load(&state.data_file)
        .await
        .map_err(AssessmentError::SourceUnavailable)?;

    let report = AssessmentReport::assemble(&record);
    debug!(
        "Assessment for {}: overall {} ({}, CEFR {})",
        report.student.name, report.scores.overall, report.score_band.band, report.cefr_level.level
    );

    Ok(Json(report))
}

/// Assessment API errors
#[derive(Debug)]
pub enum AssessmentError {
    /// Backing record missing, unreadable or malformed
    SourceUnavailable(speakscore_common::Error),
}

impl IntoResponse for AssessmentError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AssessmentError::SourceUnavailable(e) => {
                error!("Error reading assessment data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load assessment data",
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
