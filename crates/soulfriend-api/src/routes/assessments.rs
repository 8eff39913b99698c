use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use soulfriend_instruments::scoring::{self, AnswerSet, AssessmentResult};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSet,
}

#[derive(Serialize)]
pub struct ScoredAssessment {
    pub id: Uuid,
    pub scale: String,
    pub taken_at: jiff::Timestamp,
    pub result: AssessmentResult,
}

pub async fn score_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoredAssessment>, ApiError> {
    let config = state
        .config(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let errors = scoring::validate_answers(config, &request.answers);
    if !errors.is_empty() {
        let detail = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::BadRequest(detail));
    }

    let result = scoring::score(&request.answers, config);
    tracing::info!(
        scale = %config.scale,
        total_score = result.total_score,
        severity = %result.severity_level,
        "assessment scored"
    );

    Ok(Json(ScoredAssessment {
        id: Uuid::new_v4(),
        scale: config.scale.clone(),
        taken_at: jiff::Timestamp::now(),
        result,
    }))
}
