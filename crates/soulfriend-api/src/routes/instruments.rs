use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use soulfriend_instruments::config::QuestionnaireConfig;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    scale: String,
    version: String,
    item_count: usize,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    let mut instruments: Vec<InstrumentSummary> = state
        .configs()
        .map(|config| InstrumentSummary {
            scale: config.scale.clone(),
            version: config.version.clone(),
            item_count: config.items.len(),
        })
        .collect();
    instruments.sort_by(|a, b| a.scale.cmp(&b.scale));
    Json(instruments)
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireConfig>, ApiError> {
    let config = state
        .config(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;
    Ok(Json(config.clone()))
}
