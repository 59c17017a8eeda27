use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::parse_subject_id;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::subjects;

/// GET /api/subjects/:id - show single subject joined with its department
pub async fn subject_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_subject_id(&id)?;

    let subject = subjects::fetch(state.store.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subject not found"))?;

    Ok(Json(json!({ "data": subject })))
}
