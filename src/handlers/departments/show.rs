use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::parse_department_id;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::departments;

/// GET /api/departments/:id
pub async fn department_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_department_id(&id)?;

    let department = departments::fetch(state.store.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;

    Ok(Json(json!({ "data": department })))
}
