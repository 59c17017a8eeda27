use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::parse_department_id;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::departments;

/// DELETE /api/departments/:id
///
/// The FK restrict policy on subjects is the source of truth here: a
/// department still referenced by subjects fails as a 409 conflict.
pub async fn department_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_department_id(&id)?;

    let deleted = departments::delete(state.store.pool(), id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Department not found"));
    }

    Ok(Json(json!({ "message": "Department deleted successfully" })))
}
