use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_department_id, reload};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::departments::{self, DepartmentChanges};

/// Explicit partial update; omitted fields stay untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT /api/departments/:id - apply supplied fields to one department
pub async fn department_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateDepartmentRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_department_id(&id)?;

    let pool = state.store.pool();
    if !departments::exists(pool, id).await? {
        return Err(ApiError::not_found("Department not found"));
    }

    let changes = DepartmentChanges {
        code: body.code,
        name: body.name,
        description: body.description,
    };
    if changes.is_empty() {
        return Err(ApiError::bad_request("No update data provided"));
    }

    departments::update(pool, id, &changes).await?;

    let department = reload(pool, id).await?;
    Ok(Json(json!({
        "message": "Department updated successfully",
        "data": department
    })))
}
