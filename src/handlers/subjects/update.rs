use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_subject_id, reload};
use crate::error::ApiError;
use crate::handlers::{coerce_id, AppState};
use crate::store::departments;
use crate::store::subjects::{self, SubjectChanges};

/// Explicit partial update: an omitted field stays untouched, a present
/// field is applied as given - including an explicit empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department_id: Option<Value>,
}

/// PUT /api/subjects/:id - apply supplied fields to one subject
pub async fn subject_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSubjectRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_subject_id(&id)?;

    let pool = state.store.pool();
    if !subjects::exists(pool, id).await? {
        return Err(ApiError::not_found("Subject not found"));
    }

    let mut changes = SubjectChanges {
        code: body.code,
        name: body.name,
        description: body.description,
        department_id: None,
    };

    if let Some(department_ref) = body.department_id.filter(|v| !v.is_null()) {
        let department_id = coerce_id(&department_ref)
            .ok_or_else(|| ApiError::bad_request("Invalid department ID"))?;

        if !departments::exists(pool, department_id).await? {
            return Err(ApiError::bad_request(format!(
                "Department with ID {department_id} does not exist"
            )));
        }
        changes.department_id = Some(department_id);
    }

    if changes.is_empty() {
        return Err(ApiError::bad_request("No update data provided"));
    }

    subjects::update(pool, id, &changes).await?;

    let subject = reload(pool, id).await?;
    Ok(Json(json!({
        "message": "Subject updated successfully",
        "data": subject
    })))
}
