use axum::extract::State;
use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use super::reload;
use crate::error::ApiError;
use crate::handlers::{coerce_id, AppState};
use crate::store::subjects::{self, NewSubject};
use crate::store::departments;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    // Arrives as a number or a numeric string depending on the client
    #[serde(default)]
    pub department_id: Option<Value>,
}

/// POST /api/subjects - create a subject
///
/// The insert runs without duplicate pre-checks; the unique constraints on
/// code and name arbitrate, so concurrent duplicates also come back as 409.
pub async fn subject_create(
    State(state): State<AppState>,
    Json(body): Json<CreateSubjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = body.code.filter(|s| !s.is_empty());
    let name = body.name.filter(|s| !s.is_empty());
    let department_ref = body.department_id.filter(|v| !v.is_null());

    let (code, name, department_ref) = match (code, name, department_ref) {
        (Some(code), Some(name), Some(department_ref)) => (code, name, department_ref),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: code, name, and departmentId are required",
            ))
        }
    };

    let department_id = coerce_id(&department_ref)
        .ok_or_else(|| ApiError::bad_request("departmentId must be a valid number"))?;

    let pool = state.store.pool();
    if !departments::exists(pool, department_id).await? {
        return Err(ApiError::bad_request(format!(
            "Department with ID {department_id} does not exist"
        )));
    }

    let new_subject = NewSubject {
        code,
        name,
        description: body.description.filter(|s| !s.is_empty()),
        department_id,
    };
    let id = subjects::insert(pool, &new_subject).await?;

    let subject = reload(pool, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Subject created successfully",
            "data": subject
        })),
    ))
}
