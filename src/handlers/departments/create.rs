use axum::extract::State;
use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde::Deserialize;

use super::reload;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::departments::{self, NewDepartment};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /api/departments - create a department
///
/// Duplicate codes are caught by the unique constraint and reported as 409.
pub async fn department_create(
    State(state): State<AppState>,
    Json(body): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = body.code.filter(|s| !s.is_empty());
    let name = body.name.filter(|s| !s.is_empty());

    let (code, name) = match (code, name) {
        (Some(code), Some(name)) => (code, name),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: code and name are required",
            ))
        }
    };

    let pool = state.store.pool();
    let new_department = NewDepartment {
        code,
        name,
        description: body.description.filter(|s| !s.is_empty()),
    };
    let id = departments::insert(pool, &new_department).await?;

    let department = reload(pool, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Department created successfully",
            "data": department
        })),
    ))
}
