pub mod departments;
pub mod subjects;

use axum::extract::State;
use axum::{response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::store::Store;

/// Shared handler state: the explicitly constructed store handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Coerce a JSON id reference (number or numeric string) to an integer id.
/// Mirrors the lenient parsing the admin panel relies on when it posts
/// `departmentId` as a string.
pub(crate) fn coerce_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Classroom API",
        "version": version,
        "description": "Classroom management admin backend",
        "endpoints": {
            "health": "/health",
            "subjects": "/api/subjects[/:id]",
            "departments": "/api/departments[/:id]",
        }
    }))
}

/// GET /health - liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_id(&json!(5)), Some(5));
        assert_eq!(coerce_id(&json!("12")), Some(12));
        assert_eq!(coerce_id(&json!(" 7 ")), Some(7));
    }

    #[test]
    fn rejects_non_numeric_references() {
        assert_eq!(coerce_id(&json!("abc")), None);
        assert_eq!(coerce_id(&json!(2.5)), None);
        assert_eq!(coerce_id(&json!(null)), None);
        assert_eq!(coerce_id(&json!([1])), None);
        assert_eq!(coerce_id(&json!(i64::MAX)), None);
    }
}
