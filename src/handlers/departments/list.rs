use axum::extract::{Query, State};
use axum::Json;

use crate::api::pagination::{none_if_empty, ListEnvelope, ListQuery, PageParams, Pagination};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::departments::{self, DepartmentFilter};
use crate::store::models::Department;

/// GET /api/departments - paged list with optional search filter
pub async fn department_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListEnvelope<Department>>, ApiError> {
    let params = PageParams::from_query(query.page.as_deref(), query.limit.as_deref());
    let filter = DepartmentFilter {
        search: none_if_empty(query.search),
    };

    let (data, total) = departments::list(state.store.pool(), &filter, &params).await?;

    Ok(Json(ListEnvelope {
        data,
        pagination: Pagination::new(&params, total),
    }))
}
