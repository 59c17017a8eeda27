use axum::extract::{Query, State};
use axum::Json;

use crate::api::pagination::{none_if_empty, ListEnvelope, ListQuery, PageParams, Pagination};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::models::SubjectWithDepartment;
use crate::store::subjects::{self, SubjectFilter};

/// GET /api/subjects - paged list with optional search and department filters
pub async fn subject_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListEnvelope<SubjectWithDepartment>>, ApiError> {
    let params = PageParams::from_query(query.page.as_deref(), query.limit.as_deref());
    let filter = SubjectFilter {
        search: none_if_empty(query.search),
        department: none_if_empty(query.department),
    };

    let (data, total) = subjects::list(state.store.pool(), &filter, &params).await?;

    Ok(Json(ListEnvelope {
        data,
        pagination: Pagination::new(&params, total),
    }))
}
