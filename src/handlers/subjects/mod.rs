mod create;
mod list;
mod show;
mod update;

pub use create::subject_create;
pub use list::subject_list;
pub use show::subject_show;
pub use update::subject_update;

use sqlx::PgPool;

use crate::error::ApiError;
use crate::store::models::SubjectWithDepartment;
use crate::store::subjects;

pub(crate) fn parse_subject_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request("Invalid subject ID"))
}

/// Re-query the mutated row joined with its department, so mutation
/// responses carry the same denormalized shape as the list endpoint.
pub(crate) async fn reload(pool: &PgPool, id: i32) -> Result<SubjectWithDepartment, ApiError> {
    subjects::fetch(pool, id)
        .await?
        .ok_or_else(|| ApiError::internal_server_error("Failed to load subject after write"))
}
