mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::department_create;
pub use delete::department_delete;
pub use list::department_list;
pub use show::department_show;
pub use update::department_update;

use sqlx::PgPool;

use crate::error::ApiError;
use crate::store::departments;
use crate::store::models::Department;

pub(crate) fn parse_department_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request("Invalid department ID"))
}

pub(crate) async fn reload(pool: &PgPool, id: i32) -> Result<Department, ApiError> {
    departments::fetch(pool, id)
        .await?
        .ok_or_else(|| ApiError::internal_server_error("Failed to load department after write"))
}
