//! Department queries. Same list/insert/update shape as subjects, plus
//! delete, which the FK restrict policy turns into a conflict while any
//! subject still references the row.

use sqlx::PgPool;

use super::models::Department;
use super::{escape_like, StoreError};
use crate::api::pagination::PageParams;

#[derive(Debug, Default, Clone)]
pub struct DepartmentFilter {
    /// Case-insensitive containment match against department name or code.
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Default, Clone)]
pub struct DepartmentChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DepartmentChanges {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.description.is_none()
    }
}

fn filter_sql(filter: &DepartmentFilter) -> (String, Vec<String>) {
    match &filter.search {
        Some(search) => {
            let pattern = format!("%{}%", escape_like(search));
            (" WHERE (name ILIKE $1 OR code ILIKE $1)".to_string(), vec![pattern])
        }
        None => (String::new(), Vec::new()),
    }
}

pub async fn list(
    pool: &PgPool,
    filter: &DepartmentFilter,
    params: &PageParams,
) -> Result<(Vec<Department>, i64), StoreError> {
    let (where_sql, binds) = filter_sql(filter);

    let count_sql = format!("SELECT COUNT(*) FROM departments{where_sql}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for bind in &binds {
        count_query = count_query.bind(bind);
    }
    let total = count_query.fetch_one(pool).await?;

    let data_sql = format!(
        "SELECT id, code, name, description, created_at, updated_at FROM departments{where_sql} \
         ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
        binds.len() + 1,
        binds.len() + 2
    );
    let mut data_query = sqlx::query_as::<_, Department>(&data_sql);
    for bind in &binds {
        data_query = data_query.bind(bind);
    }
    let rows = data_query
        .bind(params.limit)
        .bind(params.offset())
        .fetch_all(pool)
        .await?;

    Ok((rows, total))
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<Department>, StoreError> {
    let row = sqlx::query_as::<_, Department>(
        "SELECT id, code, name, description, created_at, updated_at \
         FROM departments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
    let found =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

pub async fn insert(pool: &PgPool, department: &NewDepartment) -> Result<i32, StoreError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO departments (code, name, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&department.code)
    .bind(&department.name)
    .bind(&department.description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    changes: &DepartmentChanges,
) -> Result<(), StoreError> {
    let mut builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE departments SET updated_at = now()");
    if let Some(code) = &changes.code {
        builder.push(", code = ").push_bind(code);
    }
    if let Some(name) = &changes.name {
        builder.push(", name = ").push_bind(name);
    }
    if let Some(description) = &changes.description {
        builder.push(", description = ").push_bind(description);
    }
    builder.push(" WHERE id = ").push_bind(id);

    builder.build().execute(pool).await?;
    Ok(())
}

/// Delete one department. Referencing subjects make this fail with a
/// `ForeignKeyViolation` (the restrict policy is the source of truth).
pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_builds_single_contains_pattern() {
        let filter = DepartmentFilter { search: Some("sci".to_string()) };
        let (clause, binds) = filter_sql(&filter);
        assert_eq!(clause, " WHERE (name ILIKE $1 OR code ILIKE $1)");
        assert_eq!(binds, vec!["%sci%".to_string()]);
    }

    #[test]
    fn absent_search_is_unconstrained() {
        let (clause, binds) = filter_sql(&DepartmentFilter::default());
        assert!(clause.is_empty());
        assert!(binds.is_empty());
    }
}
