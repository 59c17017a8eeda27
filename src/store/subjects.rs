//! Subject queries: filtered list, joined fetch, atomic insert, partial update.

use sqlx::PgPool;

use super::models::SubjectWithDepartment;
use super::{escape_like, StoreError};
use crate::api::pagination::PageParams;

/// Optional list filters, AND-combined when present.
#[derive(Debug, Default, Clone)]
pub struct SubjectFilter {
    /// Case-insensitive containment match against subject name or code.
    pub search: Option<String>,
    /// Case-insensitive match against the owning department's name.
    pub department: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub department_id: i32,
}

/// Partial update: `None` means the field was omitted and stays untouched.
/// A present value is applied verbatim, including empty strings.
#[derive(Debug, Default, Clone)]
pub struct SubjectChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
}

impl SubjectChanges {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.department_id.is_none()
    }
}

pub(crate) const JOINED_COLUMNS: &str = "s.id, s.code, s.department_id, s.name, s.description, s.created_at, s.updated_at, \
     d.id AS dept_id, d.code AS dept_code, d.name AS dept_name, d.description AS dept_description, \
     d.created_at AS dept_created_at, d.updated_at AS dept_updated_at";

const JOINED_FROM: &str =
    "FROM subjects s LEFT JOIN departments d ON d.id = s.department_id";

/// Compose the WHERE clause and its bind values from the present filters.
/// The left join keeps subjects with a dangling department in both the count
/// and the page query.
fn filter_sql(filter: &SubjectFilter) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();

    if let Some(search) = &filter.search {
        binds.push(format!("%{}%", escape_like(search)));
        let n = binds.len();
        conditions.push(format!("(s.name ILIKE ${n} OR s.code ILIKE ${n})"));
    }
    if let Some(department) = &filter.department {
        binds.push(department.clone());
        conditions.push(format!("d.name ILIKE ${}", binds.len()));
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };
    (clause, binds)
}

/// Count matching subjects, then fetch one page newest-created first.
pub async fn list(
    pool: &PgPool,
    filter: &SubjectFilter,
    params: &PageParams,
) -> Result<(Vec<SubjectWithDepartment>, i64), StoreError> {
    let (where_sql, binds) = filter_sql(filter);

    let count_sql = format!("SELECT COUNT(*) {JOINED_FROM}{where_sql}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for bind in &binds {
        count_query = count_query.bind(bind);
    }
    let total = count_query.fetch_one(pool).await?;

    let data_sql = format!(
        "SELECT {JOINED_COLUMNS} {JOINED_FROM}{where_sql} \
         ORDER BY s.created_at DESC LIMIT ${} OFFSET ${}",
        binds.len() + 1,
        binds.len() + 2
    );
    let mut data_query = sqlx::query_as::<_, SubjectWithDepartment>(&data_sql);
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

pub async fn fetch(
    pool: &PgPool,
    id: i32,
) -> Result<Option<SubjectWithDepartment>, StoreError> {
    let sql = format!("SELECT {JOINED_COLUMNS} {JOINED_FROM} WHERE s.id = $1");
    let row = sqlx::query_as::<_, SubjectWithDepartment>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
    let found = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM subjects WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

/// Insert directly and let the unique constraints arbitrate duplicates.
/// A concurrent create with the same code or name surfaces as a
/// `UniqueViolation`, never as a stale pre-check.
pub async fn insert(pool: &PgPool, subject: &NewSubject) -> Result<i32, StoreError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO subjects (code, name, description, department_id) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&subject.code)
    .bind(&subject.name)
    .bind(&subject.description)
    .bind(subject.department_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Apply present fields only; always refreshes `updated_at`.
pub async fn update(pool: &PgPool, id: i32, changes: &SubjectChanges) -> Result<(), StoreError> {
    let mut builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE subjects SET updated_at = now()");
    if let Some(code) = &changes.code {
        builder.push(", code = ").push_bind(code);
    }
    if let Some(name) = &changes.name {
        builder.push(", name = ").push_bind(name);
    }
    if let Some(description) = &changes.description {
        builder.push(", description = ").push_bind(description);
    }
    if let Some(department_id) = changes.department_id {
        builder.push(", department_id = ").push_bind(department_id);
    }
    builder.push(" WHERE id = ").push_bind(id);

    builder.build().execute(pool).await?;
    Ok(())
}
