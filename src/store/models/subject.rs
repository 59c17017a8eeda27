use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::department::Department;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i32,
    pub code: String,
    pub department_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Subject denormalized with its owning department, as returned by every
/// subjects endpoint. The department side comes from a left join, so it can
/// be absent.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectWithDepartment {
    #[serde(flatten)]
    pub subject: Subject,
    pub department: Option<Department>,
}

// Built from rows selecting subject columns plus department columns aliased
// with a dept_ prefix (see store::subjects::JOINED_COLUMNS).
impl<'r> FromRow<'r, PgRow> for SubjectWithDepartment {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let subject = Subject {
            id: row.try_get("id")?,
            code: row.try_get("code")?,
            department_id: row.try_get("department_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        };

        let department = match row.try_get::<Option<i32>, _>("dept_id")? {
            Some(id) => Some(Department {
                id,
                code: row.try_get("dept_code")?,
                name: row.try_get("dept_name")?,
                description: row.try_get("dept_description")?,
                created_at: row.try_get("dept_created_at")?,
                updated_at: row.try_get("dept_updated_at")?,
            }),
            None => None,
        };

        Ok(Self { subject, department })
    }
}
