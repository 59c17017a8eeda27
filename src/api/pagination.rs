use serde::{Deserialize, Serialize};

/// Raw list query string. Page and limit arrive as strings so that
/// non-numeric values can be clamped instead of rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Sanitized page window. Invalid input never fails a list request: absent
/// values take the defaults, anything non-numeric or below 1 clamps to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

impl PageParams {
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: clamp(page, DEFAULT_PAGE),
            limit: clamp(limit, DEFAULT_LIMIT),
        }
    }

    // Saturating: page and limit are client-controlled, and a huge-but-valid
    // number must still yield an empty page, not an overflow.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn clamp(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None => default,
        Some(s) => s.trim().parse::<i64>().map(|n| n.max(1)).unwrap_or(1),
    }
}

/// Pagination metadata returned alongside every list page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(params: &PageParams, total: i64) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            total,
            total_pages: total.saturating_add(params.limit - 1) / params.limit,
        }
    }
}

/// The `{data, pagination}` envelope wrapping list responses.
#[derive(Debug, Serialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Treat absent and empty filter values alike: no constraint.
pub fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
