//! Admin client: adapts generic list/get/create/update/delete calls to the
//! REST shape the API serves, translating list params into query strings and
//! unwrapping the `{data, pagination}` envelope back into records.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Envelope(String),
}

/// Generic list parameters, mapped onto `page`, `limit`, `search`, and
/// `department` query parameters.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub department: Option<String>,
}

/// One unwrapped page of records plus the totals the envelope carried.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub records: Vec<Value>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource)
    }

    fn record_url(&self, resource: &str, id: i32) -> String {
        format!("{}/api/{}/{}", self.base_url, resource, id)
    }

    pub async fn get_list(
        &self,
        resource: &str,
        params: &ListParams,
    ) -> Result<ListPage, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(page) = params.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = &params.search {
            query.push(("search", search.clone()));
        }
        if let Some(department) = &params.department {
            query.push(("department", department.clone()));
        }

        let response = self
            .http
            .get(self.collection_url(resource))
            .query(&query)
            .send()
            .await?;
        let body = read_body(response).await?;
        unwrap_list(body)
    }

    pub async fn get_one(&self, resource: &str, id: i32) -> Result<Value, ClientError> {
        let response = self.http.get(self.record_url(resource, id)).send().await?;
        let body = read_body(response).await?;
        unwrap_record(body)
    }

    pub async fn create(&self, resource: &str, record: &Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(self.collection_url(resource))
            .json(record)
            .send()
            .await?;
        let body = read_body(response).await?;
        unwrap_record(body)
    }

    pub async fn update(
        &self,
        resource: &str,
        id: i32,
        changes: &Value,
    ) -> Result<Value, ClientError> {
        let response = self
            .http
            .put(self.record_url(resource, id))
            .json(changes)
            .send()
            .await?;
        let body = read_body(response).await?;
        unwrap_record(body)
    }

    pub async fn delete(&self, resource: &str, id: i32) -> Result<(), ClientError> {
        let response = self.http.delete(self.record_url(resource, id)).send().await?;
        read_body(response).await?;
        Ok(())
    }
}

/// Parse the response body, surfacing the API's `error` message on non-2xx.
async fn read_body(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(body)
}

fn unwrap_list(body: Value) -> Result<ListPage, ClientError> {
    let records = body
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| ClientError::Envelope("missing data array".to_string()))?;
    let pagination = body
        .get("pagination")
        .ok_or_else(|| ClientError::Envelope("missing pagination".to_string()))?;

    let field = |name: &str| -> Result<i64, ClientError> {
        pagination
            .get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| ClientError::Envelope(format!("missing pagination.{name}")))
    };

    Ok(ListPage {
        records,
        total: field("total")?,
        page: field("page")?,
        total_pages: field("totalPages")?,
    })
}

fn unwrap_record(body: Value) -> Result<Value, ClientError> {
    body.get("data")
        .cloned()
        .ok_or_else(|| ClientError::Envelope("missing data field".to_string()))
}
