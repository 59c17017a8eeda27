mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_requires_fields_and_existing_department() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Missing required fields
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({ "code": common::unique_code("X") }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // departmentId not a number
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": common::unique_code("X"),
            "name": format!("bad dept ref {}", common::unique_code("X")),
            "departmentId": "abc",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Department does not exist; the row must not persist
    let code = common::unique_code("X");
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": code,
            "name": format!("orphan subject {}", code),
            "departmentId": 2_000_000_000,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/api/subjects?search={}", server.base_url, code))
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["pagination"]["total"], 0, "orphan row persisted: {}", body);

    Ok(())
}

#[tokio::test]
async fn duplicate_code_and_name_conflict() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let department_id = common::create_department(
        &server.base_url,
        &format!("Conflict Dept {}", common::unique_code("C")),
    )
    .await?;

    let code = common::unique_code("C");
    let name = format!("conflict subject {code}");
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({ "code": code, "name": name, "departmentId": department_id }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same code, fresh name
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": code,
            "name": format!("other {}", common::unique_code("C")),
            "departmentId": department_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Fresh code, same name
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": common::unique_code("C"),
            "name": name,
            "departmentId": department_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn show_validates_id_and_existence() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/subjects/abc", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/api/subjects/1999999999", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn update_applies_only_supplied_fields() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let department_id = common::create_department(
        &server.base_url,
        &format!("Update Dept {}", common::unique_code("U")),
    )
    .await?;

    let code = common::unique_code("U");
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": code,
            "name": format!("update subject {code}"),
            "description": "original description",
            "departmentId": department_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    let id = body.pointer("/data/id").and_then(Value::as_i64).unwrap();

    // Empty body has nothing to apply
    let res = client
        .put(format!("{}/api/subjects/{}", server.base_url, id))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown subject
    let res = client
        .put(format!("{}/api/subjects/1999999999", server.base_url))
        .json(&json!({ "name": "whatever" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // departmentId must reference an existing department
    let res = client
        .put(format!("{}/api/subjects/{}", server.base_url, id))
        .json(&json!({ "departmentId": 2_000_000_000 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // An explicitly supplied empty description is applied, an omitted code is not
    let res = client
        .put(format!("{}/api/subjects/{}", server.base_url, id))
        .json(&json!({ "description": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body.pointer("/data/description").unwrap(), "");
    assert_eq!(body.pointer("/data/code").and_then(Value::as_str).unwrap(), code);

    // Response payload carries the joined department like the list endpoint
    assert_eq!(
        body.pointer("/data/department/id").and_then(Value::as_i64),
        Some(department_id)
    );

    Ok(())
}
