mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn department_crud_round() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Missing name
    let res = client
        .post(format!("{}/api/departments", server.base_url))
        .json(&json!({ "code": common::unique_code("D") }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let code = common::unique_code("D");
    let res = client
        .post(format!("{}/api/departments", server.base_url))
        .json(&json!({ "code": code, "name": format!("Dept {code}") }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    let id = body.pointer("/data/id").and_then(Value::as_i64).unwrap();

    // Duplicate code conflicts
    let res = client
        .post(format!("{}/api/departments", server.base_url))
        .json(&json!({ "code": code, "name": "Other name" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Partial update leaves omitted fields alone
    let res = client
        .put(format!("{}/api/departments/{}", server.base_url, id))
        .json(&json!({ "description": "science wing" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body.pointer("/data/description").unwrap(), "science wing");
    assert_eq!(body.pointer("/data/code").and_then(Value::as_str).unwrap(), code);

    // Delete, then the record is gone
    let res = client
        .delete(format!("{}/api/departments/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/departments/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_is_restricted_while_subjects_reference() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let department_id = common::create_department(
        &server.base_url,
        &format!("Restricted Dept {}", common::unique_code("R")),
    )
    .await?;

    let code = common::unique_code("R");
    let res = client
        .post(format!("{}/api/subjects", server.base_url))
        .json(&json!({
            "code": code,
            "name": format!("restricted subject {code}"),
            "departmentId": department_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // The FK restrict policy blocks the delete
    let res = client
        .delete(format!("{}/api/departments/{}", server.base_url, department_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // The department is still there
    let res = client
        .get(format!("{}/api/departments/{}", server.base_url, department_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn invalid_department_id_is_rejected() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for (method, path) in [
        ("GET", "/api/departments/abc"),
        ("DELETE", "/api/departments/abc"),
    ] {
        let req = match method {
            "GET" => client.get(format!("{}{}", server.base_url, path)),
            _ => client.delete(format!("{}{}", server.base_url, path)),
        };
        let res = req.send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{} {}", method, path);
    }

    Ok(())
}
