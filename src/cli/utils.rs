use serde_json::Value;

use crate::cli::OutputFormat;
use crate::client::ListPage;

/// Output a mutation result in the appropriate format
pub fn output_record(
    output_format: &OutputFormat,
    message: &str,
    record: &Value,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let (Some(id), Some(code), Some(name)) = (
                record.get("id").and_then(Value::as_i64),
                record.get("code").and_then(Value::as_str),
                record.get("name").and_then(Value::as_str),
            ) {
                println!("  {} | {} | {}", id, code, name);
            }
        }
    }
    Ok(())
}

/// Output one unwrapped list page in the appropriate format
pub fn output_list(output_format: &OutputFormat, page: &ListPage) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "records": page.records,
                    "total": page.total,
                    "page": page.page,
                    "totalPages": page.total_pages,
                }))?
            );
        }
        OutputFormat::Text => {
            for record in &page.records {
                let id = record.get("id").and_then(Value::as_i64).unwrap_or_default();
                let code = record.get("code").and_then(Value::as_str).unwrap_or("-");
                let name = record.get("name").and_then(Value::as_str).unwrap_or("-");
                let department = record
                    .pointer("/department/name")
                    .and_then(Value::as_str)
                    .unwrap_or("");
                println!("{:>5} | {:<10} | {} {}", id, code, name, department);
            }
            println!("({} of {} records, page {}/{})", page.records.len(), page.total, page.page, page.total_pages);
        }
    }
    Ok(())
}

/// Output a plain success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "success": true,
                    "message": message
                }))?
            );
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}
