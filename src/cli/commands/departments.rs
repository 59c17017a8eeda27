use clap::Subcommand;
use serde_json::{json, Map, Value};

use crate::cli::{utils, OutputFormat};
use crate::client::{AdminClient, ListParams};

#[derive(Subcommand)]
pub enum DepartmentCommands {
    #[command(about = "List departments with optional search and paging")]
    List {
        #[arg(long, help = "Match department name or code (case-insensitive contains)")]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },

    #[command(about = "Show a single department")]
    Show {
        #[arg(help = "Department ID")]
        id: i32,
    },

    #[command(about = "Create a department")]
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },

    #[command(about = "Update a department (only supplied fields change)")]
    Update {
        #[arg(help = "Department ID")]
        id: i32,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    #[command(about = "Delete a department (fails while subjects reference it)")]
    Delete {
        #[arg(help = "Department ID")]
        id: i32,
    },
}

pub async fn handle(
    cmd: DepartmentCommands,
    client: &AdminClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        DepartmentCommands::List { search, page, limit } => {
            let params = ListParams { page, limit, search, department: None };
            let result = client.get_list("departments", &params).await?;
            utils::output_list(&output_format, &result)
        }
        DepartmentCommands::Show { id } => {
            let record = client.get_one("departments", id).await?;
            utils::output_record(&output_format, "Department", &record)
        }
        DepartmentCommands::Create { code, name, description } => {
            let mut body = json!({ "code": code, "name": name });
            if let Some(description) = description {
                body["description"] = json!(description);
            }
            let record = client.create("departments", &body).await?;
            utils::output_record(&output_format, "Department created", &record)
        }
        DepartmentCommands::Update { id, code, name, description } => {
            let mut fields = Map::new();
            if let Some(code) = code {
                fields.insert("code".to_string(), json!(code));
            }
            if let Some(name) = name {
                fields.insert("name".to_string(), json!(name));
            }
            if let Some(description) = description {
                fields.insert("description".to_string(), json!(description));
            }
            let record = client.update("departments", id, &Value::Object(fields)).await?;
            utils::output_record(&output_format, "Department updated", &record)
        }
        DepartmentCommands::Delete { id } => {
            client.delete("departments", id).await?;
            utils::output_success(&output_format, "Department deleted")
        }
    }
}
