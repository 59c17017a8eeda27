use clap::Subcommand;
use serde_json::{json, Map, Value};

use crate::cli::{utils, OutputFormat};
use crate::client::{AdminClient, ListParams};

#[derive(Subcommand)]
pub enum SubjectCommands {
    #[command(about = "List subjects with optional search, department filter, and paging")]
    List {
        #[arg(long, help = "Match subject name or code (case-insensitive contains)")]
        search: Option<String>,
        #[arg(long, help = "Match department name (case-insensitive)")]
        department: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },

    #[command(about = "Show a single subject")]
    Show {
        #[arg(help = "Subject ID")]
        id: i32,
    },

    #[command(about = "Create a subject")]
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "department-id")]
        department_id: i32,
    },

    #[command(about = "Update a subject (only supplied fields change)")]
    Update {
        #[arg(help = "Subject ID")]
        id: i32,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "department-id")]
        department_id: Option<i32>,
    },
}

pub async fn handle(
    cmd: SubjectCommands,
    client: &AdminClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        SubjectCommands::List { search, department, page, limit } => {
            let params = ListParams { page, limit, search, department };
            let result = client.get_list("subjects", &params).await?;
            utils::output_list(&output_format, &result)
        }
        SubjectCommands::Show { id } => {
            let record = client.get_one("subjects", id).await?;
            utils::output_record(&output_format, "Subject", &record)
        }
        SubjectCommands::Create { code, name, description, department_id } => {
            let mut body = json!({
                "code": code,
                "name": name,
                "departmentId": department_id,
            });
            if let Some(description) = description {
                body["description"] = json!(description);
            }
            let record = client.create("subjects", &body).await?;
            utils::output_record(&output_format, "Subject created", &record)
        }
        SubjectCommands::Update { id, code, name, description, department_id } => {
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
            if let Some(department_id) = department_id {
                fields.insert("departmentId".to_string(), json!(department_id));
            }
            let record = client.update("subjects", id, &Value::Object(fields)).await?;
            utils::output_record(&output_format, "Subject updated", &record)
        }
    }
}
