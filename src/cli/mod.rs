pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

use crate::client::AdminClient;

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Classroom CLI - admin client for the Classroom API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "API base URL (defaults to CLASSROOM_SERVER_URL or http://localhost:8000)"
    )]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Subject operations")]
    Subjects {
        #[command(subcommand)]
        cmd: commands::subjects::SubjectCommands,
    },

    #[command(about = "Department operations")]
    Departments {
        #[command(subcommand)]
        cmd: commands::departments::DepartmentCommands,
    },
}

#[derive(Debug, Clone)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let base_url = cli
        .server
        .clone()
        .or_else(|| std::env::var("CLASSROOM_SERVER_URL").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let client = AdminClient::new(base_url);

    match cli.command {
        Commands::Subjects { cmd } => commands::subjects::handle(cmd, &client, output_format).await,
        Commands::Departments { cmd } => {
            commands::departments::handle(cmd, &client, output_format).await
        }
    }
}
