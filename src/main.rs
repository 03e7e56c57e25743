// src/main.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cv_analyzer::extract::extract_text;
use cv_analyzer::{start_web_server, AnalysisEngine, AnalyzerConfig};
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvscan", about = "Resume analysis service and CLI")]
struct Cli {
    /// Path to the analyzer configuration file.
    #[arg(long, global = true, default_value = "cvscan.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server.
    Serve {
        #[arg(long, env = "CVSCAN_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Analyze a local resume file and print the result as JSON.
    Analyze {
        file: PathBuf,
        /// Target job role, e.g. "ML Engineer".
        #[arg(long)]
        role: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cv_analyzer=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    let config = AnalyzerConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve { port: 8000 }) {
        Command::Serve { port } => {
            info!("Starting resume analysis service");
            start_web_server(config, port).await
        }
        Command::Analyze { file, role } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("resume")
                .to_string();

            let text = extract_text(&file_name, &bytes)?;
            let engine = AnalysisEngine::new(config);

            match engine.analyze(&text, &role, &file_name) {
                Ok(analysis) => {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                    Ok(())
                }
                Err(rejection) => {
                    println!("{}", serde_json::to_string_pretty(&rejection)?);
                    std::process::exit(1);
                }
            }
        }
    }
}
