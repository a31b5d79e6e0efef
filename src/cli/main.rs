use clap::{Parser, Subcommand};
use disaster_triage::{config::AnalysisConfig, AppError, AnalysisEngine};
use reqwest::Client;
use serde_json::json;
use std::error::Error;

#[derive(Parser)]
#[command(name = "disaster-triage-cli")]
#[command(about = "Disaster Triage CLI", long_about = None)]
struct Cli {
    #[arg(short, long, env = "DISASTER_TRIAGE_ENDPOINT", default_value = "http://localhost:5000")]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a situation description
    Analyze {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Train the models locally instead of calling the server
        #[arg(short, long)]
        offline: bool,
    },

    /// Check server health
    Health,

    /// Describe the server's trained models
    Models,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Analyze { text, offline: true } => {
            let engine = AnalysisEngine::train(&AnalysisConfig::default())?;
            let body = match engine.analyze(&text) {
                Ok(assessment) => serde_json::to_value(assessment)?,
                Err(AppError::Validation(message)) => json!({ "error": message }),
                Err(e) => return Err(e.into()),
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Analyze { text, offline: false } => {
            let response = client
                .post(format!("{}/analyze", cli.endpoint))
                .json(&json!({ "text": text }))
                .send()
                .await?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Health => {
            let response = client
                .get(format!("{}/health", cli.endpoint))
                .send()
                .await?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Models => {
            let response = client
                .get(format!("{}/v1/models", cli.endpoint))
                .send()
                .await?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
