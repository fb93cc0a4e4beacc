mod catalog;
mod codegen;
mod feedback;
mod llm;
mod models;
mod runner;
mod web;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "optiklink-docs")]
#[command(about = "OptikLink API Documentation Backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation API server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Where feedback rows are persisted
        #[arg(long, default_value = "data/feedback.json")]
        feedback: PathBuf,
    },
    /// Export the endpoint catalog as a JSON snapshot
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, feedback } => {
            println!("Starting documentation server on port {}...", port);
            web::run_server(port, feedback).await?;
        }
        Commands::Export { output } => {
            let catalog = catalog::Catalog::load();
            let export = catalog.export();

            let output_path = output.unwrap_or_else(|| PathBuf::from("data/catalog.json"));
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output_path, serde_json::to_string_pretty(&export)?)?;
            println!(
                "Catalog exported to: {} ({} endpoints)",
                output_path.display(),
                export.endpoints.len()
            );
        }
    }

    Ok(())
}
