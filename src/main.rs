use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use crewctl::config::{Config, ServiceConfig};
use crewctl::reporter::ConsoleReporter;
use crewctl::service::{ResearchClient, ResearchRequest};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crewctl")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("crewctl.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Research { topic, depth, url } => {
            handle_research(topic, depth.as_deref(), url.as_deref(), config).await
        }
        Commands::Health => handle_health(config).await,
        Commands::Models => handle_models(config).await,
    }
}

fn service_config(config: &Config, url: Option<&str>) -> ServiceConfig {
    let mut service = config.service.clone();
    if let Some(url) = url {
        service.base_url = url.to_string();
    }
    service
}

async fn handle_research(
    topic: &str,
    depth: Option<&str>,
    url: Option<&str>,
    config: &Config,
) -> Result<()> {
    info!("Research request: topic='{}', depth={:?}", topic, depth);

    let client =
        ResearchClient::with_reporter(service_config(config, url), Arc::new(ConsoleReporter))?;

    let mut request = ResearchRequest::new(topic);
    if let Some(depth) = depth {
        request = request.with_depth(depth);
    }

    let outcome = client.invoke(request).await?;
    if outcome.is_success() {
        println!("{}", outcome.into_text());
        Ok(())
    } else {
        eprintln!("{}", outcome.into_text().red());
        std::process::exit(1);
    }
}

async fn handle_health(config: &Config) -> Result<()> {
    info!("Checking service health");

    let client = ResearchClient::new(service_config(config, None))?;
    let health = client.health().await?;

    if health.is_healthy() {
        println!("{} {}", "healthy:".green(), client.base_url());
    } else {
        println!("{} {}", format!("{}:", health.status).red(), client.base_url());
    }

    if let Some(ollama) = &health.ollama {
        println!("  ollama: {}", ollama);
    }
    if let Some(model) = &health.configured_model {
        println!("  configured model: {}", model);
    }
    for model in &health.available_models {
        println!("  - {}", model);
    }
    if let Some(hint) = &health.hint {
        println!("  {}", hint.yellow());
    }

    Ok(())
}

async fn handle_models(config: &Config) -> Result<()> {
    info!("Listing available models");

    let client = ResearchClient::new(service_config(config, None))?;
    let models = client.models().await?;

    if models.is_empty() {
        println!("{}", "No models available".yellow());
    }
    for model in models {
        println!("{}", model);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
