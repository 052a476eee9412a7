//! gitinsight: command-line dashboard for git commit analytics
//!
//! This binary queries a gitinsight API server for commit logs, contributor
//! rankings, branch lists and heatmaps, and prints the results.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use gitinsight::config::{Command, Config};
use gitinsight::handlers;
use gitinsight_client::ApiClient;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout stays clean for the JSON body
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ApiClient::new(&config.api_config());
    debug!(base_url = client.base_url(), profile = ?config.profile, "API client ready");

    let command = config.command.clone().unwrap_or(Command::Links);
    let output = handlers::execute(&client, &command, Local::now().fixed_offset())
        .await
        .with_context(|| format!("Failed to query {}", describe(&command)))?;

    println!("{}", output.render(config.lang)?);
    debug!(lang = %config.lang, "Done");
    Ok(())
}

fn describe(command: &Command) -> &'static str {
    match command {
        Command::Commits { .. } => "commit logs",
        Command::Contributors { .. } => "contributors",
        Command::Branches { .. } => "branches",
        Command::Ranking { .. } => "ranking",
        Command::Heatmap { .. } => "commit heatmap",
        Command::Period { .. } => "commit period statistics",
        Command::Links => "navigation",
    }
}
