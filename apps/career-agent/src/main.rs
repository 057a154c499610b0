mod advisor;
mod agent;
mod cli;
mod config;
mod errors;
mod intake;
mod profile;
mod reference;
mod render;
mod storage;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::CareerAgent;
use crate::cli::{execute, Cli};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_resources_override(cli.resources.clone());

    // Logs go to stderr; stdout carries only the rendered result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting career-agent v{}", env!("CARGO_PKG_VERSION"));

    let agent = CareerAgent::load(&config.resources_dir)?;
    let rendered = execute(cli.command, &agent, cli.json)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
