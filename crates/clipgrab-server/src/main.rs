use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::AppConfig;

mod api;
mod config;

#[derive(Parser)]
#[command(name = "clipgrab")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Extract one page and print the result as JSON
    Extract { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind } => serve(bind).await,
        Command::Extract { url } => extract(&url).await,
    }
}

async fn serve(bind: Option<String>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(bind) = bind {
        config.bind_address = bind;
    }

    let state = AppState::from_config(&config)?;
    let app = api::router(state);

    let addr: SocketAddr = config.bind_address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn extract(url: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    let extractor = config.build_extractor()?;

    let result = extractor.extract(url).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
