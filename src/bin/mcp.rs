//! DocBridge MCP server binary.
//!
//! Speaks MCP over stdin/stdout; stdout is reserved for the protocol
//! stream, so all diagnostics go to stderr.

use clap::Parser;
use docbridge::backend::DocumentEngineClient;
use docbridge::config::Config;
use docbridge::mcp::DocBridgeServer;
use miette::{IntoDiagnostic, Result};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docbridge")]
#[command(author, version, about = "Document Engine MCP server", long_about = None)]
struct Cli {
    /// Override the Document Engine URL (default: DOCBRIDGE_API_URL env)
    #[arg(long)]
    api_url: Option<String>,

    /// Override the Document Engine API token (default: DOCBRIDGE_API_TOKEN env)
    #[arg(long)]
    api_token: Option<String>,
}

/// Initialize tracing with env filter, writing to stderr only.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docbridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::resolve(cli.api_url, cli.api_token)?;
    let client = DocumentEngineClient::new(&config)?;

    info!("Bridging assistants to the Document Engine at {}", config.api_url);

    let service = DocBridgeServer::new(client)
        .serve(stdio())
        .await
        .into_diagnostic()?;
    service.waiting().await.into_diagnostic()?;

    Ok(())
}
