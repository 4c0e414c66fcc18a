//! Pricelens MCP Server - Azure Retail Prices via Model Context Protocol
//!
//! This binary provides an MCP server that exposes Azure retail pricing
//! lookups to AI assistants.
//!
//! # Usage
//!
//! ## stdio transport (for Claude Desktop, local use)
//! ```bash
//! pricelens-mcp-server
//! ```
//!
//! ## HTTP transport (for remote hosting)
//! ```bash
//! pricelens-mcp-server --http --port 8080
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use pricelens_client::ClientConfig;
use pricelens_mcp::PricelensMcpServer;

/// Pricelens MCP Server - Azure Retail Prices
#[derive(Parser, Debug)]
#[command(name = "pricelens-mcp-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use HTTP transport instead of stdio (for remote hosting)
    #[arg(long)]
    http: bool,

    /// HTTP port (only used with --http)
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// HTTP host to bind to (only used with --http)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Override the pricing API endpoint (also via PRICELENS_API_URL)
    #[arg(long)]
    base_url: Option<Url>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        match &self.base_url {
            Some(url) => ClientConfig::with_base_url(url.clone()),
            None => ClientConfig::from_env(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pricelens_mcp=debug,pricelens_client=debug,rmcp=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pricelens_mcp=info,pricelens_client=info,rmcp=warn"))
    };

    // Only log to stderr for stdio transport to avoid corrupting the protocol
    if args.http {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = args.client_config();
    tracing::info!(endpoint = %config.base_url, "Starting Pricelens MCP Server");

    if args.http {
        run_http_server(config, &args.host, args.port).await
    } else {
        let server = PricelensMcpServer::with_config(config)?;
        run_stdio_server(server).await
    }
}

/// Run the server with stdio transport (for Claude Desktop)
async fn run_stdio_server(server: PricelensMcpServer) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    tracing::info!("Using stdio transport");

    let service = server.serve(stdio()).await?;

    tracing::info!("Pricelens MCP Server ready");
    tracing::info!(
        "Available tools: azure_get_service_prices, azure_compare_region_prices, \
         azure_search_sku_prices, azure_get_service_families, azure_calculate_savings_plan"
    );

    service.waiting().await?;

    Ok(())
}

/// Run the server with HTTP transport (for remote hosting)
#[cfg(feature = "http")]
async fn run_http_server(config: ClientConfig, host: &str, port: u16) -> anyhow::Result<()> {
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };
    use tower_http::cors::{Any, CorsLayer};

    tracing::info!("Using HTTP transport on {}:{}", host, port);

    let mcp_service = StreamableHttpService::new(
        move || {
            PricelensMcpServer::with_config(config.clone())
                .map_err(|e| std::io::Error::other(e.to_string()))
        },
        LocalSessionManager::default().into(),
        Default::default(),
    );

    // Configure CORS for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest_service("/mcp", mcp_service)
        .route("/health", axum::routing::get(health_check))
        .layer(cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Pricelens MCP Server listening on http://{}/mcp", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C handler");
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

/// Health check endpoint for HTTP transport
#[cfg(feature = "http")]
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback when HTTP feature is not enabled
#[cfg(not(feature = "http"))]
async fn run_http_server(_config: ClientConfig, _host: &str, _port: u16) -> anyhow::Result<()> {
    anyhow::bail!("HTTP transport not available. Rebuild with: cargo build --features http")
}
