//! Senti gateway server binary.
//!
//! Single HTTP entry point clients use instead of calling the AI
//! microservices directly: validates requests, forwards them upstream,
//! and relays responses and mapped errors.

use clap::Parser;
use tracing::info;
use url::Url;

use senti_api::config::GatewayConfig;

/// CLI arguments for the gateway server.
#[derive(Parser, Debug)]
#[command(name = "senti_gateway", about = "Senti web gateway server")]
struct Args {
    /// Port to listen on; overrides the `PORT` environment variable.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,senti_api=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = GatewayConfig::from_env();
    if let Some(port) = args.port {
        config.bind_addr = format!("0.0.0.0:{port}");
    }

    // Fail fast on unparseable upstream URLs.
    Url::parse(&config.ai_service_url)?;
    Url::parse(&config.conversational_ai_url)?;

    info!(
        ai_service_url = %config.ai_service_url,
        conversational_ai_url = %config.conversational_ai_url,
        "starting senti_gateway"
    );

    let state = senti_api::AppState::new(config.clone());
    let app = senti_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

/// Wait for ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
