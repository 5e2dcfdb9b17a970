//! djr-rq (Request Relay) - Audience song request relay service
//!
//! Fronts a public song-request page: proxies catalog search to the iTunes
//! Search API and relays accepted requests into the DJ's Google Form.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use djr_common::config::resolve_form_url;
use djr_rq::services::{FormClient, ItunesClient};
use djr_rq::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "djr-rq", about = "DJ song request relay service")]
struct Args {
    /// Bind host
    #[arg(long, env = "DJR_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, env = "DJR_PORT", default_value_t = 5790)]
    port: u16,

    /// Google Form prefill URL (overrides environment and config file)
    #[arg(long)]
    form_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting DJR Request Relay (djr-rq) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Missing configuration only fails submit requests, so startup proceeds
    // with a warning rather than refusing to serve searches.
    let form_url = resolve_form_url(args.form_url.as_deref());
    match &form_url {
        Some(_) => info!("✓ Destination form URL configured"),
        None => warn!(
            "Destination form URL not configured; submissions will fail until \
             GOOGLE_FORM_URL or VITE_GOOGLE_FORM_URL is set"
        ),
    }

    let itunes = ItunesClient::new()?;
    let form = FormClient::new(form_url)?;

    // Create application state and router
    let state = AppState::new(itunes, form);
    let app = build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("djr-rq listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
