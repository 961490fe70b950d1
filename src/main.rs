//! SMART starter entry point.
//!
//! Resolves configuration once, mounts the view (which issues the single
//! connect call through the SMART client agent), and serves the starter
//! page. The server starts serving immediately; until the handshake
//! resolves, the page renders its initial empty state.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_web::{router, StarterView};
use smart_session::{AgentConnector, LaunchSettings, SessionConnector, DEFAULT_AGENT_URL};

/// Main entry point for the SMART starter server.
///
/// # Environment Variables
/// - `STARTER_ADDR`: server address (default: "0.0.0.0:3000")
/// - `SMART_ISS`: issuer URL from the EHR launch
/// - `SMART_LAUNCH`: opaque launch token from the EHR launch
/// - `SMART_AGENT_URL`: SMART client agent connect endpoint
///   (default: "http://127.0.0.1:8445/connect")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the agent endpoint is not a valid URL,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
///
/// A missing or rejected launch context does NOT abort startup: the connect
/// call fails in the background, the error is logged, and the page renders
/// as though no session exists.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("app_web=info".parse()?)
                .add_directive("smart_session=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("STARTER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let agent_url = std::env::var("SMART_AGENT_URL").unwrap_or_else(|_| DEFAULT_AGENT_URL.into());
    let settings = LaunchSettings {
        iss: std::env::var("SMART_ISS").ok(),
        launch: std::env::var("SMART_LAUNCH").ok(),
    };

    tracing::info!("++ Starting SMART starter on {}", addr);

    let connector: Arc<dyn SessionConnector> =
        Arc::new(AgentConnector::new(agent_url.parse()?, settings)?);

    let view = StarterView::new();
    // Connect resolves in the background; the server serves the empty state
    // until it does.
    let _connect = view.mount(connector);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(view)).await?;

    Ok(())
}
