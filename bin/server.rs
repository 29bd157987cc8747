// TDD Katas - Greeting Server
// Shows that the `greet` output sink can back an HTTP response

use anyhow::{Context, Result};
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Router,
};
use clap::Parser;
use tdd_katas::greet;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Name greeted on every request
const GREETED_NAME: &str = "world";

#[derive(Parser)]
#[command(name = "katas-server")]
#[command(version, about = "Answer every HTTP request with a greeting", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "KATAS_ADDR", default_value = "0.0.0.0:5000")]
    addr: String,
}

// ============================================================================
// Handler
// ============================================================================

/// Any method, any path - writes the greeting into the response body
async fn greet_handler() -> impl IntoResponse {
    let mut body = Vec::new();

    match greet(&mut body, GREETED_NAME) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Error writing greeting: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn app() -> Router {
    Router::new()
        .fallback(greet_handler)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", args.addr))?;

    info!("Greeting server running on http://{}", args.addr);
    info!("Press Ctrl+C to stop");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
    }
}

// ============================================================================
// TESTS
// ============================================================================
