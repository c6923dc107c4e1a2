//! Web front end for movie review voting.
//!
//! Routes:
//! - `GET /` lists every movie with its star rating and share of positive votes
//! - `GET /movie/{title}` shows one movie with its suggested reviews
//! - `POST /movie/{title}` classifies a review and records it as a vote
//! - `GET /health` liveness probe
//!
//! Unknown titles redirect to the listing and never create store entries.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use catalog::VoteStore;
use sentiment::SentimentModel;

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{ConfigError, ServerConfig};
pub use error::AppError;
pub use orchestrator::{MISSING_REVIEW_MESSAGE, MoviePage, ReviewForm, ReviewOrchestrator};
pub use state::AppState;

use routes::{health_handler, index_handler, movie_handler, review_handler};

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).init();
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/movie/:title", get(movie_handler).post(review_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Train the model, prepare the store and serve until Ctrl+C or SIGTERM
pub async fn start_server(config: ServerConfig) -> Result<()> {
    config.validate().context("Invalid server configuration")?;
    let address = config.socket_addr()?;

    info!("Training sentiment model...");
    let model = SentimentModel::train_default().context("Failed to train sentiment model")?;
    info!("Model ready with {} features", model.vocabulary_size());

    let orchestrator = ReviewOrchestrator::new(Arc::new(model), VoteStore::new(&config.votes_file));
    orchestrator.prepare_store().await?;

    let state = AppState::new(orchestrator).context("Failed to load page templates")?;
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;
    info!("Server running on {}", config.server_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
