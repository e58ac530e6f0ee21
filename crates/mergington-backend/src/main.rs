use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use mergington::errors::Report;
use mergington::log;

mod handlers;
mod routes;
mod seed;
mod services;

/// Shared state handed to every request handler.
pub struct AppState {
    pub roster: services::ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Builds the process-wide state, seeding the roster with the fixed
    /// activity list.
    pub fn new() -> Self {
        Self {
            roster: services::ActivityServiceInMemory::with_activities(seed::activities()),
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    // Seed the roster and set up the routes
    let state = Arc::new(AppState::new());
    let app = routes::build(state);

    // Setup the server
    let listener = TcpListener::bind(("127.0.0.1", 8000)).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Wait for the shutdown signal
    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
