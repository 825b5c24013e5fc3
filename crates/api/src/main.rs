use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptline_api::config::ServerConfig;
use scriptline_api::router::build_app_router;
use scriptline_api::state::AppState;
use scriptline_db::CsvStorage;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "scriptline_api=debug,scriptline_db=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Dataset ---
    let storage = CsvStorage::new(config.data_dir.clone());
    let dataset = storage.load().await.unwrap_or_else(|e| {
        panic!(
            "Failed to load dataset from {}: {e}",
            storage.dir().display()
        )
    });

    // --- App state ---
    let state = AppState::new(dataset, storage, config.clone());
    let dataset = Arc::clone(&state.dataset);

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    let counts = dataset.read().await.counts();
    tracing::info!(
        conversations = counts.conversations,
        lines = counts.lines,
        "Graceful shutdown complete"
    );
}

/// Resolve once SIGINT or, on Unix, SIGTERM arrives.
async fn shutdown_signal() {
    let signal = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Ctrl-C listener failed");
            }
            "SIGINT"
        }
        () = terminate() => "SIGTERM",
    };
    tracing::info!(signal, "Termination signal received, draining connections");
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "SIGTERM listener unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
