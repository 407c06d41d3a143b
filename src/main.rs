//! Readthrough - a read-through HTTP response cache layer
//!
//! Serves the demo course-catalog API with the cache middleware attached.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readthrough::store::{MemoryStore, RedisStore, SharedStore};
use readthrough::{create_router, spawn_cleanup_task, AppState, Config};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the store backend (Redis, or in-memory fallback)
/// 4. Start the TTL sweeper when the memory backend is active
/// 5. Create the Axum router with the cache middleware wired in
/// 6. Start the HTTP server on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readthrough=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting readthrough cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, port={}, cleanup_interval={}s, backend={}",
        config.default_ttl,
        config.server_port,
        config.cleanup_interval,
        if config.redis_url.is_some() {
            "redis"
        } else {
            "memory"
        }
    );

    // Connect the store backend. The cache is best-effort, so a Redis
    // connection failure downgrades to the memory backend instead of
    // refusing to serve.
    let (store, cleanup_handle): (SharedStore, Option<JoinHandle<()>>) = match &config.redis_url {
        Some(url) => match RedisStore::connect(url).await {
            Ok(redis) => {
                info!("Connected to Redis backend");
                (Arc::new(redis), None)
            }
            Err(err) => {
                warn!(error = %err, "Redis unavailable, falling back to in-memory store");
                memory_backend(config.cleanup_interval)
            }
        },
        None => memory_backend(config.cleanup_interval),
    };

    let state = AppState::new(store, config.default_ttl);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the in-memory backend with its TTL sweeper.
fn memory_backend(cleanup_interval: u64) -> (SharedStore, Option<JoinHandle<()>>) {
    let memory = Arc::new(MemoryStore::new());
    let handle = spawn_cleanup_task(memory.clone(), cleanup_interval);
    (memory, Some(handle))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Sweeper task aborted");
    }
}
