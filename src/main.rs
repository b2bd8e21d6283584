//! Riddle HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use riddle::config::Config;
use riddle::embedding::{SentenceEmbedder, SentenceEmbedderConfig};
use riddle::gateway::{HandlerState, cors_layer, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Riddle similarity service starting"
    );

    let embedder_config = SentenceEmbedderConfig::from_config(&config);
    tracing::info!(
        source = %embedder_config.source,
        stub = embedder_config.testing_stub,
        "Loading embedding model..."
    );

    let embedder = tokio::task::spawn_blocking(move || SentenceEmbedder::load(embedder_config))
        .await??;
    tracing::info!(
        embedding_dim = embedder.embedding_dim(),
        max_seq_len = embedder.config().max_seq_len,
        stub = embedder.is_stub(),
        "Embedding model ready"
    );

    if config.allows_any_origin() {
        tracing::warn!(
            "CORS allows any origin with credentials; set RIDDLE_ALLOWED_ORIGINS in production"
        );
    }

    let state = HandlerState::from_embedder(Arc::new(embedder));
    let app = create_router_with_state(state, cors_layer(&config.allowed_origins));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Riddle shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let Ok(config) = Config::from_env() else {
        return 1;
    };
    let url = config.health_check_url();

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
