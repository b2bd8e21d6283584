//! Test server harness.

use riddle::config::Config;
use riddle::embedding::{SentenceEmbedder, SentenceEmbedderConfig, TextEmbedder};
use riddle::gateway::{HandlerState, cors_layer, create_router_with_state};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server backed by `embedder` on a local port.
pub async fn spawn_server_with<E: TextEmbedder>(
    embedder: E,
    config: TestServerConfig,
) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let state = HandlerState::from_embedder(Arc::new(embedder));
    let app = create_router_with_state(state, cors_layer(&config.allowed_origins));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Spawns a server with the deterministic stub embedder (no model files, no network).
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let embedder = SentenceEmbedder::load(SentenceEmbedderConfig::stub())
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    spawn_server_with(embedder, config).await
}

/// Spawns a server with the real model resolved from `RIDDLE_*` env vars.
///
/// Defaults to downloading `sentence-transformers/all-MiniLM-L6-v2` from the
/// Hugging Face hub, so it needs network access on first run.
pub async fn spawn_real_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let app_config =
        Config::from_env().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let embedder_config = SentenceEmbedderConfig::from_config(&app_config);

    let embedder = tokio::task::spawn_blocking(move || SentenceEmbedder::load(embedder_config))
        .await
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    spawn_server_with(embedder, config).await
}
