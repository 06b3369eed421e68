mod analysis;
mod api;
mod config;
mod storage;

use crate::analysis::{OpenAiAnalyzer, SentimentAnalyzer};
use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::FeedbackStore;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Feedback API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Feedback file: {}", config.storage.feedback_path.display());
    info!("   - Analyzer enabled: {}", config.analyzer.enabled);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Initialize feedback storage
    let feedback_store = Arc::new(FeedbackStore::new(&config.storage.feedback_path));
    feedback_store.initialize().await?;
    info!("✅ Feedback storage ready at {}", feedback_store.path().display());

    // Initialize analyzer
    let analyzer: Option<Arc<dyn SentimentAnalyzer>> = if config.analyzer.enabled {
        let api_key = config.analyzer.api_key();
        if api_key.is_none() {
            warn!(
                "⚠️  {} is not set, feedback analysis will return placeholders",
                config.analyzer.api_key_env
            );
        }
        let analyzer = OpenAiAnalyzer::new(&config.analyzer, api_key)?;
        info!("🧠 Analyzer ready (model: {})", config.analyzer.model);
        Some(Arc::new(analyzer))
    } else {
        info!("🧠 Analyzer disabled");
        None
    };

    // Create application state
    let state = AppState {
        feedback_store,
        analyzer,
    };

    let app = api::router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /ping             - Health check");
    info!("   POST /feedback         - Submit feedback");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
