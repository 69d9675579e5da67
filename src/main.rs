//! FinalTap server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use finaltap::adapters::http::{app_router, LedgerAppState};
use finaltap::adapters::{provider_from_config, AiLongevityPredictor};
use finaltap::application::{FlowController, QuoteRotator};
use finaltap::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let provider = provider_from_config(&config.ai)?;
    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider ready");

    let predictor = Arc::new(AiLongevityPredictor::new(provider));
    let state = LedgerAppState::new(
        Arc::new(FlowController::new(predictor)),
        Arc::new(QuoteRotator::start()),
    );
    let app = app_router(state.clone(), &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "FinalTap listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.quotes.stop();
    tracing::info!("FinalTap stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
