use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use tradesim_execution::CostEstimator;
use tradesim_server::{AppState, ServerConfig, ServerError, build_router};
use tradesim_simulator::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tradesim-server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let _guard = init_tracing(&config.logging())?;

    let costs = config.cost_model()?;
    let estimator = CostEstimator::from_config(&costs)?;
    tracing::info!(models = ?estimator.model_names(), "Cost models loaded");

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Trade Simulator API listening");

    axum::serve(listener, build_router(AppState::new(estimator)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
