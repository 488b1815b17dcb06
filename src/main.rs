//! Subtype Quiz server binary.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use subtype_quiz::adapters::http::{app, QuizAppState};
use subtype_quiz::adapters::sheets::{
    GoogleSheetsConfig, GoogleSheetsGateway, InMemorySpreadsheet,
};
use subtype_quiz::config::{AppConfig, SheetsConfig, SheetsProvider};
use subtype_quiz::ports::{GatewayError, SpreadsheetGateway};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let gateway = build_gateway(&config.sheets).await?;
    let tables = config.sheets.table_names();

    match gateway.read_all_rows(&tables.questions).await {
        Ok(rows) => {
            tracing::info!(table = %tables.questions, questions = rows.len(), "Question table reachable")
        }
        Err(e) => {
            tracing::warn!(table = %tables.questions, error = %e, "Question table not reachable at startup")
        }
    }

    let state = QuizAppState::new(gateway, tables);
    let router = app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Installs the global subscriber: JSON lines in production, human-readable otherwise.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

async fn build_gateway(
    sheets: &SheetsConfig,
) -> Result<Arc<dyn SpreadsheetGateway>, Box<dyn std::error::Error>> {
    match sheets.provider {
        SheetsProvider::Google => {
            let (Some(spreadsheet_id), Some(token)) =
                (sheets.spreadsheet_id.clone(), sheets.access_token.clone())
            else {
                let missing = GatewayError::Configuration("Google Sheets credentials missing".into());
                return Err(missing.into());
            };
            let gateway_config = GoogleSheetsConfig::new(spreadsheet_id, token)
                .with_base_url(sheets.api_base_url.clone())
                .with_timeout(sheets.timeout());
            tracing::info!(base_url = %sheets.api_base_url, "Using Google Sheets gateway");
            Ok(Arc::new(GoogleSheetsGateway::new(gateway_config)?))
        }
        SheetsProvider::Memory => {
            let spreadsheet = match &sheets.seed_path {
                Some(path) => {
                    tracing::info!(seed = %path.display(), "Using in-memory spreadsheet");
                    InMemorySpreadsheet::from_json_file(path).await?
                }
                None => {
                    tracing::warn!("Using empty in-memory spreadsheet; every table read will fail");
                    InMemorySpreadsheet::new()
                }
            };
            Ok(Arc::new(spreadsheet))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
