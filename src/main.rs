//! Program Pathfinder API server binary.

use std::sync::Arc;
use std::time::Duration;

use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use program_pathfinder::adapters::crm::{HttpInterestNotifier, LoggingInterestNotifier};
use program_pathfinder::adapters::http::{api_router, EligibilityHandlers};
use program_pathfinder::adapters::storage::InMemoryFlowStore;
use program_pathfinder::application::handlers::eligibility::{
    AdvanceFlowHandler, GetFlowHandler, GetRecommendationHandler, GoBackHandler,
    RegisterInterestHandler, ResetFlowHandler, StartFlowHandler, SubmitAnswerHandler,
};
use program_pathfinder::config::AppConfig;
use program_pathfinder::ports::{FlowStore, InterestNotifier};

const SWEEP_INTERVAL_SECS: u64 = 300;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    info!(
        environment = ?config.server.environment,
        "Starting program-pathfinder API server"
    );

    // Flow storage, with optional idle-flow expiry.
    let store = if config.server.flow_idle_ttl_secs > 0 {
        Arc::new(InMemoryFlowStore::with_idle_ttl(
            config.server.flow_idle_ttl_secs,
        ))
    } else {
        Arc::new(InMemoryFlowStore::new())
    };

    if config.server.flow_idle_ttl_secs > 0 {
        let sweep_store = Arc::clone(&store);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
            loop {
                ticker.tick().await;
                let removed = sweep_store.sweep_idle().await;
                if removed > 0 {
                    info!(removed, "Swept idle eligibility flows");
                }
            }
        });
    }

    let notifier: Arc<dyn InterestNotifier> = match &config.crm.endpoint {
        Some(endpoint) => {
            info!(endpoint = %endpoint, "Interest registrations will be forwarded to CRM");
            Arc::new(HttpInterestNotifier::new(
                endpoint.clone(),
                config.crm.delivery_timeout_secs,
            ))
        }
        None => {
            warn!("No CRM endpoint configured, interest registrations will only be logged");
            Arc::new(LoggingInterestNotifier::new())
        }
    };

    let flow_store: Arc<dyn FlowStore> = store;
    let handlers = EligibilityHandlers::new(
        Arc::new(StartFlowHandler::new(Arc::clone(&flow_store))),
        Arc::new(GetFlowHandler::new(Arc::clone(&flow_store))),
        Arc::new(SubmitAnswerHandler::new(Arc::clone(&flow_store))),
        Arc::new(AdvanceFlowHandler::new(Arc::clone(&flow_store))),
        Arc::new(GoBackHandler::new(Arc::clone(&flow_store))),
        Arc::new(ResetFlowHandler::new(Arc::clone(&flow_store))),
        Arc::new(GetRecommendationHandler::new(Arc::clone(&flow_store))),
        Arc::new(RegisterInterestHandler::new(
            Arc::clone(&flow_store),
            notifier,
        )),
    );

    let cors = build_cors_layer(&config)?;

    let app = api_router(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening for requests");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let methods = [Method::GET, Method::POST];
    let headers = [header::CONTENT_TYPE];

    if config.server.cors_allow_any() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers));
    }

    let origins = config
        .server
        .cors_origins_list()
        .into_iter()
        .map(|origin| HeaderValue::from_str(&origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers))
}
