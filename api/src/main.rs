use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use dotenv::dotenv;
use tower_http::cors::CorsLayer;

use api::config::AppConfig;
use api::notifier::{EmailNotifier, LeadNotifier};
use api::observability::Observability;
use api::routes;
use api::state::AppState;
use store::{ContentStoreClient, LeadStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let obs = Observability::init()?;

    let config = AppConfig::from_env()?;
    tracing::info!(
        environment = ?config.environment,
        dataset = %config.store.dataset,
        "configuration loaded"
    );

    let store_configured = config.store.has_write_token();
    if !store_configured {
        tracing::warn!("CONTENT_STORE_WRITE_TOKEN is not set; lead writes will fail until it is");
    }

    let store_client: Arc<dyn LeadStore> = Arc::new(ContentStoreClient::new(config.store.clone())?);

    let notifier: Option<Arc<dyn LeadNotifier>> = match config.notifier.clone() {
        Some(notifier_config) => {
            tracing::info!(to = %notifier_config.to_email, "staff email notifications enabled");
            Some(Arc::new(EmailNotifier::new(notifier_config)))
        }
        None => {
            tracing::info!("staff email notifications disabled (NOTIFY_* not set)");
            None
        }
    };

    let state = AppState::new(
        store_client,
        notifier,
        config.environment,
        obs.registry,
        store_configured,
    );

    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(&config.server.allowed_origin)?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = routes::app(state).layer(cors);

    let addr = config.server.bind_addr;
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
