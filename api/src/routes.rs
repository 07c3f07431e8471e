use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, metrics, metrics_handler, state::AppState};

pub fn contact_routes() -> Router<AppState> {
    Router::new().route(
        "/api/contact",
        post(handlers::submit_contact).fallback(handlers::method_not_allowed),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

pub fn observability_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler::metrics_endpoint))
}

/// Full application router; the binary layers CORS on top of this.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(contact_routes())
        .merge(health_routes())
        .merge(observability_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    metrics::observe_http(method.as_str(), uri.path(), status, elapsed.as_secs_f64());
    tracing::info!("{method} {uri} {status} {}ms", elapsed.as_millis());

    response
}
