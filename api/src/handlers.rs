use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use shared::{LeadSource, NewLead};
use store::StoreError;

use crate::{
    error::ApiError,
    metrics,
    models::{ContactSubmission, SubmitResponse},
    state::AppState,
    validation::{sanitize_submission, validate_contact_form},
};

const THANK_YOU_MESSAGE: &str =
    "Thank you for contacting us! We'll get back to you within 24 hours.";
const HONEYPOT_MESSAGE: &str = "Thank you for contacting us! We'll get back to you soon.";

/// `POST /api/contact` — the contact form submission pipeline.
///
/// Step order is fixed: parse → honeypot → validate → capture metadata →
/// sanitize → persist → notify → respond. Validation failures never reach
/// the store; store failures are reclassified before they reach the wire.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    // Parse. A malformed body gets the generic failure response, with the
    // parser's message included only outside production.
    let Json(mut submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!(error = %rejection.body_text(), "contact body failed to parse");
            return ApiError::unexpected(state.environment, rejection.body_text()).into_response();
        }
    };

    // Honeypot gate. Bots get the same success shape a real submission
    // gets (minus the lead id) so they cannot tell they were filtered.
    if !submission.website.trim().is_empty() {
        tracing::warn!("honeypot field filled, dropping submission");
        metrics::BOT_REJECTIONS.inc();
        return (
            StatusCode::OK,
            Json(SubmitResponse {
                success: true,
                lead_id: None,
                message: HONEYPOT_MESSAGE.into(),
            }),
        )
            .into_response();
    }

    // Server-side validation is the trust boundary; the client's checks
    // are a UX convenience only.
    let outcome = validate_contact_form(&submission);
    if !outcome.is_valid() {
        tracing::warn!(fields = ?outcome.errors.keys().collect::<Vec<_>>(), "contact form validation failed");
        metrics::VALIDATION_REJECTIONS.inc();
        return ApiError::Validation(outcome.errors).into_response();
    }

    // Metadata capture never fails the request.
    let ip_address = client_ip(&headers);
    let user_agent = user_agent(&headers);

    sanitize_submission(&mut submission);

    let new_lead = NewLead {
        name: submission.name,
        email: submission.email,
        phone: submission.phone,
        service: submission.service,
        message: submission.message,
        source: LeadSource::Website,
        submitted_at: Utc::now(),
        ip_address: Some(ip_address),
        user_agent: Some(user_agent),
    };

    let created = match state.store.create_lead(new_lead).await {
        Ok(created) => created,
        Err(err @ StoreError::Configuration(_)) => {
            tracing::error!(error = %err, "lead not persisted: store misconfigured");
            metrics::LEAD_STORE_FAILURES
                .with_label_values(&["configuration"])
                .inc();
            return ApiError::Configuration.into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, "lead not persisted: store write failed");
            metrics::LEAD_STORE_FAILURES
                .with_label_values(&["persistence"])
                .inc();
            return ApiError::Persistence.into_response();
        }
    };

    metrics::LEADS_CREATED.inc();
    tracing::info!(lead_id = %created.lead_id, "lead captured");

    // Notification is best-effort: the lead is already persisted, so a
    // failure here must not change the response.
    if let Some(notifier) = &state.notifier {
        match notifier.send(&created.lead).await {
            Ok(()) => metrics::NOTIFICATIONS_SENT.inc(),
            Err(err) => {
                tracing::warn!(error = %err, lead_id = %created.lead_id, "staff notification failed, lead still saved");
                metrics::NOTIFICATION_FAILURES.inc();
            }
        }
    }

    (
        StatusCode::OK,
        Json(SubmitResponse {
            success: true,
            lead_id: Some(created.lead_id),
            message: THANK_YOU_MESSAGE.into(),
        }),
    )
        .into_response()
}

/// Every non-POST method on the contact endpoint lands here; no validation
/// or persistence work happens.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "Method not allowed. This endpoint only accepts POST requests."
        })),
    )
        .into_response()
}

pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
        .into_response()
}

/// `GET /health`. Stays local on purpose: the submission flow budgets
/// exactly one store round-trip per request, so health does not probe the
/// remote store. `store_configured` reports whether a write token exists.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
            "uptime_secs": uptime,
            "store_configured": state.store_configured,
        })),
    )
}

/// Client IP for spam-pattern logging: first `x-forwarded-for` entry, then
/// `x-real-ip`, then `"unknown"`.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_prefers_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.7"));
        assert_eq!(client_ip(&headers), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.7"));
        assert_eq!(client_ip(&headers), "198.51.100.7");
    }

    #[test]
    fn test_client_ip_unknown_without_headers() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn test_user_agent_fallback() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_agent(&headers), "unknown");
        headers.insert("user-agent", HeaderValue::from_static("Mozilla/5.0"));
        assert_eq!(user_agent(&headers), "Mozilla/5.0");
    }
}
