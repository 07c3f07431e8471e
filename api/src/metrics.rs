use once_cell::sync::Lazy;
use prometheus::{
    opts, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Registry, TextEncoder,
};

macro_rules! counter_vec {
    ($name:expr, $help:expr, $labels:expr) => {
        Lazy::new(|| IntCounterVec::new(opts!($name, $help), $labels).unwrap())
    };
}
macro_rules! histogram_vec {
    ($name:expr, $help:expr, $labels:expr) => {
        Lazy::new(|| {
            HistogramVec::new(
                HistogramOpts::new($name, $help).buckets(LATENCY_BUCKETS.to_vec()),
                $labels,
            )
            .unwrap()
        })
    };
}
macro_rules! counter {
    ($name:expr, $help:expr) => {
        Lazy::new(|| IntCounter::new($name, $help).unwrap())
    };
}

const LATENCY_BUCKETS: [f64; 11] = [
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

// ── HTTP ────────────────────────────────────────────────────────────────────
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> =
    counter_vec!("http_requests_total", "Total HTTP requests", &["method", "path", "status"]);
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> =
    histogram_vec!("http_request_duration_seconds", "HTTP request latency", &["method", "path"]);

// ── Leads ───────────────────────────────────────────────────────────────────
pub static LEADS_CREATED: Lazy<IntCounter> =
    counter!("leads_created_total", "Leads persisted to the content store");
pub static LEAD_STORE_FAILURES: Lazy<IntCounterVec> =
    counter_vec!("lead_store_failures_total", "Store write failures by kind", &["kind"]);
pub static BOT_REJECTIONS: Lazy<IntCounter> =
    counter!("bot_rejections_total", "Submissions rejected by the honeypot");
pub static VALIDATION_REJECTIONS: Lazy<IntCounter> =
    counter!("validation_rejections_total", "Submissions rejected by validation");

// ── Notifications ───────────────────────────────────────────────────────────
pub static NOTIFICATIONS_SENT: Lazy<IntCounter> =
    counter!("notifications_sent_total", "Staff notification emails sent");
pub static NOTIFICATION_FAILURES: Lazy<IntCounter> =
    counter!("notification_failures_total", "Staff notification emails that failed");

pub fn register_all(registry: &Registry) -> prometheus::Result<()> {
    registry.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_DURATION.clone()))?;
    registry.register(Box::new(LEADS_CREATED.clone()))?;
    registry.register(Box::new(LEAD_STORE_FAILURES.clone()))?;
    registry.register(Box::new(BOT_REJECTIONS.clone()))?;
    registry.register(Box::new(VALIDATION_REJECTIONS.clone()))?;
    registry.register(Box::new(NOTIFICATIONS_SENT.clone()))?;
    registry.register(Box::new(NOTIFICATION_FAILURES.clone()))?;
    Ok(())
}

pub fn observe_http(method: &str, path: &str, status: u16, seconds: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION
        .with_label_values(&[method, path])
        .observe(seconds);
}

pub fn gather_metrics(registry: &Registry) -> String {
    let encoder = TextEncoder::new();
    let families = registry.gather();
    let mut buffer = Vec::new();
    if encoder.encode(&families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_is_consistent() {
        let registry = Registry::new_custom(Some("test".into()), None).unwrap();
        register_all(&registry).unwrap();
        assert!(registry.gather().len() >= 8);
    }

    #[test]
    fn test_observe_http_records_labels() {
        let before = HTTP_REQUESTS_TOTAL
            .with_label_values(&["POST", "/api/contact", "200"])
            .get();
        observe_http("POST", "/api/contact", 200, 0.02);
        let after = HTTP_REQUESTS_TOTAL
            .with_label_values(&["POST", "/api/contact", "200"])
            .get();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_store_failure_kinds_are_separate_series() {
        LEAD_STORE_FAILURES.with_label_values(&["configuration"]).inc();
        LEAD_STORE_FAILURES.with_label_values(&["persistence"]).inc();
        assert!(LEAD_STORE_FAILURES.with_label_values(&["configuration"]).get() >= 1);
        assert!(LEAD_STORE_FAILURES.with_label_values(&["persistence"]).get() >= 1);
    }
}
