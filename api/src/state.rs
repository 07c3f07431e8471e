use std::sync::Arc;
use std::time::Instant;

use prometheus::Registry;
use store::LeadStore;

use crate::config::Environment;
use crate::notifier::LeadNotifier;

/// Application state shared across handlers. The store and notifier sit
/// behind trait objects so tests can substitute scripted implementations.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
    pub notifier: Option<Arc<dyn LeadNotifier>>,
    pub environment: Environment,
    pub started_at: Instant,
    pub registry: Registry,
    pub store_configured: bool,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LeadStore>,
        notifier: Option<Arc<dyn LeadNotifier>>,
        environment: Environment,
        registry: Registry,
        store_configured: bool,
    ) -> Self {
        Self {
            store,
            notifier,
            environment,
            started_at: Instant::now(),
            registry,
            store_configured,
        }
    }
}
