pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod metrics_handler;
pub mod models;
pub mod notifier;
pub mod observability;
pub mod routes;
pub mod state;
pub mod validation;
