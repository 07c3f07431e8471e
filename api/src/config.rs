use std::net::SocketAddr;
use std::str::FromStr;

use store::{StoreConfig, StoreConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid APP_ENV {0:?}, expected development or production")]
    InvalidEnvironment(String),
    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
    #[error(transparent)]
    Store(#[from] StoreConfigError),
}

/// Deployment environment. Gates whether error responses carry debug
/// detail: development responses include it, production responses never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origin: String,
}

/// Settings for the transactional-email notifier. All three variables must
/// be present for notifications to be enabled.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub api_key: String,
    pub from_email: String,
    pub to_email: String,
    /// Override for the email API endpoint, used by tests.
    pub api_url: Option<String>,
}

/// Everything the API process needs, loaded once at startup. Nothing else
/// reads environment variables after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub notifier: Option<NotifierConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match std::env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        let store = StoreConfig::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig {
                bind_addr,
                allowed_origin,
            },
            store,
            notifier: notifier_from_env(),
        })
    }
}

fn notifier_from_env() -> Option<NotifierConfig> {
    let api_key = std::env::var("NOTIFY_API_KEY").ok().filter(|v| !v.is_empty())?;
    let from_email = std::env::var("NOTIFY_FROM_EMAIL").ok().filter(|v| !v.is_empty())?;
    let to_email = std::env::var("NOTIFY_TO_EMAIL").ok().filter(|v| !v.is_empty())?;
    Some(NotifierConfig {
        api_key,
        from_email,
        to_email,
        api_url: std::env::var("NOTIFY_API_URL").ok().filter(|v| !v.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("Prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_production_gates_detail() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
