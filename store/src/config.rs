use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("CONTENT_STORE_API_VERSION must look like v2025-01-01, got {0:?}")]
    InvalidApiVersion(String),
}

/// Connection settings for the content store, loaded once at startup.
///
/// The write token is optional on purpose: a read-only deployment (the
/// seeder in `--dry-run`, local development without credentials) can still
/// construct a client, and the missing token surfaces as a configuration
/// error on the first write attempt rather than at boot.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub write_token: Option<String>,
    /// Overrides the URL derived from the project id. Used by tests and
    /// self-hosted deployments.
    pub base_url: Option<String>,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, StoreConfigError> {
        let project_id = std::env::var("CONTENT_STORE_PROJECT_ID")
            .map_err(|_| StoreConfigError::MissingVar("CONTENT_STORE_PROJECT_ID"))?;

        let dataset =
            std::env::var("CONTENT_STORE_DATASET").unwrap_or_else(|_| "production".into());

        let api_version =
            std::env::var("CONTENT_STORE_API_VERSION").unwrap_or_else(|_| "v2025-01-01".into());
        if !api_version.starts_with('v') {
            return Err(StoreConfigError::InvalidApiVersion(api_version));
        }

        let write_token = std::env::var("CONTENT_STORE_WRITE_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let base_url = std::env::var("CONTENT_STORE_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty());

        Ok(Self {
            project_id,
            dataset,
            api_version,
            write_token,
            base_url,
        })
    }

    /// Root URL of the store API for this project.
    pub fn api_root(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    /// Mutation endpoint for this dataset.
    pub fn mutate_url(&self) -> String {
        format!(
            "{}/{}/data/mutate/{}?returnIds=true",
            self.api_root(),
            self.api_version,
            self.dataset
        )
    }

    pub fn has_write_token(&self) -> bool {
        self.write_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            project_id: "8fax2jc9".into(),
            dataset: "production".into(),
            api_version: "v2025-01-01".into(),
            write_token: Some("sk-test".into()),
            base_url: None,
        }
    }

    #[test]
    fn test_mutate_url_derived_from_project_id() {
        assert_eq!(
            config().mutate_url(),
            "https://8fax2jc9.api.sanity.io/v2025-01-01/data/mutate/production?returnIds=true"
        );
    }

    #[test]
    fn test_base_url_override_wins() {
        let mut cfg = config();
        cfg.base_url = Some("http://localhost:3333/".into());
        assert_eq!(
            cfg.mutate_url(),
            "http://localhost:3333/v2025-01-01/data/mutate/production?returnIds=true"
        );
    }

    #[test]
    fn test_has_write_token() {
        let mut cfg = config();
        assert!(cfg.has_write_token());
        cfg.write_token = None;
        assert!(!cfg.has_write_token());
    }
}
