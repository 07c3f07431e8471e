use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use shared::{Lead, LeadPriority, LeadStatus, NewLead};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Result of a successful lead creation: the store-assigned id plus the
/// full record as it now exists in the store.
#[derive(Debug, Clone)]
pub struct CreatedLead {
    pub lead_id: String,
    pub lead: Lead,
}

/// Write seam between the submission handler and the content store.
/// Tests substitute an in-memory implementation that records calls.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn create_lead(&self, new: NewLead) -> Result<CreatedLead, StoreError>;
}

/// HTTP client for the content store's mutation API.
pub struct ContentStoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl ContentStoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| StoreError::Configuration(format!("http client: {}", err)))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Send a mutation batch and return the decoded response body.
    async fn mutate(&self, mutations: Value) -> Result<Value, StoreError> {
        let token = self.config.write_token.as_deref().ok_or_else(|| {
            StoreError::Configuration("CONTENT_STORE_WRITE_TOKEN is not set".into())
        })?;

        let response = self
            .http
            .post(self.config.mutate_url())
            .bearer_auth(token)
            .json(&json!({ "mutations": mutations }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::from_status(status, &body));
        }

        Ok(response.json().await?)
    }

    /// Create a document of the given type and return its store-assigned id.
    pub async fn create_document(&self, doc_type: &str, mut fields: Value) -> Result<String, StoreError> {
        if let Some(obj) = fields.as_object_mut() {
            obj.insert("_type".into(), json!(doc_type));
        }
        let body = self.mutate(json!([{ "create": fields }])).await?;
        let id = extract_created_id(&body)?;
        tracing::debug!(doc_type, id = %id, "document created");
        Ok(id)
    }

    /// Set fields on an existing document.
    pub async fn patch_document(&self, id: &str, set: Value) -> Result<(), StoreError> {
        self.mutate(json!([{ "patch": { "id": id, "set": set } }]))
            .await?;
        Ok(())
    }

    /// Administrative triage update: move a lead to a new status, optionally
    /// attaching internal notes. Not reachable from the submission flow.
    pub async fn update_lead_status(
        &self,
        lead_id: &str,
        status: LeadStatus,
        notes: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut set = json!({ "status": status });
        if let Some(notes) = notes {
            set["notes"] = json!(notes);
        }
        self.patch_document(lead_id, set).await?;
        tracing::info!(lead_id, status = %status, "lead status updated");
        Ok(())
    }
}

#[async_trait]
impl LeadStore for ContentStoreClient {
    async fn create_lead(&self, new: NewLead) -> Result<CreatedLead, StoreError> {
        let lead_id = self
            .create_document("lead", lead_document(&new))
            .await?;
        tracing::info!(lead_id = %lead_id, service = %new.service, "lead persisted");
        Ok(CreatedLead {
            lead: Lead::from_new(lead_id.clone(), new),
            lead_id,
        })
    }
}

/// Build the store document for a new lead: the sanitized fields plus the
/// creation defaults (`status: new`, `priority: medium`).
fn lead_document(new: &NewLead) -> Value {
    let mut doc = serde_json::to_value(new).expect("NewLead serializes");
    let obj = doc.as_object_mut().expect("NewLead is an object");
    obj.insert("status".into(), json!(LeadStatus::New));
    obj.insert("priority".into(), json!(LeadPriority::Medium));
    doc
}

/// Pull the first created id out of a mutation response.
fn extract_created_id(body: &Value) -> Result<String, StoreError> {
    body["results"]
        .as_array()
        .and_then(|results| results.first())
        .and_then(|result| result["id"].as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            StoreError::Persistence("mutation response carried no document id".into())
        })
}
