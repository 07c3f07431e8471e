use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Intake channel a lead arrived through. The contact form always writes
/// `Website`; the other variants exist for leads entered by staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Website,
    Whatsapp,
    Phone,
    Email,
    Walkin,
    Other,
}

impl std::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSource::Website => write!(f, "website"),
            LeadSource::Whatsapp => write!(f, "whatsapp"),
            LeadSource::Phone => write!(f, "phone"),
            LeadSource::Email => write!(f, "email"),
            LeadSource::Walkin => write!(f, "walkin"),
            LeadSource::Other => write!(f, "other"),
        }
    }
}

/// Triage status of a lead. Every lead starts at `New`; the remaining
/// transitions happen through the administrative surface, never through
/// the submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Viewed,
    Contacted,
    Discussion,
    Converted,
    Lost,
    Followup,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Viewed => write!(f, "viewed"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Discussion => write!(f, "discussion"),
            LeadStatus::Converted => write!(f, "converted"),
            LeadStatus::Lost => write!(f, "lost"),
            LeadStatus::Followup => write!(f, "followup"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

/// Sanitized, metadata-enriched fields handed to the store for creation.
/// `submitted_at`, `ip_address` and `user_agent` are set by the server at
/// submit time and are write-once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub source: LeadSource,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A persisted lead as the content store returns it, including the triage
/// fields managed outside the submission flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub priority: LeadPriority,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Lead {
    /// Assemble the record a fresh creation produces: triage fields at
    /// their defaults, identity assigned by the store.
    pub fn from_new(id: String, new: NewLead) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            service: new.service,
            message: new.message,
            source: new.source,
            status: LeadStatus::New,
            priority: LeadPriority::Medium,
            notes: None,
            follow_up_date: None,
            assigned_to: None,
            submitted_at: new.submitted_at,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_lead() -> NewLead {
        NewLead {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
            service: "Laptop Purchase".into(),
            message: "Need a laptop for college use, budget 40k".into(),
            source: LeadSource::Website,
            submitted_at: Utc::now(),
            ip_address: Some("203.0.113.9".into()),
            user_agent: Some("Mozilla/5.0".into()),
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(LeadStatus::New).unwrap(),
            serde_json::json!("new")
        );
        assert_eq!(
            serde_json::to_value(LeadStatus::Followup).unwrap(),
            serde_json::json!("followup")
        );
    }

    #[test]
    fn test_new_lead_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_new_lead()).unwrap();
        assert!(value.get("submittedAt").is_some());
        assert!(value.get("ipAddress").is_some());
        assert!(value.get("userAgent").is_some());
        assert_eq!(value["source"], serde_json::json!("website"));
    }

    #[test]
    fn test_from_new_applies_creation_defaults() {
        let lead = Lead::from_new("lead-abc123".into(), sample_new_lead());
        assert_eq!(lead.id, "lead-abc123");
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.priority, LeadPriority::Medium);
        assert!(lead.notes.is_none());
        assert!(lead.assigned_to.is_none());
    }

    #[test]
    fn test_lead_roundtrip_with_missing_triage_fields() {
        let json = serde_json::json!({
            "id": "lead-1",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "9876543210",
            "service": "Laptop Purchase",
            "message": "Need a laptop for college use, budget 40k",
            "source": "website",
            "status": "new",
            "priority": "medium",
            "submittedAt": "2026-02-20T10:30:00Z",
            "ipAddress": null,
            "userAgent": null
        });
        let lead: Lead = serde_json::from_value(json).unwrap();
        assert!(lead.follow_up_date.is_none());
        assert!(lead.ip_address.is_none());
    }
}
