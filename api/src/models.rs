use serde::{Deserialize, Serialize};

/// Raw contact form payload as the browser sends it. Every field defaults
/// to an empty string so a missing JSON key is reported by the validator
/// as a field error rather than failing deserialization.
///
/// `website` is the honeypot: hidden from real users, so anything
/// non-whitespace in it marks the submission as automated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub website: String,
}

/// Success body of the contact endpoint. Bot submissions get the same
/// shape without `leadId`; its absence is intentionally opaque.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "");
        assert_eq!(submission.website, "");
    }

    #[test]
    fn test_response_omits_absent_lead_id() {
        let body = serde_json::to_value(SubmitResponse {
            success: true,
            lead_id: None,
            message: "Thanks".into(),
        })
        .unwrap();
        assert!(body.get("leadId").is_none());

        let body = serde_json::to_value(SubmitResponse {
            success: true,
            lead_id: Some("lead-1".into()),
            message: "Thanks".into(),
        })
        .unwrap();
        assert_eq!(body["leadId"], "lead-1");
    }
}
