//! Field validators for contact form submissions.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ContactSubmission;

lazy_static! {
    /// Pragmatic email shape check: one `@`, no whitespace, a dot in the
    /// domain part. Deliverability is the mail provider's problem.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Indian mobile number: optional +91/91/0 prefix, then ten digits
    /// starting 6-9. Separators are stripped before matching.
    static ref PHONE_REGEX: Regex = Regex::new(r"^(\+91|91|0)?[6-9]\d{9}$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    PHONE_REGEX.is_match(&digits)
}

/// Result of validating a submission. `errors` maps field name to the
/// first failing rule's message; the submission is valid iff it is empty.
#[derive(Debug, Default, PartialEq)]
pub struct ValidationOutcome {
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every field independently and collect all violations.
/// Never panics and never errs; an invalid submission is a normal outcome.
pub fn validate_contact_form(submission: &ContactSubmission) -> ValidationOutcome {
    let mut errors = BTreeMap::new();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required".to_string());
    } else if name.chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters".to_string());
    } else if name.chars().count() > 50 {
        errors.insert("name", "Name must be less than 50 characters".to_string());
    }

    let email = submission.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address".to_string());
    }

    let phone = submission.phone.trim();
    if phone.is_empty() {
        errors.insert("phone", "Phone number is required".to_string());
    } else if !is_valid_phone(phone) {
        errors.insert("phone", "Please enter a valid 10-digit phone number".to_string());
    }

    if submission.service.trim().is_empty() {
        errors.insert("service", "Please select a service".to_string());
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.insert("message", "Message is required".to_string());
    } else if message.chars().count() < 10 {
        errors.insert("message", "Message must be at least 10 characters".to_string());
    } else if message.chars().count() > 1000 {
        errors.insert("message", "Message must be less than 1000 characters".to_string());
    }

    ValidationOutcome { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
            service: "Laptop Purchase".into(),
            message: "Need a laptop for college use, budget 40k".into(),
            website: String::new(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let outcome = validate_contact_form(&valid_submission());
        assert!(outcome.is_valid(), "unexpected errors: {:?}", outcome.errors);
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let outcome = validate_contact_form(&ContactSubmission::default());
        assert!(!outcome.is_valid());
        for field in ["name", "email", "phone", "service", "message"] {
            assert!(outcome.errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("09876543210"));
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("98765-43210"));
        // first digit must be 6-9
        assert!(!is_valid_phone("1234567890"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
    }

    #[test]
    fn test_name_length_bounds() {
        let mut submission = valid_submission();
        submission.name = "J".into();
        assert!(validate_contact_form(&submission).errors.contains_key("name"));

        submission.name = "J".repeat(51);
        assert!(validate_contact_form(&submission).errors.contains_key("name"));

        submission.name = "Jo".into();
        assert!(!validate_contact_form(&submission).errors.contains_key("name"));
    }

    #[test]
    fn test_message_length_boundaries() {
        let mut submission = valid_submission();

        submission.message = "x".repeat(9);
        assert!(validate_contact_form(&submission).errors.contains_key("message"));

        submission.message = "x".repeat(10);
        assert!(!validate_contact_form(&submission).errors.contains_key("message"));

        submission.message = "x".repeat(1000);
        assert!(!validate_contact_form(&submission).errors.contains_key("message"));

        submission.message = "x".repeat(1001);
        assert!(validate_contact_form(&submission).errors.contains_key("message"));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut submission = valid_submission();
        // ten multibyte characters are a valid message length
        submission.message = "नमस्ते जी।".into();
        assert_eq!(submission.message.chars().count(), 10);
        assert!(!validate_contact_form(&submission).errors.contains_key("message"));
    }

    #[test]
    fn test_whitespace_only_service_rejected() {
        let mut submission = valid_submission();
        submission.service = "   ".into();
        let outcome = validate_contact_form(&submission);
        assert_eq!(outcome.errors["service"], "Please select a service");
    }
}
