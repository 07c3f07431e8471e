//! Server-side validation and sanitization for the contact form.
//!
//! The browser runs the same checks for UX, but that is a convenience, not
//! a trust boundary: this module is the sole gate before persistence.
//!
//! Two components:
//!
//! 1. **Validators** - per-field rules collected into a `ValidationOutcome`;
//!    all violations are reported at once, never short-circuited.
//! 2. **Sanitizers** - idempotent normalization (trim, email lowercasing)
//!    applied after validation passes and before persistence.

pub mod sanitizers;
pub mod validators;

pub use sanitizers::sanitize_submission;
pub use validators::{is_valid_email, is_valid_phone, validate_contact_form, ValidationOutcome};
