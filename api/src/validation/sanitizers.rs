//! Input normalization applied after validation and before persistence.

use crate::models::ContactSubmission;

/// Trim every field and lowercase the email, in place. Idempotent and free
/// of validation side effects; it assumes the validator already approved
/// the submission.
pub fn sanitize_submission(submission: &mut ContactSubmission) {
    submission.name = submission.name.trim().to_string();
    submission.email = submission.email.trim().to_lowercase();
    submission.phone = submission.phone.trim().to_string();
    submission.service = submission.service.trim().to_string();
    submission.message = submission.message.trim().to_string();
}
