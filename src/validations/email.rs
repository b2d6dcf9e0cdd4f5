use email_address::EmailAddress;

use crate::{
    types::{models::registration::form_field::FormField, validations::ValidationResult},
    utils::locale_utils::Messages,
    validations::required::validate_required,
};

const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

fn is_overall_format_valid(email: &str, messages: &Messages) -> ValidationResult {
    if !EmailAddress::is_valid(email) {
        return Err(messages.get_validation_message("contactEmail.invalid", INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}

pub fn validate_email(email: &str, messages: &Messages) -> ValidationResult {
    validate_required(FormField::ContactEmail, email, messages)?;
    is_overall_format_valid(email, messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_reports_required_before_format() {
        let messages = Messages::default();
        assert_eq!(
            validate_email("", &messages),
            Err("Contact email is required".to_string())
        );
    }

    #[test]
    fn malformed_email_reports_format() {
        let messages = Messages::default();
        for email in ["parent", "parent@", "@example.com", "par ent@example.com"] {
            assert_eq!(
                validate_email(email, &messages),
                Err(INVALID_EMAIL_MESSAGE.to_string()),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn well_formed_email_passes() {
        let messages = Messages::default();
        assert!(validate_email("parent@example.com", &messages).is_ok());
        assert!(validate_email("first.last+tutoring@mail.example.gr", &messages).is_ok());
    }
}
