use crate::{
    types::{models::registration::form_field::FormField, validations::ValidationResult},
    utils::locale_utils::Messages,
};

fn default_required_message(field: FormField) -> &'static str {
    match field {
        FormField::LoginPhone => "Login phone number is required",
        FormField::ContactPhone => "Contact phone number is required",
        FormField::ContactEmail => "Contact email is required",
        FormField::ContactName => "Contact name is required",
        FormField::Address => "Address is required",
        FormField::AddressNr => "Address number is required",
        FormField::PostalCode => "Postal code is required",
        FormField::City => "City is required",
        FormField::Country => "Country is required",
        FormField::MonthlySessions => "Please select monthly sessions",
        FormField::PaymentMethod => "Please select a payment method",
        FormField::CardNumber => "Card number is required",
        FormField::CardExpiry => "Card expiry is required",
        FormField::CardCvc => "Card CVC is required",
    }
}

pub fn required_message(field: FormField, messages: &Messages) -> String {
    messages.get_validation_message(
        &format!("{}.required", field.name()),
        default_required_message(field),
    )
}

pub fn validate_required(field: FormField, value: &str, messages: &Messages) -> ValidationResult {
    if value.is_empty() {
        return Err(required_message(field, messages));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_fail_with_field_message() {
        let messages = Messages::default();
        assert_eq!(
            validate_required(FormField::PostalCode, "", &messages),
            Err("Postal code is required".to_string())
        );
        assert_eq!(
            validate_required(FormField::LoginPhone, "", &messages),
            Err("Login phone number is required".to_string())
        );
        assert!(validate_required(FormField::LoginPhone, "   ", &messages).is_ok());
        assert!(validate_required(FormField::City, "Athens", &messages).is_ok());
    }
}
