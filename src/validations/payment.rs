use crate::{
    types::{
        models::registration::{form_field::FormField, payment_method::PaymentMethod},
        validations::ValidationResult,
    },
    utils::locale_utils::Messages,
    validations::required::{required_message, validate_required},
};

pub fn validate_payment_method(value: &str, messages: &Messages) -> ValidationResult {
    match PaymentMethod::parse(value) {
        Some(_) => Ok(()),
        None => Err(required_message(FormField::PaymentMethod, messages)),
    }
}

/// Card fields are only checked while the selected method is `card`.
pub fn validate_card_detail(
    field: FormField,
    value: &str,
    payment_method: Option<PaymentMethod>,
    messages: &Messages,
) -> ValidationResult {
    match payment_method {
        Some(method) if method.requires_card_details() => {
            validate_required(field, value, messages)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_must_be_sepa_or_card() {
        let messages = Messages::default();
        assert!(validate_payment_method("sepa", &messages).is_ok());
        assert!(validate_payment_method("card", &messages).is_ok());
        assert_eq!(
            validate_payment_method("cash", &messages),
            Err("Please select a payment method".to_string())
        );
        assert_eq!(
            validate_payment_method("", &messages),
            Err("Please select a payment method".to_string())
        );
    }

    #[test]
    fn card_details_ignored_unless_card_selected() {
        let messages = Messages::default();
        assert!(
            validate_card_detail(FormField::CardNumber, "", Some(PaymentMethod::Sepa), &messages)
                .is_ok()
        );
        assert!(validate_card_detail(FormField::CardCvc, "", None, &messages).is_ok());
        assert_eq!(
            validate_card_detail(FormField::CardExpiry, "", Some(PaymentMethod::Card), &messages),
            Err("Card expiry is required".to_string())
        );
    }
}
