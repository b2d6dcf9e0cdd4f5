use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use strum::IntoEnumIterator;
use validator::{ValidationError, ValidationErrors};

use crate::{
    models::registration_model::RegistrationForm,
    types::{
        models::registration::{form_field::FormField, payment_method::PaymentMethod},
        validations::{FieldErrors, ValidationResult},
    },
    utils::locale_utils::Messages,
    validations::{
        email::validate_email,
        payment::{validate_card_detail, validate_payment_method},
        required::validate_required,
    },
};

pub fn validate_field(
    field: FormField,
    form: &RegistrationForm,
    payment_method: Option<PaymentMethod>,
    messages: &Messages,
) -> ValidationResult {
    let value = form.get(field);
    match field {
        FormField::ContactEmail => validate_email(value, messages),
        FormField::PaymentMethod => validate_payment_method(value, messages),
        FormField::CardNumber | FormField::CardExpiry | FormField::CardCvc => {
            validate_card_detail(field, value, payment_method, messages)
        }
        _ => validate_required(field, value, messages),
    }
}

pub fn validate_registration_data(
    form: &RegistrationForm,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let payment_method = form.selected_payment_method();
    let failures: Vec<(FormField, String)> = FormField::iter()
        .filter_map(|field| {
            validate_field(field, form, payment_method, messages)
                .err()
                .map(|msg| (field, msg))
        })
        .collect();

    let mut errors = ValidationErrors::new();
    for (field, msg) in failures {
        log::debug!("Validation failed for '{}': {}", field, msg);
        let value = if field.is_card_detail() {
            None
        } else {
            Some(form.get(field))
        };
        errors.add(field.name(), add_error(field.name(), msg, value));
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First message per field, keyed by camelCase field name.
pub fn errors_to_map(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.iter()
                .find_map(|err| err.message.as_ref())
                .map(|msg| (field.to_string(), msg.to_string()))
        })
        .collect()
}

pub fn collect_field_errors(form: &RegistrationForm, messages: &Messages) -> FieldErrors {
    match validate_registration_data(form, messages) {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors_to_map(&errors),
    }
}

pub fn add_error(code: &'static str, message: String, field_value: Option<&str>) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            if let Some(value) = field_value {
                params.insert("value".into(), json!(value));
            }
            params
        },
    }
}
