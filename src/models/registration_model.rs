use serde::{Deserialize, Serialize};

use crate::types::models::registration::{form_field::FormField, payment_method::PaymentMethod};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub login_phone: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub contact_name: String,

    pub address: String,
    pub address_nr: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,

    pub monthly_sessions: String,
    pub payment_method: String,

    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl RegistrationForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::LoginPhone => &self.login_phone,
            FormField::ContactPhone => &self.contact_phone,
            FormField::ContactEmail => &self.contact_email,
            FormField::ContactName => &self.contact_name,
            FormField::Address => &self.address,
            FormField::AddressNr => &self.address_nr,
            FormField::PostalCode => &self.postal_code,
            FormField::City => &self.city,
            FormField::Country => &self.country,
            FormField::MonthlySessions => &self.monthly_sessions,
            FormField::PaymentMethod => &self.payment_method,
            FormField::CardNumber => &self.card_number,
            FormField::CardExpiry => &self.card_expiry,
            FormField::CardCvc => &self.card_cvc,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::LoginPhone => &mut self.login_phone,
            FormField::ContactPhone => &mut self.contact_phone,
            FormField::ContactEmail => &mut self.contact_email,
            FormField::ContactName => &mut self.contact_name,
            FormField::Address => &mut self.address,
            FormField::AddressNr => &mut self.address_nr,
            FormField::PostalCode => &mut self.postal_code,
            FormField::City => &mut self.city,
            FormField::Country => &mut self.country,
            FormField::MonthlySessions => &mut self.monthly_sessions,
            FormField::PaymentMethod => &mut self.payment_method,
            FormField::CardNumber => &mut self.card_number,
            FormField::CardExpiry => &mut self.card_expiry,
            FormField::CardCvc => &mut self.card_cvc,
        };
        *slot = value.into();
    }

    pub fn selected_payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::parse(&self.payment_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn set_then_get_covers_every_field() {
        let mut form = RegistrationForm::default();
        for field in FormField::iter() {
            form.set(field, field.name());
        }
        for field in FormField::iter() {
            assert_eq!(form.get(field), field.name());
        }
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields_defaulted() {
        let form: RegistrationForm = serde_json::from_value(json!({
            "contactEmail": "parent@example.com",
            "addressNr": "12",
            "paymentMethod": "sepa"
        }))
        .expect("form should deserialize");

        assert_eq!(form.contact_email, "parent@example.com");
        assert_eq!(form.address_nr, "12");
        assert_eq!(form.card_number, "");
        assert_eq!(form.selected_payment_method(), Some(PaymentMethod::Sepa));
    }
}
