use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    LoginPhone,
    ContactPhone,
    ContactEmail,
    ContactName,
    Address,
    AddressNr,
    PostalCode,
    City,
    Country,
    MonthlySessions,
    PaymentMethod,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    pub fn is_card_detail(&self) -> bool {
        matches!(
            self,
            FormField::CardNumber | FormField::CardExpiry | FormField::CardCvc
        )
    }
}
