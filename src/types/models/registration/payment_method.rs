use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    Sepa,
    Card,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    pub fn requires_card_details(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}
