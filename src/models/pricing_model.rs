use serde::Serialize;

use crate::utils::format_utils::format_amount;

/// Full-precision amounts; use the `display_*` helpers for 2-decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    pub regular_price: f64,
    pub discount_rate: f64,
    pub your_price: f64,
    pub discount_amount: f64,
    pub setup_fee: f64,
    pub total_monthly: f64,
}

impl PricingQuote {
    pub fn display_regular_price(&self) -> String {
        format_amount(self.regular_price)
    }

    pub fn display_your_price(&self) -> String {
        format_amount(self.your_price)
    }

    pub fn display_discount(&self) -> String {
        format_amount(self.discount_amount)
    }

    pub fn display_setup_fee(&self) -> String {
        format_amount(self.setup_fee)
    }

    pub fn display_total_monthly(&self) -> String {
        format_amount(self.total_monthly)
    }
}
