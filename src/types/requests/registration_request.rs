use serde::Serialize;

use crate::models::{
    plan_model::PlanSelection, pricing_model::PricingQuote, registration_model::RegistrationForm,
};

/// Body posted to the submission endpoint: every form field plus the plan
/// and the 2-decimal total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(flatten)]
    pub form: RegistrationForm,

    pub selected_duration: u32,

    pub pay_in_advance: bool,

    pub total_price: String,
}

impl RegistrationRequest {
    pub fn new(form: &RegistrationForm, plan: &PlanSelection, quote: &PricingQuote) -> Self {
        Self {
            form: form.clone(),
            selected_duration: plan.duration_months,
            pay_in_advance: plan.pay_in_advance,
            total_price: quote.display_total_monthly(),
        }
    }
}
