use std::sync::Arc;

use crate::{
    models::{
        plan_model::PlanSelection, pricing_model::PricingQuote,
        registration_model::RegistrationForm,
    },
    repositories::registration_api::RegistrationApi,
    types::{
        requests::registration_request::RegistrationRequest,
        responses::api_response::{ErrorBody, SubmissionResult},
    },
    utils::locale_utils::Messages,
};

pub struct RegistrationService {
    pub registration_api: Arc<RegistrationApi>,
    pub messages: Arc<Messages>,
}

impl RegistrationService {
    pub fn new(registration_api: Arc<RegistrationApi>, messages: Arc<Messages>) -> Self {
        Self {
            registration_api,
            messages,
        }
    }

    /// Sends one registration and folds every outcome into a `SubmissionResult`.
    pub async fn submit_registration(
        &self,
        form: &RegistrationForm,
        plan: &PlanSelection,
        quote: &PricingQuote,
    ) -> SubmissionResult {
        let request = RegistrationRequest::new(form, plan, quote);
        log::info!(
            "Submitting registration for {} ({} months, advance: {}, total: {})",
            form.contact_email,
            request.selected_duration,
            request.pay_in_advance,
            request.total_price
        );

        match self.registration_api.post_registration(&request).await {
            Ok(reply) if reply.is_success() => {
                log::info!("Registration accepted ({})", reply.status);
                SubmissionResult::success(
                    self.messages.get_submission_message(
                        "success",
                        "Registration submitted successfully! We will contact you soon.",
                    ),
                    Some(reply.body),
                )
            }
            Ok(reply) => {
                let server_message = ErrorBody::from_value(&reply.body)
                    .message
                    .filter(|message| !message.is_empty());
                log::warn!(
                    "Registration rejected ({}): {}",
                    reply.status,
                    server_message.as_deref().unwrap_or("<no message>")
                );
                SubmissionResult::error(server_message.unwrap_or_else(|| {
                    self.messages.get_submission_message(
                        "failed",
                        "Submission failed. Please try again.",
                    )
                }))
            }
            Err(err) => {
                log::error!("Registration request failed: {}", err);
                SubmissionResult::error(self.messages.get_submission_message(
                    "network_error",
                    "Network error. Please check your connection and try again.",
                ))
            }
        }
    }
}
