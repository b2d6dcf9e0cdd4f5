use anyhow::Result;
use std::{collections::BTreeSet, sync::Arc};
use strum::IntoEnumIterator;

use crate::{
    models::{
        plan_model::PlanSelection, pricing_model::PricingQuote,
        registration_model::RegistrationForm,
    },
    services::{pricing_service::compute_pricing, registration_service::RegistrationService},
    types::{
        models::registration::form_field::FormField,
        responses::api_response::SubmissionResult, validations::FieldErrors,
    },
    utils::validation_utils::collect_field_errors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlock {
    InvalidForm(FieldErrors),
    TermsNotAccepted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    /// Preconditions failed; nothing was sent.
    Blocked(SubmitBlock),
    Completed(SubmissionResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

/// One mounted registration form: its field values, plan selection and
/// submission status.
pub struct SubmissionFlow {
    service: Arc<RegistrationService>,
    form: RegistrationForm,
    plan: PlanSelection,
    state: SubmissionState,
    status_message: Option<String>,
    errors: FieldErrors,
    touched: BTreeSet<FormField>,
}

impl SubmissionFlow {
    pub fn new(service: Arc<RegistrationService>) -> Self {
        Self {
            service,
            form: RegistrationForm::default(),
            plan: PlanSelection::default(),
            state: SubmissionState::Idle,
            status_message: None,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
        }
    }

    pub fn with_form(mut self, form: RegistrationForm) -> Self {
        self.form = form;
        self.revalidate();
        self
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn plan(&self) -> &PlanSelection {
        &self.plan
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn status_tone(&self) -> Option<StatusTone> {
        self.status_message.as_ref()?;
        match self.state {
            SubmissionState::Succeeded => Some(StatusTone::Success),
            _ => Some(StatusTone::Error),
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) -> FieldErrors {
        self.form.set(field, value);
        self.touched.insert(field);
        self.revalidate();
        self.visible_errors()
    }

    /// Errors for fields the user has edited, or all of them after a submit attempt.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors
            .iter()
            .filter(|(name, _)| {
                name.parse::<FormField>()
                    .map(|field| self.touched.contains(&field))
                    .unwrap_or(false)
            })
            .map(|(name, msg)| (name.clone(), msg.clone()))
            .collect()
    }

    pub fn select_duration(&mut self, months: u32) -> Result<()> {
        self.plan.select_duration(months)
    }

    pub fn set_pay_in_advance(&mut self, pay_in_advance: bool) {
        self.plan.pay_in_advance = pay_in_advance;
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.plan.accepted_terms = accepted;
    }

    pub fn pricing(&self) -> PricingQuote {
        compute_pricing(self.plan.duration_months, self.plan.pay_in_advance)
    }

    pub fn can_submit(&self) -> bool {
        self.plan.accepted_terms && !self.is_submitting()
    }

    pub fn submit_label(&self) -> String {
        let messages = &self.service.messages;
        if self.is_submitting() {
            messages.get_submission_message("button.submitting", "Submitting...")
        } else if self.plan.accepted_terms {
            messages.get_submission_message("button.order", "Order Now")
        } else {
            messages.get_submission_message("button.accept_terms", "Please accept terms to order")
        }
    }

    pub fn reset(&mut self) {
        self.form = RegistrationForm::default();
        self.plan = PlanSelection::default();
        self.touched.clear();
        self.revalidate();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            log::debug!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::Ignored;
        }

        self.touched.extend(FormField::iter());
        self.revalidate();

        if !self.errors.is_empty() {
            log::info!("Submit blocked: {} invalid field(s)", self.errors.len());
            return SubmitOutcome::Blocked(SubmitBlock::InvalidForm(self.errors.clone()));
        }
        if !self.plan.accepted_terms {
            log::info!("Submit blocked: terms not accepted");
            return SubmitOutcome::Blocked(SubmitBlock::TermsNotAccepted);
        }

        self.state = SubmissionState::Submitting;
        self.status_message = None;

        let quote = self.pricing();
        let result = self
            .service
            .submit_registration(&self.form, &self.plan, &quote)
            .await;

        self.status_message = result.message.clone();
        if result.success {
            self.state = SubmissionState::Succeeded;
            self.reset();
        } else {
            self.state = SubmissionState::Failed;
        }

        SubmitOutcome::Completed(result)
    }

    fn revalidate(&mut self) {
        self.errors = collect_field_errors(&self.form, &self.service.messages);
    }
}
