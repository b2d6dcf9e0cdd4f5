//! Registration and checkout for an online tutoring service: plan pricing,
//! form validation and submission of the bundled order to a remote API.

pub mod config;
pub mod constants;
pub mod models;
pub mod repositories;
pub mod services;
pub mod types;
pub mod utils;
pub mod validations;

pub use models::{
    plan_model::PlanSelection, pricing_model::PricingQuote, registration_model::RegistrationForm,
};
pub use services::{
    pricing_service::compute_pricing,
    registration_service::RegistrationService,
    submission_flow::{StatusTone, SubmissionFlow, SubmissionState, SubmitBlock, SubmitOutcome},
};
pub use types::{
    models::registration::{form_field::FormField, payment_method::PaymentMethod},
    responses::api_response::SubmissionResult,
    validations::FieldErrors,
};
