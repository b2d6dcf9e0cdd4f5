pub mod plan_model;
pub mod pricing_model;
pub mod registration_model;
