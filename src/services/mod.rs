pub mod pricing_service;
pub mod registration_service;
pub mod submission_flow;
