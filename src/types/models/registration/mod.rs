pub mod country;
pub mod form_field;
pub mod monthly_sessions;
pub mod payment_method;
