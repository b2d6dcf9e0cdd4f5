pub mod registration_request;
