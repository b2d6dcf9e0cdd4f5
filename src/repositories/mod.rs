pub mod registration_api;
