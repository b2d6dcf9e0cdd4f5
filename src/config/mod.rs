pub mod http;
pub mod settings;
