use anyhow::{Context, Result};
use reqwest::Client;

// No request timeout: a hung endpoint keeps the flow in `Submitting`.
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}
