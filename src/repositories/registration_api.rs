use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::types::requests::registration_request::RegistrationRequest;

#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Gateway to the external registration endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationApi {
    pub client: Client,
    pub endpoint: String,
}

impl RegistrationApi {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Any HTTP status with a JSON body is a reply. A failed exchange or a
    /// body that is not JSON (including an empty one) is an error.
    pub async fn post_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiReply, reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await.inspect_err(|err| {
            log::warn!("Unreadable reply from {} ({}): {}", self.endpoint, status, err);
        })?;

        Ok(ApiReply { status, body })
    }
}
