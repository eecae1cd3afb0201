// SPDX-License-Identifier: Apache-2.0

use policy_desk_api::POLICIES_ROUTE;
use policy_desk_model::Policy;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError(pub String);

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClientError {}

/// Reads the listing endpoint of a running server. One GET per call.
pub struct PolicyClient {
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl PolicyClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base = reqwest::Url::parse(server.trim_end_matches('/'))
            .map_err(|e| ClientError(format!("invalid server url {server}: {e}")))?;
        let endpoint = base
            .join(POLICIES_ROUTE)
            .map_err(|e| ClientError(format!("invalid server url {server}: {e}")))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError(format!("http client init failed: {e}")))?;
        Ok(Self { endpoint, client })
    }

    #[must_use]
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    pub async fn fetch_policies(&self) -> Result<Vec<Policy>, ClientError> {
        info!(url = %self.endpoint, "fetching policy list");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| ClientError(format!("request failed: {e}")))?;
        let status = response.status();
        if let Some(source) = response.headers().get(policy_desk_api::POLICY_SOURCE_HEADER) {
            debug!(source = ?source, "server reported policy source");
        }
        if !status.is_success() {
            return Err(ClientError(format!("server answered {status}")));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError(format!("read response failed: {e}")))?;
        serde_json::from_slice::<Vec<Policy>>(&bytes)
            .map_err(|e| ClientError(format!("response decode failed: {e}")))
    }
}
