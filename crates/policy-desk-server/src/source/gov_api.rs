// SPDX-License-Identifier: Apache-2.0

use super::{FetchOutcome, PolicySource, SourceError, SourceFetch};
use crate::config::UpstreamConfig;
use async_trait::async_trait;
use policy_desk_model::normalize_upstream_payload;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument, warn};

pub const PREVIEW_CHARS: usize = 500;
const CREDENTIAL_PARAM: &str = "serviceKey";

/// Client for the public subsidy service list. One GET per fetch, no retries.
pub struct GovApiSource {
    config: UpstreamConfig,
    client: reqwest::Client,
}

impl GovApiSource {
    pub fn new(config: UpstreamConfig) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SourceError(format!("http client init failed: {e}")))?;
        Ok(Self { config, client })
    }

    #[must_use]
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    pub fn request_url(&self, credential: &str) -> Result<reqwest::Url, SourceError> {
        let mut url = reqwest::Url::parse(&self.config.base_url)
            .map_err(|e| SourceError(format!("invalid upstream url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("page", &self.config.page.to_string())
            .append_pair("perPage", &self.config.per_page.to_string())
            .append_pair(CREDENTIAL_PARAM, credential);
        Ok(url)
    }
}

/// Copy of `url` safe to log: the credential value is masked.
#[must_use]
pub fn redact_credential(url: &reqwest::Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == CREDENTIAL_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

#[async_trait]
impl PolicySource for GovApiSource {
    fn source_tag(&self) -> &'static str {
        "gov_api"
    }

    #[instrument(name = "upstream_fetch_policies", skip(self))]
    async fn fetch_policies(&self) -> Result<SourceFetch, SourceError> {
        let Some(credential) = self.config.credential() else {
            warn!("GOV_API_SERVICE_KEY is not set; returning an empty policy list");
            return Ok(SourceFetch::empty(FetchOutcome::MissingCredential));
        };
        let url = self.request_url(credential)?;
        info!(url = %redact_credential(&url), "requesting upstream policy list");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "upstream request failed");
                return Ok(SourceFetch::empty(FetchOutcome::Transport));
            }
        };
        let status = response.status();
        info!(status = status.as_u16(), "upstream responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %preview(&body),
                "upstream returned a non-success status"
            );
            return Ok(SourceFetch::empty(FetchOutcome::UpstreamStatus(
                status.as_u16(),
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError(format!("read upstream body failed: {e}")))?;
        debug!(
            payload = %preview(&String::from_utf8_lossy(&bytes)),
            "upstream payload preview"
        );
        let policies = normalize_upstream_payload(&bytes)
            .map_err(|e| SourceError(format!("upstream payload decode failed: {e}")))?;
        info!(count = policies.len(), "normalized upstream policies");
        Ok(SourceFetch::fetched(policies))
    }

    fn describe(&self) -> Value {
        json!({
            "source": self.source_tag(),
            "base_url": self.config.base_url,
            "page": self.config.page,
            "per_page": self.config.per_page,
            "credential_configured": self.config.has_credential(),
            "timeout_ms": self.config.timeout.map(|t| t.as_millis() as u64),
        })
    }
}
