// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.odcloud.kr/api/gov24/v3/serviceList";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiConfig {
    /// Exposes `/debug/source` with the adapter description.
    pub enable_debug_pages: bool,
}

/// Outbound request settings for the subsidy service list.
#[derive(Clone, Serialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub page: u64,
    pub per_page: u64,
    #[serde(skip)]
    credential: Option<String>,
    pub timeout: Option<Duration>,
}

impl UpstreamConfig {
    #[must_use]
    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            page: 1,
            per_page: 20,
            credential: None,
            timeout: None,
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn validate_startup_config(upstream: &UpstreamConfig) -> Result<(), String> {
    if upstream.page == 0 || upstream.per_page == 0 {
        return Err("upstream page and perPage must be >= 1".to_string());
    }
    let url = reqwest::Url::parse(&upstream.base_url)
        .map_err(|e| format!("invalid upstream url {}: {e}", upstream.base_url))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported upstream url scheme: {}", url.scheme()));
    }
    if upstream.timeout.is_some_and(|t| t.is_zero()) {
        return Err("upstream timeout must be > 0 when set".to_string());
    }
    Ok(())
}
