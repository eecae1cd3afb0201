// SPDX-License-Identifier: Apache-2.0

//! Where the policy list comes from.
//!
//! A fetch that finds no credential, gets a non-success status or fails on
//! the wire still yields `Ok` with an empty list; [`FetchOutcome`] records
//! which of those happened. Only a body that cannot be decoded is an `Err`.

mod fixture;
mod gov_api;

pub use fixture::StaticSource;
pub use gov_api::{redact_credential, GovApiSource, PREVIEW_CHARS};

use async_trait::async_trait;
use policy_desk_model::Policy;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched,
    MissingCredential,
    UpstreamStatus(u16),
    Transport,
}

impl FetchOutcome {
    /// Value of the `x-policy-source` response header.
    #[must_use]
    pub fn header_value(self) -> String {
        match self {
            Self::Fetched => "ok".to_string(),
            Self::MissingCredential => "missing-credential".to_string(),
            Self::UpstreamStatus(code) => format!("upstream-status-{code}"),
            Self::Transport => "transport".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFetch {
    pub policies: Vec<Policy>,
    pub outcome: FetchOutcome,
}

impl SourceFetch {
    #[must_use]
    pub fn fetched(policies: Vec<Policy>) -> Self {
        Self {
            policies,
            outcome: FetchOutcome::Fetched,
        }
    }

    #[must_use]
    pub fn empty(outcome: FetchOutcome) -> Self {
        Self {
            policies: Vec::new(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError(pub String);

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait PolicySource: Send + Sync + 'static {
    fn source_tag(&self) -> &'static str;

    async fn fetch_policies(&self) -> Result<SourceFetch, SourceError>;

    fn describe(&self) -> Value {
        json!({"source": self.source_tag()})
    }
}
