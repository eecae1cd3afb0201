// SPDX-License-Identifier: Apache-2.0

use super::{PolicySource, SourceError, SourceFetch};
use async_trait::async_trait;
use policy_desk_model::normalize_upstream_payload;
use std::path::Path;

/// Serves a fixed upstream payload. Each fetch re-normalizes it, so a bad
/// payload fails the same way a bad upstream body would.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: Vec<u8>,
}

impl StaticSource {
    #[must_use]
    pub fn from_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let payload = std::fs::read(path)
            .map_err(|e| SourceError(format!("read fixture {} failed: {e}", path.display())))?;
        Ok(Self::from_payload(payload))
    }
}

#[async_trait]
impl PolicySource for StaticSource {
    fn source_tag(&self) -> &'static str {
        "static_fixture"
    }

    async fn fetch_policies(&self) -> Result<SourceFetch, SourceError> {
        let policies = normalize_upstream_payload(&self.payload)
            .map_err(|e| SourceError(format!("fixture payload decode failed: {e}")))?;
        Ok(SourceFetch::fetched(policies))
    }
}
