// SPDX-License-Identifier: Apache-2.0

use crate::upstream::UpstreamRecord;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const DEFAULT_TITLE: &str = "정보 없음";
pub const DEFAULT_PROVIDER: &str = "기관 미상";
pub const DEFAULT_TARGET: &str = "대상 정보 없음";
pub const DEFAULT_BENEFIT: &str = "지원 내용 정보 없음";
pub const DEFAULT_PERIOD: &str = "상시 또는 별도 공고";
pub const DEFAULT_CATEGORY: &str = "기타";
/// The upstream payload has no region column, so every record is nationwide.
pub const NATIONWIDE_REGION: &str = "전국";

/// One normalized support program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub region: String,
    pub target: String,
    pub benefit: String,
    pub period: String,
    pub category: String,
}

impl Policy {
    /// Maps one upstream record, falling back per field.
    ///
    /// `index` is the record's position in the upstream list and only becomes
    /// the id when the service id is absent, so ids of that kind are not
    /// stable across fetches.
    #[must_use]
    pub fn from_upstream(index: usize, record: UpstreamRecord) -> Self {
        Self {
            id: record.service_id.unwrap_or_else(|| index.to_string()),
            title: record.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            provider: record
                .provider
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            region: NATIONWIDE_REGION.to_string(),
            target: record.target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            benefit: record
                .benefit
                .unwrap_or_else(|| DEFAULT_BENEFIT.to_string()),
            period: record.period.unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
            category: record
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }

    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("id", &self.id),
            ("title", &self.title),
            ("provider", &self.provider),
            ("region", &self.region),
            ("target", &self.target),
            ("benefit", &self.benefit),
            ("period", &self.period),
            ("category", &self.category),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in self.fields() {
            if value.is_empty() {
                return Err(ValidationError(format!("policy field {name} is empty")));
            }
        }
        Ok(())
    }
}
