// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    PolicyNotFound,
    UpstreamPayloadInvalid,
}

impl ApiErrorCode {
    pub const ALL: [Self; 3] = [
        Self::InvalidQueryParameter,
        Self::PolicyNotFound,
        Self::UpstreamPayloadInvalid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidQueryParameter => "InvalidQueryParameter",
            Self::PolicyNotFound => "PolicyNotFound",
            Self::UpstreamPayloadInvalid => "UpstreamPayloadInvalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"field_errors":[{"parameter": name, "reason": "invalid", "value": value}]}),
        )
    }

    #[must_use]
    pub fn policy_not_found(id: &str) -> Self {
        Self::new(
            ApiErrorCode::PolicyNotFound,
            crate::messages::POLICY_NOT_FOUND,
            json!({"id": id}),
        )
    }

    #[must_use]
    pub fn upstream_payload_invalid(cause: &str) -> Self {
        Self::new(
            ApiErrorCode::UpstreamPayloadInvalid,
            "upstream payload could not be decoded",
            json!({"cause": cause}),
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
