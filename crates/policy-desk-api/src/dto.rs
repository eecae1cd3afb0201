// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Body of the listing endpoint's failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBodyDto {
    pub error: String,
}

impl ErrorBodyDto {
    #[must_use]
    pub fn server_error() -> Self {
        Self {
            error: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

pub const SERVER_ERROR_MESSAGE: &str = "서버 오류";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
