// SPDX-License-Identifier: Apache-2.0

use crate::policy::{Policy, ValidationError};
use crate::serde_helpers::loose_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const KEY_SERVICE_ID: &str = "서비스ID";
pub const KEY_TITLE: &str = "서비스명";
pub const KEY_PROVIDER: &str = "소관기관명";
pub const KEY_TARGET: &str = "지원대상";
pub const KEY_BENEFIT: &str = "서비스목적요약";
pub const KEY_PERIOD: &str = "신청기한";
pub const KEY_CATEGORY: &str = "지원유형";

/// Typed view of one element of the upstream `data` array.
///
/// Unknown keys are ignored: the service publishes many more columns than we
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpstreamRecord {
    #[serde(rename = "서비스ID", default, deserialize_with = "loose_text::deserialize")]
    pub service_id: Option<String>,
    #[serde(rename = "서비스명", default, deserialize_with = "loose_text::deserialize")]
    pub title: Option<String>,
    #[serde(rename = "소관기관명", default, deserialize_with = "loose_text::deserialize")]
    pub provider: Option<String>,
    #[serde(rename = "지원대상", default, deserialize_with = "loose_text::deserialize")]
    pub target: Option<String>,
    #[serde(rename = "서비스목적요약", default, deserialize_with = "loose_text::deserialize")]
    pub benefit: Option<String>,
    #[serde(rename = "신청기한", default, deserialize_with = "loose_text::deserialize")]
    pub period: Option<String>,
    #[serde(rename = "지원유형", default, deserialize_with = "loose_text::deserialize")]
    pub category: Option<String>,
}

impl UpstreamRecord {
    /// Anything that is not a JSON object carries no usable field.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// Response body of the service list call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl UpstreamEnvelope {
    #[must_use]
    pub fn into_records(self) -> Vec<UpstreamRecord> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(UpstreamRecord::from_value)
            .collect()
    }
}

pub fn decode_upstream_payload(bytes: &[u8]) -> Result<Vec<UpstreamRecord>, ValidationError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ValidationError(format!("upstream payload is not json: {e}")))?;
    if !value.is_object() {
        return Err(ValidationError(
            "upstream payload must be a json object".to_string(),
        ));
    }
    let envelope: UpstreamEnvelope = serde_json::from_value(value)
        .map_err(|e| ValidationError(format!("upstream envelope decode failed: {e}")))?;
    Ok(envelope.into_records())
}

/// Decodes and maps a whole payload, preserving upstream order.
pub fn normalize_upstream_payload(bytes: &[u8]) -> Result<Vec<Policy>, ValidationError> {
    Ok(decode_upstream_payload(bytes)?
        .into_iter()
        .enumerate()
        .map(|(idx, record)| Policy::from_upstream(idx, record))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_elements_fall_back_to_placeholders() {
        let bytes = serde_json::to_vec(&json!({"data": ["x", 3, null, [1, 2]]})).expect("json");
        let policies = normalize_upstream_payload(&bytes).expect("decode");
        assert_eq!(policies.len(), 4);
        assert_eq!(
            policies.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["0", "1", "2", "3"]
        );
        assert!(policies.iter().all(|p| p.title == crate::DEFAULT_TITLE));
    }

    #[test]
    fn missing_or_null_data_is_an_empty_list() {
        assert!(normalize_upstream_payload(br#"{}"#).expect("empty").is_empty());
        assert!(normalize_upstream_payload(br#"{"data":null}"#)
            .expect("null data")
            .is_empty());
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(normalize_upstream_payload(b"<html>").is_err());
        assert!(normalize_upstream_payload(br#"[1,2]"#).is_err());
        assert!(normalize_upstream_payload(br#"{"data":{"a":1}}"#).is_err());
    }

    #[test]
    fn loose_cells_map_to_text_or_absent() {
        let record = UpstreamRecord::from_value(json!({
            "서비스ID": 1001,
            "서비스명": "마케팅 바우처",
            "지원유형": "",
            "신청기한": false,
            "unrelated": true
        }));
        assert_eq!(record.service_id.as_deref(), Some("1001"));
        assert_eq!(record.title.as_deref(), Some("마케팅 바우처"));
        assert_eq!(record.category, None);
        assert_eq!(record.period, None);
    }

    #[test]
    fn numeric_ids_render_like_plain_numbers_and_zero_falls_back() {
        let bytes = serde_json::to_vec(&json!({"data": [
            {"서비스ID": 1.0},
            {"서비스ID": 0},
            {"서비스ID": 2.5},
            {"서비스ID": 0.0}
        ]}))
        .expect("json");
        let ids = normalize_upstream_payload(&bytes)
            .expect("decode")
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "1", "2.5", "3"]);
    }
}
