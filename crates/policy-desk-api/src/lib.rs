#![forbid(unsafe_code)]

pub mod dto;
pub mod error_mapping;
pub mod errors;
pub mod messages;
pub mod params;

pub use dto::{ErrorBodyDto, HealthDto, SERVER_ERROR_MESSAGE};
pub use error_mapping::{map_error, ApiErrorMapping, API_ERROR_SCHEMA_REF};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_listing_page_params, parse_listing_query, ListingPageParams};

use serde_json::{json, Value};

pub const CRATE_NAME: &str = "policy-desk-api";
pub const POLICIES_ROUTE: &str = "/api/policies";
pub const OPENAPI_ROUTE: &str = "/api/openapi.json";
pub const HEALTH_ROUTE: &str = "/healthz";
pub const POLICY_SOURCE_HEADER: &str = "x-policy-source";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Percent-encodes everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte));
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// Detail page link for a policy id.
#[must_use]
pub fn policy_path(id: &str) -> String {
    format!("/policy/{}", encode_component(id))
}

#[must_use]
pub fn openapi_v1_spec() -> Value {
    let error_codes = ApiErrorCode::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>();
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "policy-desk API",
        "version": "v1"
      },
      "paths": {
        "/api/openapi.json": {
          "get": {"responses": {"200": {"description": "this document"}}}
        },
        "/api/policies": {
          "get": {
            "responses": {
              "200": {
                "description": "policies in upstream order; empty when the upstream is unconfigured or unavailable",
                "headers": {
                  "x-policy-source": {"schema": {"type": "string"}, "description": "adapter outcome: ok, missing-credential, upstream-status-<code>, transport"}
                },
                "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/Policy"}}}}
              },
              "500": {"description": "upstream payload could not be decoded", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorBody"}}}}
            }
          }
        },
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}}
      },
      "components": {
        "schemas": {
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object"}
            }
          },
          "ApiErrorCode": {
            "type": "string",
            "enum": error_codes
          },
          "ErrorBody": {
            "type": "object",
            "required": ["error"],
            "additionalProperties": false,
            "properties": {"error": {"type": "string"}}
          },
          "Policy": {
            "type": "object",
            "required": ["id", "title", "provider", "region", "target", "benefit", "period", "category"],
            "additionalProperties": false,
            "properties": {
              "benefit": {"type": "string", "minLength": 1},
              "category": {"type": "string", "minLength": 1},
              "id": {"type": "string", "minLength": 1},
              "period": {"type": "string", "minLength": 1},
              "provider": {"type": "string", "minLength": 1},
              "region": {"type": "string", "minLength": 1},
              "target": {"type": "string", "minLength": 1},
              "title": {"type": "string", "minLength": 1}
            }
          }
        }
      }
    })
}
