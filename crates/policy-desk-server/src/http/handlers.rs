// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use policy_desk_api::{openapi_v1_spec, ErrorBodyDto, HealthDto, POLICY_SOURCE_HEADER};
use serde_json::json;
use tracing::error;

/// Upstream-shaped failures answer `200 []`; only an undecodable body is a
/// `500`.
pub(crate) async fn policies_handler(State(state): State<AppState>) -> Response {
    match state.source.fetch_policies().await {
        Ok(fetch) => {
            let mut resp = (StatusCode::OK, Json(fetch.policies)).into_response();
            if let Ok(value) = HeaderValue::from_str(&fetch.outcome.header_value()) {
                resp.headers_mut().insert(POLICY_SOURCE_HEADER, value);
            }
            resp
        }
        Err(e) => {
            error!(error = %e, adapter = state.source.source_tag(), "policy fetch failed");
            let mut resp = (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBodyDto::server_error()),
            )
                .into_response();
            resp.headers_mut()
                .insert(POLICY_SOURCE_HEADER, HeaderValue::from_static("error"));
            resp
        }
    }
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(HealthDto::ok())
}

pub(crate) async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_v1_spec())
}

pub(crate) async fn debug_source_handler(State(state): State<AppState>) -> Response {
    if !state.api.enable_debug_pages {
        return (StatusCode::NOT_FOUND, "disabled").into_response();
    }
    Json(json!({
        "config_schema_version": crate::config::CONFIG_SCHEMA_VERSION,
        "api": state.api,
        "source": state.source.describe(),
    }))
    .into_response()
}
