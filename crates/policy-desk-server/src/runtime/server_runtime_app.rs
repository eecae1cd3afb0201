// SPDX-License-Identifier: Apache-2.0

use crate::config::ApiConfig;
use crate::http;
use crate::middleware::request_tracing::request_tracing_middleware;
use crate::source::PolicySource;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use policy_desk_api::{HEALTH_ROUTE, OPENAPI_ROUTE, POLICIES_ROUTE};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PolicySource>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn PolicySource>) -> Self {
        Self::with_config(source, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(source: Arc<dyn PolicySource>, api: ApiConfig) -> Self {
        Self {
            source,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::pages::listing_page_handler))
        .route("/policy/:id", get(http::pages::detail_page_handler))
        .route(POLICIES_ROUTE, get(http::handlers::policies_handler))
        .route(OPENAPI_ROUTE, get(http::handlers::openapi_handler))
        .route(HEALTH_ROUTE, get(http::handlers::healthz_handler))
        .route("/debug/source", get(http::handlers::debug_source_handler))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .with_state(state)
}
