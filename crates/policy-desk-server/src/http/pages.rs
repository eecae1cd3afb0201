// SPDX-License-Identifier: Apache-2.0

use crate::http::html::{render_detail_page, render_error_page, render_listing_page};
use crate::http::response_contract::{api_error_status, html_response};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use policy_desk_api::messages::{DETAIL_FETCH_FAILED, LISTING_FETCH_FAILED};
use policy_desk_api::{parse_listing_page_params, ApiError};
use policy_desk_query::{DetailOutcome, DetailView, ListingView, ViewState};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub(crate) async fn listing_page_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_listing_page_params(&query) {
        Ok(params) => params,
        Err(err) => {
            warn!(error = %err, "listing page rejected");
            return html_response(api_error_status(&err), render_error_page(&err));
        }
    };

    let mut view = ListingView::new(params.query.clone());
    if params.load {
        view.begin_fetch();
        let result = state
            .source
            .fetch_policies()
            .await
            .map(|fetch| fetch.policies)
            .map_err(|e| {
                warn!(error = %e, "listing fetch failed");
                LISTING_FETCH_FAILED
            });
        view.resolve_fetch(result);
    }
    html_response(StatusCode::OK, render_listing_page(&params, &view.display()))
}

pub(crate) async fn detail_page_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let mut view = DetailView::new(id);
    view.begin_fetch();
    let result = state
        .source
        .fetch_policies()
        .await
        .map(|fetch| fetch.policies)
        .map_err(|e| {
            warn!(error = %e, "detail fetch failed");
            DETAIL_FETCH_FAILED
        });
    view.resolve_fetch(result);

    let status = match view.state() {
        ViewState::Ready(DetailOutcome::Found(_)) => StatusCode::OK,
        ViewState::Ready(DetailOutcome::NotFound { id }) => {
            info!(id = %id, "policy not found");
            api_error_status(&ApiError::policy_not_found(id))
        }
        ViewState::Failed(message) => api_error_status(&ApiError::upstream_payload_invalid(message)),
        ViewState::Idle | ViewState::Loading => StatusCode::OK,
    };
    html_response(status, render_detail_page(view.state()))
}
