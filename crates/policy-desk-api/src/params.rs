// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use policy_desk_query::{CategorySelection, ListingFilter, ListingQuery, SortMode};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPageParams {
    pub query: ListingQuery,
    /// The listing page stays idle until the caller asks for a fetch.
    pub load: bool,
}

fn reserved(query: &BTreeMap<String, String>, name: &str) -> Option<String> {
    query
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

pub fn parse_listing_query(query: &BTreeMap<String, String>) -> Result<ListingQuery, ApiError> {
    let category = query
        .get("category")
        .map(|raw| CategorySelection::parse(raw))
        .unwrap_or_default();

    let keyword = query.get("keyword").cloned().unwrap_or_default();

    let sort = match query.get("sort") {
        Some(raw) => SortMode::parse(raw).map_err(|_| ApiError::invalid_param("sort", raw))?,
        None => SortMode::Default,
    };

    Ok(ListingQuery {
        filter: ListingFilter {
            category,
            keyword,
            region: reserved(query, "region"),
            stage: reserved(query, "stage"),
        },
        sort,
    })
}

pub fn parse_listing_page_params(
    query: &BTreeMap<String, String>,
) -> Result<ListingPageParams, ApiError> {
    Ok(ListingPageParams {
        query: parse_listing_query(query)?,
        load: query
            .get("load")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
    })
}
