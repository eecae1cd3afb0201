#![forbid(unsafe_code)]
//! Listing engine and detail lookup over an already fetched policy list.
//!
//! Nothing here performs I/O. Callers fetch, then hand the resident list to
//! [`derive_listing`] or [`lookup_policy`].

mod collation;
mod listing;
mod lookup;
mod query_error;
mod view;

pub use collation::{collation_key, compare_localized, CollationKey, ScriptClass};
pub use listing::{
    apply_listing, derive_listing, filter_policies, sort_policies,
    CategorySelection, ListingFilter, ListingOutcome, ListingQuery, SortMode, CATEGORY_ALL,
    CATEGORY_ALL_LABEL, CATEGORY_OPTIONS, REGION_OPTIONS, STAGE_OPTIONS,
};
pub use lookup::{find_policy, lookup_policy, DetailOutcome};
pub use query_error::{QueryError, QueryErrorCode};
pub use view::{DetailView, ListingDisplay, ListingView, ViewState};

pub const CRATE_NAME: &str = "policy-desk-query";
