#![forbid(unsafe_code)]
//! HTTP front for the policy desk: the listing endpoint backed by the
//! subsidy service list, plus server-rendered listing and detail pages.

mod config;
mod http;
mod middleware;
mod runtime;
pub mod source;

pub use config::{
    validate_startup_config, ApiConfig, UpstreamConfig, CONFIG_SCHEMA_VERSION, DEFAULT_BIND_ADDR,
    DEFAULT_UPSTREAM_URL,
};
pub use http::html::{escape_html, render_detail_page, render_listing_page};
pub use runtime::server_runtime_app::{build_router, AppState};
pub use source::{
    FetchOutcome, GovApiSource, PolicySource, SourceError, SourceFetch, StaticSource,
};

pub const CRATE_NAME: &str = "policy-desk-server";
