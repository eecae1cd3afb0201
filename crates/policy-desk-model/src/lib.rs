#![forbid(unsafe_code)]
//! Policy model SSOT.
//!
//! Everything the upstream service hands us passes through
//! [`UpstreamRecord`] before it becomes a [`Policy`]; no other crate reads the
//! upstream field names.

mod policy;
mod serde_helpers;
mod upstream;

pub use policy::{
    Policy, ValidationError, DEFAULT_BENEFIT, DEFAULT_CATEGORY, DEFAULT_PERIOD, DEFAULT_PROVIDER,
    DEFAULT_TARGET, DEFAULT_TITLE, NATIONWIDE_REGION,
};
pub use upstream::{
    decode_upstream_payload, normalize_upstream_payload, UpstreamEnvelope, UpstreamRecord,
    KEY_BENEFIT, KEY_CATEGORY, KEY_PERIOD, KEY_PROVIDER, KEY_SERVICE_ID, KEY_TARGET, KEY_TITLE,
};

pub const CRATE_NAME: &str = "policy-desk-model";
