// SPDX-License-Identifier: Apache-2.0

pub(crate) mod handlers;
pub mod html;
pub(crate) mod pages;
pub(crate) mod request_tracing;
pub(crate) mod response_contract;
