// SPDX-License-Identifier: Apache-2.0

use crate::listing::{derive_listing, ListingOutcome, ListingQuery};
use crate::lookup::{lookup_policy, DetailOutcome};
use policy_desk_model::Policy;
use std::fmt::Display;

/// `Idle -> Loading -> Ready | Failed`.
///
/// `begin` is legal from every state. There is no cancellation: when two
/// fetches overlap, whichever resolves last overwrites the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingDisplay {
    NotLoaded,
    Loading,
    Failed(String),
    Ready(ListingOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct ListingView {
    pub query: ListingQuery,
    state: ViewState<Vec<Policy>>,
}

impl ListingView {
    #[must_use]
    pub fn new(query: ListingQuery) -> Self {
        Self {
            query,
            state: ViewState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<Vec<Policy>> {
        &self.state
    }

    pub fn begin_fetch(&mut self) {
        self.state.begin();
    }

    pub fn resolve_fetch<E: Display>(&mut self, result: Result<Vec<Policy>, E>) {
        self.state.resolve(result);
    }

    /// Filters and sorts are derived on demand, so changing the query never
    /// needs a refetch.
    #[must_use]
    pub fn display(&self) -> ListingDisplay {
        match &self.state {
            ViewState::Idle => ListingDisplay::NotLoaded,
            ViewState::Loading => ListingDisplay::Loading,
            ViewState::Failed(msg) => ListingDisplay::Failed(msg.clone()),
            ViewState::Ready(list) => ListingDisplay::Ready(derive_listing(list, &self.query)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub id: String,
    state: ViewState<DetailOutcome>,
}

impl DetailView {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: ViewState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<DetailOutcome> {
        &self.state
    }

    pub fn begin_fetch(&mut self) {
        self.state.begin();
    }

    /// Takes the whole freshly fetched list and scans it for `self.id`.
    pub fn resolve_fetch<E: Display>(&mut self, result: Result<Vec<Policy>, E>) {
        let id = self.id.clone();
        self.state
            .resolve(result.map(|list| lookup_policy(&list, &id)));
    }
}
