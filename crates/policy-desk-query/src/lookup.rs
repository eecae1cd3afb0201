// SPDX-License-Identifier: Apache-2.0

use policy_desk_model::Policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(Policy),
    NotFound { id: String },
}

/// Linear scan, first match wins. Lists are a few dozen entries at most, so
/// no index is kept next to the list.
#[must_use]
pub fn find_policy<'a>(policies: &'a [Policy], id: &str) -> Option<&'a Policy> {
    policies.iter().find(|p| p.id == id)
}

#[must_use]
pub fn lookup_policy(policies: &[Policy], id: &str) -> DetailOutcome {
    match find_policy(policies, id) {
        Some(policy) => DetailOutcome::Found(policy.clone()),
        None => DetailOutcome::NotFound { id: id.to_string() },
    }
}
