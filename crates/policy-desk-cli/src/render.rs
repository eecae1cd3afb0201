// SPDX-License-Identifier: Apache-2.0

use policy_desk_api::messages::{
    APPLY_NOTE, HINT_NO_MATCHES, LABEL_PERIOD, LABEL_TARGET, LOADING_LISTING, SECTION_BENEFIT,
    SECTION_PERIOD, SECTION_TARGET, SOURCE_EMPTY,
};
use policy_desk_model::Policy;
use policy_desk_query::{ListingDisplay, ListingOutcome};

#[must_use]
pub fn render_card(policy: &Policy) -> String {
    format!(
        "[{}] {}  (id {})\n  {} · {}\n  {}\n  {LABEL_TARGET}: {}\n  {LABEL_PERIOD}: {}\n",
        policy.category,
        policy.title,
        policy.id,
        policy.provider,
        policy.region,
        policy.benefit,
        policy.target,
        policy.period,
    )
}

/// Text for a listing view. `Failed` is not rendered here; callers report
/// it on stderr.
#[must_use]
pub fn render_listing(display: &ListingDisplay) -> String {
    match display {
        ListingDisplay::NotLoaded | ListingDisplay::Failed(_) => String::new(),
        ListingDisplay::Loading => format!("{LOADING_LISTING}\n"),
        ListingDisplay::Ready(ListingOutcome::SourceEmpty) => format!("{SOURCE_EMPTY}\n"),
        ListingDisplay::Ready(ListingOutcome::NoMatches) => format!("{HINT_NO_MATCHES}\n"),
        ListingDisplay::Ready(ListingOutcome::Matches(list)) => list
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[must_use]
pub fn render_detail(policy: &Policy) -> String {
    format!(
        "{} [{}]\n{} · {}\n\n{SECTION_BENEFIT}\n  {}\n{SECTION_TARGET}\n  {}\n{SECTION_PERIOD}\n  {}\n\n{APPLY_NOTE}\n",
        policy.title,
        policy.category,
        policy.provider,
        policy.region,
        policy.benefit,
        policy.target,
        policy.period,
    )
}
