// SPDX-License-Identifier: Apache-2.0

use crate::collation::compare_localized;
use crate::query_error::QueryError;
use policy_desk_model::Policy;
use serde::{Deserialize, Serialize};

pub const CATEGORY_ALL: &str = "ALL";
pub const CATEGORY_ALL_LABEL: &str = "전체";
pub const CATEGORY_OPTIONS: [&str; 5] = ["전체", "자금", "교육", "마케팅", "기타"];
pub const REGION_OPTIONS: [&str; 2] = ["전체", "전국"];
pub const STAGE_OPTIONS: [&str; 5] = [
    "전체",
    "예비창업",
    "창업 1년 미만",
    "창업 1~3년",
    "창업 3년 이상",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// `ALL`, `전체` and blank input all select every category.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(CATEGORY_ALL) || value == CATEGORY_ALL_LABEL
        {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => CATEGORY_ALL,
            Self::Named(v) => v,
        }
    }

    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(v) => category.contains(v.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Default,
    Title,
    Provider,
}

impl SortMode {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        match raw.trim() {
            "" | "default" => Ok(Self::Default),
            "title" => Ok(Self::Title),
            "provider" => Ok(Self::Provider),
            other => Err(QueryError::validation(format!(
                "unknown sort mode: {other} (expected default, title or provider)"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Title => "title",
            Self::Provider => "provider",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "기본 순서",
            Self::Title => "사업명 가나다순",
            Self::Provider => "기관명 가나다순",
        }
    }

    pub const ALL: [Self; 3] = [Self::Default, Self::Title, Self::Provider];
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    pub category: CategorySelection,
    pub keyword: String,
    /// Reserved: the upstream payload carries no region, so this never
    /// narrows the list.
    pub region: Option<String>,
    /// Reserved: no business-stage field exists yet.
    pub stage: Option<String>,
}

impl ListingFilter {
    #[must_use]
    pub fn normalized_keyword(&self) -> String {
        self.keyword.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub sort: SortMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The fetched list itself was empty.
    SourceEmpty,
    /// The fetched list had entries but the filter rejected all of them.
    NoMatches,
    Matches(Vec<Policy>),
}

impl ListingOutcome {
    #[must_use]
    pub fn policies(&self) -> &[Policy] {
        match self {
            Self::Matches(list) => list,
            Self::SourceEmpty | Self::NoMatches => &[],
        }
    }
}

fn matches_keyword(policy: &Policy, keyword: &str) -> bool {
    keyword.is_empty()
        || [
            &policy.title,
            &policy.benefit,
            &policy.target,
            &policy.provider,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(keyword))
}

fn matches_filter(policy: &Policy, filter: &ListingFilter, keyword: &str) -> bool {
    filter.category.accepts(&policy.category) && matches_keyword(policy, keyword)
}

#[must_use]
pub fn filter_policies(policies: &[Policy], filter: &ListingFilter) -> Vec<Policy> {
    let keyword = filter.normalized_keyword();
    policies
        .iter()
        .filter(|p| matches_filter(p, filter, &keyword))
        .cloned()
        .collect()
}

/// Returns a new, stably sorted list. The input is left untouched.
#[must_use]
pub fn sort_policies(policies: &[Policy], mode: SortMode) -> Vec<Policy> {
    let mut out = policies.to_vec();
    match mode {
        SortMode::Default => {}
        SortMode::Title => out.sort_by(|a, b| compare_localized(&a.title, &b.title)),
        SortMode::Provider => out.sort_by(|a, b| compare_localized(&a.provider, &b.provider)),
    }
    out
}

#[must_use]
pub fn apply_listing(policies: &[Policy], query: &ListingQuery) -> Vec<Policy> {
    sort_policies(&filter_policies(policies, &query.filter), query.sort)
}

#[must_use]
pub fn derive_listing(policies: &[Policy], query: &ListingQuery) -> ListingOutcome {
    if policies.is_empty() {
        return ListingOutcome::SourceEmpty;
    }
    let list = apply_listing(policies, query);
    if list.is_empty() {
        ListingOutcome::NoMatches
    } else {
        ListingOutcome::Matches(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_desk_model::{UpstreamRecord, NATIONWIDE_REGION};

    fn policy(id: &str, title: &str, provider: &str, category: &str) -> Policy {
        let mut p = Policy::from_upstream(0, UpstreamRecord::default());
        p.id = id.to_string();
        p.title = title.to_string();
        p.provider = provider.to_string();
        p.category = category.to_string();
        p
    }

    #[test]
    fn category_parse_recognizes_every_sentinel_spelling() {
        for raw in ["ALL", "all", "전체", "", "  "] {
            assert_eq!(CategorySelection::parse(raw), CategorySelection::All);
        }
        assert_eq!(
            CategorySelection::parse(" 자금 "),
            CategorySelection::Named("자금".to_string())
        );
    }

    #[test]
    fn category_matches_by_substring() {
        let list = vec![
            policy("1", "a", "p", "자금"),
            policy("2", "b", "p", "융자·자금"),
            policy("3", "c", "p", "교육"),
        ];
        let filter = ListingFilter {
            category: CategorySelection::parse("자금"),
            ..ListingFilter::default()
        };
        let ids: Vec<String> = filter_policies(&list, &filter)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn keyword_is_trimmed_and_case_folded() {
        let list = vec![
            policy("1", "Smart Factory 구축", "p", "기타"),
            policy("2", "수출 바우처", "KOTRA", "기타"),
        ];
        let filter = ListingFilter {
            keyword: "  SMART ".to_string(),
            ..ListingFilter::default()
        };
        let out = filter_policies(&list, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");

        let by_provider = ListingFilter {
            keyword: "kotra".to_string(),
            ..ListingFilter::default()
        };
        assert_eq!(filter_policies(&list, &by_provider)[0].id, "2");
    }

    #[test]
    fn keyword_ignores_period_and_category_fields() {
        let mut p = policy("1", "t", "p", "자금");
        p.period = "2024-12-31".to_string();
        let filter = ListingFilter {
            keyword: "2024".to_string(),
            ..ListingFilter::default()
        };
        assert!(filter_policies(&[p], &filter).is_empty());
    }

    #[test]
    fn region_and_stage_are_reserved_no_ops() {
        let list = vec![policy("1", "a", "p", "자금")];
        let filter = ListingFilter {
            region: Some("서울".to_string()),
            stage: Some("창업 3년 이상".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(filter_policies(&list, &filter), list);
        assert_eq!(list[0].region, NATIONWIDE_REGION);
    }

    #[test]
    fn sort_is_stable_and_does_not_touch_input() {
        let list = vec![
            policy("1", "나", "B", "x"),
            policy("2", "가", "A", "x"),
            policy("3", "나", "A", "x"),
        ];
        let before = list.clone();
        let by_title = sort_policies(&list, SortMode::Title);
        assert_eq!(
            by_title.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "1", "3"]
        );
        let by_provider = sort_policies(&list, SortMode::Provider);
        assert_eq!(
            by_provider.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "3", "1"]
        );
        assert_eq!(sort_policies(&list, SortMode::Default), before);
        assert_eq!(list, before);
    }

    #[test]
    fn sort_mode_parse_rejects_unknown_values() {
        assert_eq!(SortMode::parse("").expect("blank"), SortMode::Default);
        assert_eq!(SortMode::parse("provider").expect("provider"), SortMode::Provider);
        assert!(SortMode::parse("newest").is_err());
    }

    #[test]
    fn outcome_distinguishes_empty_source_from_no_matches() {
        let query = ListingQuery {
            filter: ListingFilter {
                keyword: "없는 단어".to_string(),
                ..ListingFilter::default()
            },
            sort: SortMode::Default,
        };
        assert_eq!(derive_listing(&[], &query), ListingOutcome::SourceEmpty);
        assert_eq!(
            derive_listing(&[policy("1", "a", "p", "x")], &query),
            ListingOutcome::NoMatches
        );
        assert_eq!(
            derive_listing(&[], &ListingQuery::default()),
            ListingOutcome::SourceEmpty
        );
    }
}
