use policy_desk_api::{parse_listing_page_params, parse_listing_query, ApiErrorCode};
use policy_desk_query::{CategorySelection, SortMode};
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn empty_query_selects_everything_in_default_order() {
    let parsed = parse_listing_page_params(&BTreeMap::new()).expect("defaults");
    assert_eq!(parsed.query.filter.category, CategorySelection::All);
    assert_eq!(parsed.query.filter.keyword, "");
    assert_eq!(parsed.query.sort, SortMode::Default);
    assert!(!parsed.load);
}

#[test]
fn category_sentinels_all_mean_every_category() {
    for raw in ["ALL", "all", "전체", "", "  "] {
        let parsed = parse_listing_query(&query(&[("category", raw)])).expect("category");
        assert_eq!(parsed.filter.category, CategorySelection::All, "{raw:?}");
    }
    let named = parse_listing_query(&query(&[("category", "자금")])).expect("named");
    assert_eq!(
        named.filter.category,
        CategorySelection::Named("자금".to_string())
    );
}

#[test]
fn unknown_sort_is_an_invalid_parameter() {
    let err = parse_listing_query(&query(&[("sort", "newest")])).expect_err("bad sort");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    assert_eq!(err.details["field_errors"][0]["parameter"], "sort");
    assert_eq!(err.details["field_errors"][0]["value"], "newest");
}

#[test]
fn long_hangul_keyword_is_accepted_verbatim() {
    let long = "가".repeat(200);
    let parsed = parse_listing_query(&query(&[("keyword", &long)])).expect("long keyword");
    assert_eq!(parsed.filter.keyword, long);
}

#[test]
fn reserved_region_and_stage_are_carried_when_present() {
    let parsed = parse_listing_query(&query(&[("region", "전국"), ("stage", " ")])).expect("ok");
    assert_eq!(parsed.filter.region.as_deref(), Some("전국"));
    assert_eq!(parsed.filter.stage, None);
}

#[test]
fn load_flag_accepts_one_and_true() {
    for raw in ["1", "true", "TRUE"] {
        assert!(parse_listing_page_params(&query(&[("load", raw)])).expect("load").load);
    }
    assert!(!parse_listing_page_params(&query(&[("load", "0")])).expect("load").load);
}
