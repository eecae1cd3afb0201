// SPDX-License-Identifier: Apache-2.0

//! Server-rendered listing and detail pages.

use policy_desk_api::messages::{
    APPLY_NOTE, BACK_TO_LIST, HINT_NOT_LOADED, HINT_NO_MATCHES,
    KEYWORD_PLACEHOLDER, LABEL_CATEGORY, LABEL_KEYWORD, LABEL_PERIOD, LABEL_REGION, LABEL_SORT,
    LABEL_STAGE, LABEL_TARGET, LOADING_DETAIL, LOADING_LISTING, LOAD_BUTTON, LOAD_BUTTON_HINT,
    SECTION_BENEFIT, SECTION_PERIOD, SECTION_TARGET,
};
use policy_desk_api::{policy_path, ApiError, ListingPageParams};
use policy_desk_model::Policy;
use policy_desk_query::{
    CategorySelection, DetailOutcome, ListingDisplay, ListingOutcome, SortMode, ViewState,
    CATEGORY_ALL_LABEL, CATEGORY_OPTIONS, REGION_OPTIONS, STAGE_OPTIONS,
};

const SITE_TITLE: &str = "소상공인 정책 큐레이션";

#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"ko\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title></head><body><div class=\"page\">{body}\
<footer class=\"footer\"><p>{SITE_TITLE}</p></footer></div></body></html>",
        escape_html(title)
    )
}

fn select(name: &str, label: &str, options: &[(&str, &str)], current: &str) -> String {
    let mut html = format!(
        "<div class=\"filter-group\"><label class=\"filter-label\" for=\"{name}\">{label}</label>\
<select class=\"filter-select\" id=\"{name}\" name=\"{name}\">"
    );
    for (value, text) in options {
        let selected = if *value == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            escape_html(value),
            escape_html(text)
        ));
    }
    html.push_str("</select></div>");
    html
}

fn labelled(options: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    options.iter().map(|o| (*o, *o)).collect()
}

fn filter_bar(params: &ListingPageParams) -> String {
    let filter = &params.query.filter;
    let category = match &filter.category {
        CategorySelection::All => CATEGORY_ALL_LABEL,
        CategorySelection::Named(v) => v.as_str(),
    };
    let sort_options = SortMode::ALL
        .iter()
        .map(|m| (m.as_str(), m.label()))
        .collect::<Vec<_>>();
    format!(
        "<form class=\"filter-bar\" method=\"get\" action=\"/\">\
<input type=\"hidden\" name=\"load\" value=\"1\">\
{}{}{}\
<div class=\"filter-group\"><label class=\"filter-label\" for=\"keyword\">{LABEL_KEYWORD}</label>\
<input class=\"filter-input\" id=\"keyword\" name=\"keyword\" placeholder=\"{}\" value=\"{}\"></div>\
{}\
<div class=\"hero-actions\"><button class=\"hero-button\" type=\"submit\">{LOAD_BUTTON}</button>\
<span class=\"hero-hint\">{LOAD_BUTTON_HINT}</span></div></form>",
        select(
            "region",
            LABEL_REGION,
            &labelled(&REGION_OPTIONS),
            filter.region.as_deref().unwrap_or(CATEGORY_ALL_LABEL)
        ),
        select(
            "stage",
            LABEL_STAGE,
            &labelled(&STAGE_OPTIONS),
            filter.stage.as_deref().unwrap_or(CATEGORY_ALL_LABEL)
        ),
        select(
            "category",
            LABEL_CATEGORY,
            &labelled(&CATEGORY_OPTIONS),
            category
        ),
        escape_html(KEYWORD_PLACEHOLDER),
        escape_html(&filter.keyword),
        select("sort", LABEL_SORT, &sort_options, params.query.sort.as_str()),
    )
}

fn policy_card(policy: &Policy) -> String {
    format!(
        "<a class=\"policy-card-link\" href=\"{}\"><article class=\"policy-card\">\
<div class=\"policy-header\"><h2 class=\"policy-title\">{}</h2><span class=\"policy-badge\">{}</span></div>\
<div class=\"policy-meta\"><span>{}</span><span class=\"policy-dot\">·</span><span>{}</span></div>\
<p class=\"policy-benefit\">{}</p>\
<p class=\"policy-target\"><span class=\"policy-label\">{LABEL_TARGET}</span>{}</p>\
<p class=\"policy-period\"><span class=\"policy-label\">{LABEL_PERIOD}</span>{}</p>\
</article></a>",
        escape_html(&policy_path(&policy.id)),
        escape_html(&policy.title),
        escape_html(&policy.category),
        escape_html(&policy.provider),
        escape_html(&policy.region),
        escape_html(&policy.benefit),
        escape_html(&policy.target),
        escape_html(&policy.period),
    )
}

fn hint(text: &str) -> String {
    format!("<p class=\"status-hint\">{}</p>", escape_html(text))
}

fn status_error(text: &str) -> String {
    format!("<p class=\"status-error\">{}</p>", escape_html(text))
}

#[must_use]
pub fn render_listing_page(params: &ListingPageParams, display: &ListingDisplay) -> String {
    let (status, cards) = match display {
        ListingDisplay::NotLoaded => (hint(HINT_NOT_LOADED), String::new()),
        ListingDisplay::Loading => (hint(LOADING_LISTING), String::new()),
        ListingDisplay::Failed(message) => (status_error(message), String::new()),
        ListingDisplay::Ready(ListingOutcome::SourceEmpty) => (hint(HINT_NOT_LOADED), String::new()),
        ListingDisplay::Ready(ListingOutcome::NoMatches) => (String::new(), hint(HINT_NO_MATCHES)),
        ListingDisplay::Ready(ListingOutcome::Matches(list)) => (
            String::new(),
            list.iter().map(policy_card).collect::<String>(),
        ),
    };
    let body = format!(
        "<header class=\"hero\"><div class=\"hero-badge\">소상공인 · 예비창업자 전용</div>\
<h1 class=\"hero-title\">내가 받을 수 있는<br>정부지원 사업 한 번에 확인하기</h1>\
<p class=\"hero-subtitle\">보조금24 공공서비스 API와 연동하여 실제 정부·지자체 지원사업 정보를 가져옵니다.</p>\
</header>{}<section class=\"status-area\">{status}</section><main class=\"policy-list\">{cards}</main>",
        filter_bar(params)
    );
    layout(SITE_TITLE, &body)
}

fn detail_card(policy: &Policy) -> String {
    format!(
        "<article class=\"policy-detail-card\"><div class=\"policy-detail-header\">\
<h1 class=\"policy-detail-title\">{}</h1><span class=\"policy-badge\">{}</span></div>\
<div class=\"policy-detail-meta\"><span>{}</span><span class=\"policy-dot\">·</span><span>{}</span></div>\
<section class=\"policy-detail-section\"><h2>{SECTION_BENEFIT}</h2><p>{}</p></section>\
<section class=\"policy-detail-section\"><h2>{SECTION_TARGET}</h2><p>{}</p></section>\
<section class=\"policy-detail-section\"><h2>{SECTION_PERIOD}</h2><p>{}</p></section>\
<div class=\"policy-detail-footer\"><p class=\"detail-note\">{APPLY_NOTE}</p></div></article>",
        escape_html(&policy.title),
        escape_html(&policy.category),
        escape_html(&policy.provider),
        escape_html(&policy.region),
        escape_html(&policy.benefit),
        escape_html(&policy.target),
        escape_html(&policy.period),
    )
}

#[must_use]
pub fn render_detail_page(state: &ViewState<DetailOutcome>) -> String {
    let (title, content) = match state {
        ViewState::Idle | ViewState::Loading => (SITE_TITLE.to_string(), hint(LOADING_DETAIL)),
        ViewState::Failed(message) => (SITE_TITLE.to_string(), status_error(message)),
        ViewState::Ready(DetailOutcome::NotFound { .. }) => (
            SITE_TITLE.to_string(),
            status_error(policy_desk_api::messages::POLICY_NOT_FOUND),
        ),
        ViewState::Ready(DetailOutcome::Found(policy)) => {
            (policy.title.clone(), detail_card(policy))
        }
    };
    let body = format!(
        "<div class=\"policy-detail\"><div class=\"policy-detail-top\">\
<a href=\"/\" class=\"back-link\">{BACK_TO_LIST}</a></div>{content}</div>"
    );
    layout(&title, &body)
}

/// Page for a request that was rejected before any fetch.
#[must_use]
pub fn render_error_page(error: &ApiError) -> String {
    let body = format!(
        "<div class=\"policy-detail\"><div class=\"policy-detail-top\">\
<a href=\"/\" class=\"back-link\">{BACK_TO_LIST}</a></div>{}</div>",
        status_error(&error.message)
    );
    layout(SITE_TITLE, &body)
}
