mod server_support;

use policy_desk_server::{AppState, PolicySource, StaticSource};
use server_support::{header, send_raw, spawn_app, TWO_RECORDS};
use std::sync::Arc;

fn fixture_state() -> AppState {
    let source: Arc<dyn PolicySource> = Arc::new(StaticSource::from_payload(TWO_RECORDS.as_bytes()));
    AppState::new(source)
}

#[tokio::test]
async fn listing_page_is_idle_until_load_is_requested() {
    let addr = spawn_app(fixture_state()).await;
    let (status, head, body) = send_raw(addr, "/", &[]).await;
    assert_eq!(status, 200);
    assert!(header(&head, "content-type")
        .is_some_and(|v| v.starts_with("text/html")));
    assert!(body.contains("상단 버튼을 눌러"));
    assert!(!body.contains("policy-card-link"));
}

#[tokio::test]
async fn loaded_listing_renders_cards_in_upstream_order() {
    let addr = spawn_app(fixture_state()).await;
    let (status, _, body) = send_raw(addr, "/?load=1", &[]).await;
    assert_eq!(status, 200);
    let first = body.find("청년창업지원").expect("first card");
    let second = body.find("수출 바우처").expect("second card");
    assert!(first < second);
    assert!(body.contains("href=\"/policy/1\""));
    assert!(body.contains("href=\"/policy/2\""));
}

#[tokio::test]
async fn keyword_narrows_the_loaded_listing() {
    let addr = spawn_app(fixture_state()).await;
    // 창업
    let (status, _, body) = send_raw(addr, "/?load=1&keyword=%EC%B0%BD%EC%97%85", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("청년창업지원"));
    assert!(!body.contains("수출 바우처"));
}

#[tokio::test]
async fn filter_with_no_hits_shows_the_no_match_hint() {
    let addr = spawn_app(fixture_state()).await;
    let (_, _, body) = send_raw(addr, "/?load=1&keyword=zzz", &[]).await;
    assert!(body.contains("선택한 필터에 맞는 결과가 없습니다"));
}

#[tokio::test]
async fn long_hangul_keyword_is_filtered_not_rejected() {
    let addr = spawn_app(fixture_state()).await;
    let keyword = "%EC%B0%BD%EC%97%85".repeat(100);
    let (status, _, body) = send_raw(addr, &format!("/?load=1&keyword={keyword}"), &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("선택한 필터에 맞는 결과가 없습니다"));
}

#[tokio::test]
async fn unknown_sort_is_a_bad_request_page() {
    let addr = spawn_app(fixture_state()).await;
    let (status, _, body) = send_raw(addr, "/?sort=newest&load=1", &[]).await;
    assert_eq!(status, 400);
    assert!(body.contains("invalid query parameter: sort"));
}

#[tokio::test]
async fn title_sort_reorders_cards() {
    let addr = spawn_app(fixture_state()).await;
    let (_, _, body) = send_raw(addr, "/?load=1&sort=title", &[]).await;
    let export = body.find("수출 바우처").expect("export card");
    let startup = body.find("청년창업지원").expect("startup card");
    assert!(export < startup);
    assert!(body.contains("<option value=\"title\" selected>"));
}

#[tokio::test]
async fn detail_page_finds_policy_by_id() {
    let addr = spawn_app(fixture_state()).await;
    let (status, _, body) = send_raw(addr, "/policy/2", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("<h1 class=\"policy-detail-title\">수출 바우처</h1>"));
    assert!(body.contains("← 목록으로 돌아가기"));
}

#[tokio::test]
async fn detail_page_for_absent_id_is_not_found() {
    let addr = spawn_app(fixture_state()).await;
    let (status, _, body) = send_raw(addr, "/policy/999", &[]).await;
    assert_eq!(status, 404);
    assert!(body.contains("해당 지원사업 정보를 찾을 수 없습니다."));
}

#[tokio::test]
async fn detail_page_reports_fetch_failure() {
    let source: Arc<dyn PolicySource> = Arc::new(StaticSource::from_payload(b"oops".to_vec()));
    let addr = spawn_app(AppState::new(source)).await;
    let (status, _, body) = send_raw(addr, "/policy/1", &[]).await;
    assert_eq!(status, 500);
    assert!(body.contains("서버 요청 실패"));
}

#[tokio::test]
async fn listing_page_reports_fetch_failure() {
    let source: Arc<dyn PolicySource> = Arc::new(StaticSource::from_payload(b"oops".to_vec()));
    let addr = spawn_app(AppState::new(source)).await;
    let (status, _, body) = send_raw(addr, "/?load=1", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("서버 요청에 실패했습니다."));
}
