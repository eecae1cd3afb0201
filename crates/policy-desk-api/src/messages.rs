// SPDX-License-Identifier: Apache-2.0

//! User-facing Korean copy shared by the HTML pages and the terminal client.

pub const HINT_NOT_LOADED: &str =
    "상단 버튼을 눌러 최신 소상공인·예비창업자 지원사업을 불러와 보세요.";
pub const HINT_NO_MATCHES: &str =
    "선택한 필터에 맞는 결과가 없습니다. 조건을 조금 넓게 조정해 보세요.";
pub const SOURCE_EMPTY: &str = "불러온 지원사업이 없습니다.";
pub const LOADING_LISTING: &str = "지원사업 불러오는 중...";
pub const LOADING_DETAIL: &str = "지원사업 정보를 불러오는 중입니다...";
pub const LISTING_FETCH_FAILED: &str = "서버 요청에 실패했습니다.";
pub const DETAIL_FETCH_FAILED: &str = "서버 요청 실패";
pub const POLICY_NOT_FOUND: &str = "해당 지원사업 정보를 찾을 수 없습니다.";
pub const LOAD_BUTTON: &str = "지금 받을 수 있는 지원사업 보기";
pub const LOAD_BUTTON_HINT: &str = "버튼 한 번으로 최신 지원사업 목록을 불러옵니다.";
pub const BACK_TO_LIST: &str = "← 목록으로 돌아가기";
pub const APPLY_NOTE: &str =
    "실제 신청은 각 기관의 공식 홈페이지 또는 정부24/보조금24에서 진행해야 합니다.";

pub const LABEL_REGION: &str = "지역";
pub const LABEL_STAGE: &str = "사업 단계";
pub const LABEL_CATEGORY: &str = "지원 유형";
pub const LABEL_KEYWORD: &str = "키워드 검색";
pub const LABEL_SORT: &str = "정렬";
pub const LABEL_TARGET: &str = "지원대상";
pub const LABEL_PERIOD: &str = "신청기간";
pub const SECTION_BENEFIT: &str = "지원 내용";
pub const SECTION_TARGET: &str = "지원 대상";
pub const SECTION_PERIOD: &str = "신청 기간";
pub const KEYWORD_PLACEHOLDER: &str = "사업명 / 내용 / 대상 / 기관명";
