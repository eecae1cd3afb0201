#![allow(dead_code)]

use policy_desk_server::{build_router, AppState, GovApiSource, PolicySource, UpstreamConfig};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const SAMPLE: &str = r#"{"data":[{"서비스ID":"1","서비스명":"청년창업지원","소관기관명":"중소벤처기업부","지원대상":"예비창업자","서비스목적요약":"창업자금 지원","신청기한":"2024-12-31","지원유형":"자금"}]}"#;

pub const TWO_RECORDS: &str = r#"{"data":[{"서비스ID":"1","서비스명":"청년창업지원","지원유형":"자금"},{"서비스ID":"2","서비스명":"수출 바우처","소관기관명":"KOTRA","지원유형":"마케팅"}]}"#;

/// Raw-TCP upstream answering every request with the same status and body.
/// Returns the address and the request lines it has seen.
pub async fn spawn_fake_upstream(status: u16, body: &str) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("addr");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_bg = Arc::clone(&seen);
    let body = body.to_string();
    tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(v) => v,
                Err(_) => break,
            };
            let mut req = vec![0u8; 8192];
            let n = stream.read(&mut req).await.unwrap_or(0);
            let req_text = String::from_utf8_lossy(&req[..n]);
            let first = req_text.lines().next().unwrap_or_default().to_string();
            seen_bg.lock().expect("lock seen").push(first);
            let response = format!(
                "HTTP/1.1 {status} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    (addr, seen)
}

pub fn upstream_config(addr: SocketAddr, credential: Option<&str>) -> UpstreamConfig {
    let mut cfg = UpstreamConfig::default();
    cfg.base_url = format!("http://{addr}/api/gov24/v3/serviceList");
    cfg.with_credential(credential.map(ToString::to_string))
}

pub fn gov_source(addr: SocketAddr, credential: Option<&str>) -> Arc<dyn PolicySource> {
    Arc::new(GovApiSource::new(upstream_config(addr, credential)).expect("gov source"))
}

pub async fn spawn_app(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind app");
    let addr = listener.local_addr().expect("addr");
    let app = build_router(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

pub async fn send_raw(
    addr: SocketAddr,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("read response");
    let response = String::from_utf8(response).expect("utf8 response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
