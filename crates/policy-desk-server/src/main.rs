#![forbid(unsafe_code)]

use policy_desk_server::{
    build_router, validate_startup_config, ApiConfig, AppState, GovApiSource, PolicySource,
    StaticSource, UpstreamConfig, DEFAULT_BIND_ADDR, DEFAULT_UPSTREAM_URL,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_opt_duration_ms(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn env_nonblank(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("POLICY_DESK_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let api_cfg = ApiConfig {
        enable_debug_pages: env_bool("POLICY_DESK_ENABLE_DEBUG_PAGES", false),
    };
    let mut upstream_cfg = UpstreamConfig::default();
    upstream_cfg.base_url = env_nonblank("POLICY_DESK_UPSTREAM_URL")
        .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
    upstream_cfg.page = env_u64("POLICY_DESK_UPSTREAM_PAGE", 1);
    upstream_cfg.per_page = env_u64("POLICY_DESK_UPSTREAM_PER_PAGE", 20);
    upstream_cfg.timeout = env_opt_duration_ms("POLICY_DESK_UPSTREAM_TIMEOUT_MS");
    let upstream_cfg = upstream_cfg.with_credential(env::var("GOV_API_SERVICE_KEY").ok());
    validate_startup_config(&upstream_cfg)?;

    let source: Arc<dyn PolicySource> = match env_nonblank("POLICY_DESK_FIXTURE_PATH") {
        Some(path) => {
            info!(path = %path, "serving policies from a local fixture");
            Arc::new(StaticSource::from_path(&PathBuf::from(path)).map_err(|e| e.to_string())?)
        }
        None => {
            if !upstream_cfg.has_credential() {
                warn!("GOV_API_SERVICE_KEY is not set; /api/policies will answer with an empty list");
            }
            Arc::new(GovApiSource::new(upstream_cfg).map_err(|e| e.to_string())?)
        }
    };

    let state = AppState::with_config(source, api_cfg);
    let app = build_router(state);

    let bind_addr = env::var("POLICY_DESK_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("policy-desk-server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
