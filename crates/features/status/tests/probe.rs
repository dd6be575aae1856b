use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use vinewood_domain::config::StatusConfig;
use vinewood_domain::site::StatusApi;
use vinewood_domain::status::StatusSource;
use vinewood_status::{StatusMonitor, StatusProbe};

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn fake_api() -> Router {
    Router::new()
        .route(
            "/single/live",
            get(|| async {
                let players: Vec<_> = (0..37).map(|i| json!({ "id": i })).collect();
                axum::Json(json!({ "Data": { "players": players, "hostname": "Vinewood" } }))
            }),
        )
        .route("/single/broken", get(|| async { axum::Json(json!({ "Data": { "players": "many" } })) }))
        .route("/single/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route(
            "/single/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                axum::Json(json!({ "Data": { "players": [] } }))
            }),
        )
}

fn probe_for(addr: SocketAddr, code: &str, timeout_ms: u64) -> StatusProbe {
    let api = StatusApi {
        cfx_api_url: format!("http://{addr}/single/"),
        server_code: Some(code.to_owned()),
        refresh_interval: 30_000,
    };
    let settings = StatusConfig { timeout_ms, ..StatusConfig::default() };
    StatusProbe::new(&api, &settings).expect("probe")
}

#[tokio::test]
async fn live_payload_counts_players() {
    let addr = serve(fake_api()).await;
    let status = probe_for(addr, "live", 2_000).probe().await;

    assert!(status.online);
    assert_eq!(status.players, 37);
    assert_eq!(status.source, StatusSource::Live);
}

#[tokio::test]
async fn timeout_reports_fallback() {
    let addr = serve(fake_api()).await;
    let status = probe_for(addr, "slow", 100).probe().await;

    assert!(!status.online);
    assert!((10..=59).contains(&status.players));
    assert_eq!(status.source, StatusSource::Fallback);
}

#[tokio::test]
async fn error_status_reports_fallback() {
    let addr = serve(fake_api()).await;
    let status = probe_for(addr, "down", 2_000).probe().await;
    assert!(!status.online);
}

#[tokio::test]
async fn malformed_payload_reports_fallback() {
    let addr = serve(fake_api()).await;
    let status = probe_for(addr, "broken", 2_000).probe().await;
    assert_eq!(status.source, StatusSource::Fallback);
}

#[tokio::test]
async fn unreachable_host_reports_fallback() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let status = probe_for(addr, "live", 500).probe().await;
    assert!(!status.online);
}

#[tokio::test]
async fn monitor_publishes_first_probe_immediately() {
    let addr = serve(fake_api()).await;
    let monitor = StatusMonitor::spawn(probe_for(addr, "live", 2_000), Duration::from_secs(60));

    let mut rx = monitor.subscribe();
    let status = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| s.source != StatusSource::Pending))
        .await
        .expect("first probe in time")
        .map(|s| *s)
        .expect("monitor alive");

    assert_eq!(status.players, 37);
    assert_eq!(monitor.latest().players, 37);
}

#[tokio::test]
async fn dropping_monitor_stops_polling() {
    let addr = serve(fake_api()).await;
    let monitor = StatusMonitor::spawn(probe_for(addr, "live", 2_000), Duration::from_millis(10));
    let mut rx = monitor.subscribe();
    drop(monitor);

    // The sender goes away with the aborted task.
    let closed = tokio::time::timeout(Duration::from_secs(5), async {
        while rx.changed().await.is_ok() {}
    })
    .await;
    assert!(closed.is_ok());
}
