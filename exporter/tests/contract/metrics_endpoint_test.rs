//! Contract Test: HTTPエンドポイント (GET /, GET /metrics)

use crate::support::{check, parse_exposition, samples, ScriptedFetcher};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use pingdom_exporter::api::create_app;
use pingdom_exporter::metrics::MetricsPublisher;
use pingdom_exporter::poller::CheckPoller;
use pingdom_exporter::AppState;
use std::time::Duration;
use tower::ServiceExt;

fn app(publisher: &MetricsPublisher) -> Router {
    create_app(AppState {
        publisher: publisher.clone(),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn root_returns_empty_ok() {
    let publisher = MetricsPublisher::new().unwrap();
    let (status, _, body) = get(app(&publisher), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn metrics_exposes_four_families() {
    let publisher = MetricsPublisher::new().unwrap();
    let fetcher = ScriptedFetcher::default();
    fetcher.push_ok(vec![check(1, "web", "web.example.com", "up", &["prod"])]);

    let mut poller = CheckPoller::new(fetcher, publisher.clone(), Duration::from_secs(10));
    poller.run_cycle().await;

    let (status, content_type, body) = get(app(&publisher), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(prometheus::TEXT_FORMAT));

    for family in [
        "pingdom_up",
        "pingdom_check_status",
        "pingdom_check_response_time",
        "pingdom_check_state",
    ] {
        assert!(
            body.contains(&format!("# TYPE {} gauge", family)),
            "missing family {}",
            family
        );
    }

    let all = parse_exposition(&body);
    assert_eq!(samples(&all, "pingdom_up")[0].value, 1.0);
    assert_eq!(samples(&all, "pingdom_check_status").len(), 1);
    assert_eq!(samples(&all, "pingdom_check_state").len(), 1);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let publisher = MetricsPublisher::new().unwrap();
    let (status, _, _) = get(app(&publisher), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn scrape_while_polling_sees_consistent_store() {
    let publisher = MetricsPublisher::new().unwrap();
    let fetcher = ScriptedFetcher::default();
    for round in 0..50 {
        let checks = (0..20)
            .map(|id| check(id, &format!("check-{}-{}", id, round % 2), "h.example.com", "up", &[]))
            .collect();
        fetcher.push_ok(checks);
    }

    let mut poller = CheckPoller::new(fetcher, publisher.clone(), Duration::from_secs(10));
    let polling = tokio::spawn(async move {
        for _ in 0..50 {
            poller.run_cycle().await;
        }
    });

    let router = app(&publisher);
    for _ in 0..20 {
        let (status, _, body) = get(router.clone(), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        parse_exposition(&body);
    }

    polling.await.unwrap();

    // 全サイクル完了後は最後のフェッチ分だけが残る
    let (_, _, body) = get(router, "/metrics").await;
    let all = parse_exposition(&body);
    let status = samples(&all, "pingdom_check_status");
    assert_eq!(status.len(), 20);
    assert!(status.iter().all(|s| s.labels["name"].ends_with("-1")));
}
