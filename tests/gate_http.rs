//! End-to-end tests: client → gate → mock upstream.

use reqwest::header::{AUTHORIZATION, COOKIE, LOCATION};
use reqwest::StatusCode;

use gbhs_gate::Shutdown;

mod common;

#[tokio::test]
async fn test_public_pages_reach_upstream() {
    let shutdown = Shutdown::new();
    let upstream = common::start_mock_upstream().await;
    let gate = common::start_gate(upstream, &shutdown).await;
    let client = common::client();

    for path in ["/", "/about/facility/5", "/news", "/gbhs-history", "/auth?mode=login"] {
        let res = client.get(format!("http://{gate}{path}")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body = res.text().await.unwrap();
        assert_eq!(body, format!("GET {path} HTTP/1.1"));
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_protected_page_without_token_redirects() {
    let shutdown = Shutdown::new();
    let upstream = common::start_mock_upstream().await;
    let gate = common::start_gate(upstream, &shutdown).await;

    let res = common::client()
        .get(format!("http://{gate}/teacher"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(LOCATION).unwrap(),
        "/auth?mode=login&redirect=%2Fteacher"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_api_bypasses_gate() {
    let shutdown = Shutdown::new();
    let upstream = common::start_mock_upstream().await;
    let gate = common::start_gate(upstream, &shutdown).await;

    let res = common::client()
        .post(format!("http://{gate}/api/news"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "POST /api/news HTTP/1.1");

    shutdown.trigger();
}

#[tokio::test]
async fn test_token_lets_protected_page_through() {
    let shutdown = Shutdown::new();
    let upstream = common::start_mock_upstream().await;
    let gate = common::start_gate(upstream, &shutdown).await;
    let client = common::client();

    let with_cookie = client
        .get(format!("http://{gate}/admin/reports"))
        .header(COOKIE, "token=xyz")
        .send()
        .await
        .unwrap();
    assert_eq!(with_cookie.status(), StatusCode::OK);

    let with_header = client
        .get(format!("http://{gate}/admin/reports?page=2"))
        .header(AUTHORIZATION, "Bearer xyz")
        .send()
        .await
        .unwrap();
    assert_eq!(with_header.status(), StatusCode::OK);
    assert_eq!(
        with_header.text().await.unwrap(),
        "GET /admin/reports?page=2 HTTP/1.1"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_static_assets_skip_gate() {
    let shutdown = Shutdown::new();
    let upstream = common::start_mock_upstream().await;
    let gate = common::start_gate(upstream, &shutdown).await;

    let res = common::client()
        .get(format!("http://{gate}/_next/static/chunks/main.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let with_token = common::client()
        .get(format!("http://{gate}/_next/image?url=%2Flogo.png&w=64"))
        .header(COOKIE, "token=xyz")
        .send()
        .await
        .unwrap();
    assert_eq!(with_token.status(), StatusCode::OK);
    assert_eq!(
        with_token.text().await.unwrap(),
        "GET /_next/image?url=%2Flogo.png&w=64 HTTP/1.1"
    );

    shutdown.trigger();
}
