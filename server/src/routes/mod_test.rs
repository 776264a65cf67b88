use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("filmcast").build()
}

async fn get_path(path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app(test_options()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_returns_ok() {
    let (status, _) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_renders_home_shell() {
    let (status, body) = get_path("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Film Industry Talent"));
}

#[tokio::test]
async fn unknown_path_renders_home_shell_with_ok() {
    for path in ["/anything", "/pricing", "/deeply/nested/path"] {
        let (status, body) = get_path(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains("Film Industry Talent"), "{path} missing home content");
    }
}
