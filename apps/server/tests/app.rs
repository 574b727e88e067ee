use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use regscope_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    Server::builder().build().expect("default server builds").app()
}

async fn call(request: Request<Body>) -> (StatusCode, String) {
    let response = app().oneshot(request).await.expect("app responds");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&body).into_owned())
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn landing_page_is_served_at_root() {
    let (status, html) = call(get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Why Choose RegScope?"));
}

#[tokio::test]
async fn destination_pages_are_served() {
    for path in ["/signup", "/compliance", "/regulations"] {
        let (status, html) = call(get(path)).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(html.contains("id=\"footer\""), "{path}");
    }
}

#[tokio::test]
async fn system_health_is_json() {
    let (status, body) = call(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(health["status"], "up");
}

#[tokio::test]
async fn compliance_api_is_nested_under_prefix() {
    let (status, body) = call(get("/api/v1/fintech/regulations/fintech")).await;
    assert_eq!(status, StatusCode::OK);
    let catalogue: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(catalogue["total_regulations"], 9);

    let request = Request::post("/api/v1/fintech/aml/screen")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "customer_name": "Jane Doe" }).to_string()))
        .expect("request");
    let (status, body) = call(request).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let result: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(result["risk_level"], "low");
}

#[tokio::test]
async fn api_reference_is_served() {
    let (status, html) = call(get("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/aml/screen"));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let (status, html) = call(get("/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
}
