use crate::*;
use crate::config::{AppConfig, ServerConfig};
use crate::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use jsmin_filter::{FilterConfig, ScriptFilter};
use tower::ServiceExt;

const SCRIPT: &str = "var greeting = 'hello  world'; // greeting\nfunction hi() {\n  return greeting;\n}\n";
const SCRIPT_MIN: &str = "var greeting='hello  world';function hi(){return greeting;}";

fn assets() -> Router {
    Router::new()
        .route(
            "/js/app.js",
            get(|| async { ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT) }),
        )
        .route(
            "/vendor/lib.js",
            get(|| async { ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT) }),
        )
        .route(
            "/index.html",
            get(|| async {
                ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], "<p> hi </p><script> x = 1; </script>")
            }),
        )
        .route(
            "/style.css",
            get(|| async { ([(header::CONTENT_TYPE, "text/css")], "a {  color: red; }") }),
        )
        .route(
            "/broken.js",
            get(|| async { ([(header::CONTENT_TYPE, "text/javascript")], "var s = 'open;\n") }),
        )
}

async fn fetch(app: Router, method: &str, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        req = req.header(header::CONTENT_TYPE, ct);
    }
    let resp = app.oneshot(req.body(Body::from(body.to_string())).unwrap()).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_asset(state: AppState, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    fetch(with_script_filter(assets(), state), "GET", uri, None, "").await
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let (status, _, body) = fetch(app(), "GET", "/health", None, "").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");
}

// ========== Minify endpoint ==========

#[tokio::test]
async fn test_minify_endpoint_script() {
    let (status, headers, body) = fetch(app(), "POST", "/api/v1/minify", Some("application/javascript"), SCRIPT).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCRIPT_MIN);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/javascript"));
}

#[tokio::test]
async fn test_minify_endpoint_html() {
    let (status, headers, body) =
        fetch(app(), "POST", "/api/v1/minify", Some("text/html"), "<i> a </i><script> b = 2; </script>").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<i> a </i><script>b=2;</script>");
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_minify_endpoint_error() {
    let (status, _, body) = fetch(app(), "POST", "/api/v1/minify", None, "/* never closed").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["error"]["code"], "unterminated_comment");
}

#[tokio::test]
async fn test_minify_endpoint_regex_error() {
    let (status, _, body) = fetch(app(), "POST", "/api/v1/minify", None, "x = /abc\n").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("unterminated_regexp_literal"));
}

// ========== Middleware ==========

#[tokio::test]
async fn test_middleware_minifies_script() {
    let (status, headers, body) = get_asset(AppState::new(), "/js/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCRIPT_MIN);
    assert_eq!(headers[header::CONTENT_LENGTH], SCRIPT_MIN.len().to_string().as_str());
}

#[tokio::test]
async fn test_middleware_minifies_inline_html_scripts() {
    let (_, headers, body) = get_asset(AppState::new(), "/index.html").await;
    assert_eq!(body, "<p> hi </p><script>x=1;</script>");
    assert_eq!(headers[header::CONTENT_LENGTH], body.len().to_string().as_str());
}

#[tokio::test]
async fn test_middleware_leaves_other_content() {
    let (_, _, body) = get_asset(AppState::new(), "/style.css").await;
    assert_eq!(body, "a {  color: red; }");
}

#[tokio::test]
async fn test_middleware_falls_back_on_error() {
    let (status, _, body) = get_asset(AppState::new(), "/broken.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "var s = 'open;\n");
}

#[tokio::test]
async fn test_middleware_respects_exclude_list() {
    let state = AppState::from_config(&FilterConfig::exclude("/vendor/*")).unwrap();
    let (_, _, vendor) = get_asset(state.clone(), "/vendor/lib.js").await;
    assert_eq!(vendor, SCRIPT);
    let (_, _, app_js) = get_asset(state, "/js/app.js").await;
    assert_eq!(app_js, SCRIPT_MIN);
}

#[tokio::test]
async fn test_middleware_respects_include_list() {
    let state = AppState::with_filter(ScriptFilter::new(&FilterConfig::include("/vendor/*")).unwrap());
    let (_, _, vendor) = get_asset(state.clone(), "/vendor/lib.js").await;
    assert_eq!(vendor, SCRIPT_MIN);
    let (_, _, app_js) = get_asset(state, "/js/app.js").await;
    assert_eq!(app_js, SCRIPT);
}

#[tokio::test]
async fn test_middleware_missing_route_passthrough() {
    let (status, _, _) = get_asset(AppState::new(), "/nope.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== Service ==========

#[tokio::test]
async fn test_service_applies_configured_policy() {
    let cfg = AppConfig::from_json(r#"{"filter":{"path_spec":"exclude","path_list":"/vendor/*"}}"#).unwrap();
    let state = AppState::from_config(&cfg.filter).unwrap();

    let (_, _, app_js) = fetch(service(state.clone(), assets()), "GET", "/js/app.js", None, "").await;
    assert_eq!(app_js, SCRIPT_MIN);
    let (_, _, vendor) = fetch(service(state, assets()), "GET", "/vendor/lib.js", None, "").await;
    assert_eq!(vendor, SCRIPT);
}

#[tokio::test]
async fn test_service_keeps_api_routes() {
    let (status, _, body) = fetch(service(AppState::new(), assets()), "POST", "/api/v1/minify", None, "a  =  b;").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "a=b;");
    let (status, _, _) = fetch(service(AppState::new(), Router::new()), "GET", "/health", None, "").await;
    assert_eq!(status, StatusCode::OK);
}

// ========== Config ==========

#[test]
fn test_app_config_defaults() {
    let cfg = AppConfig::from_json("{}").unwrap();
    assert_eq!(cfg.server.addr(), "0.0.0.0:8080");
    assert_eq!(cfg.filter, FilterConfig::default());
}

#[test]
fn test_app_config_from_json() {
    let cfg = AppConfig::from_json(
        r#"{"server":{"host":"127.0.0.1","port":9000},"filter":{"path_spec":"exclude","path_list":"/vendor/*"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.server.addr(), "127.0.0.1:9000");
    assert!(AppState::from_config(&cfg.filter).is_ok());
    assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8080");
}

#[test]
fn test_app_state_rejects_bad_spec() {
    let cfg = FilterConfig { path_spec: Some("maybe".into()), path_list: None };
    assert!(AppState::from_config(&cfg).is_err());
}
