use axum::Router;
use backend::RelayConfig;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves the backend router on an ephemeral port and returns its base URL.
async fn spawn_app(upstream: &MockServer) -> String {
    let config = RelayConfig {
        completions_url: format!("{}/v1/completions", upstream.uri()),
    };
    let app = backend::init(Router::new(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = MockServer::start().await;
    let base = spawn_app(&upstream).await;

    let body = reqwest::get(format!("{base}/api/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn chat_round_trip_through_router() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .and(body_partial_json(json!({ "prompt": "Hello World" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "text": "A" }, { "text": "B" }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({
            "messages": [
                { "role": "user", "content": "Hello" },
                { "role": "user", "content": "World" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "assistantMessage": "A\nB" }));
}

#[tokio::test]
async fn upstream_outage_surfaces_as_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({ "messages": [{ "role": "user", "content": "Hi" }] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.is_empty());
}
