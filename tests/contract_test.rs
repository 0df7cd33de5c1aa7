//! Exercises the recorded consumer contract state by state.
//!
//! Full matching is the verification engine's job; these tests only check
//! that each interaction's provider state yields the recorded status and
//! headers, so contract regressions show up in `cargo test`.

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use login_provider::api::{create_router, AppState};

#[derive(Debug, Deserialize)]
struct PactFile {
    consumer: Participant,
    provider: Participant,
    interactions: Vec<Interaction>,
}

#[derive(Debug, Deserialize)]
struct Participant {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Interaction {
    description: String,
    provider_state: String,
    request: RecordedRequest,
    response: RecordedResponse,
}

#[derive(Debug, Deserialize)]
struct RecordedRequest {
    method: String,
    path: String,
    #[serde(default)]
    headers: Map<String, Value>,
    body: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RecordedResponse {
    status: u16,
    #[serde(default)]
    headers: Map<String, Value>,
    body: Option<Value>,
}

fn load_pact() -> PactFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("pacts/jmarie-loginprovider.json");
    let raw = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn build_request(recorded: &RecordedRequest) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::from_bytes(recorded.method.as_bytes()).unwrap())
        .uri(recorded.path.as_str());
    for (name, value) in &recorded.headers {
        builder = builder.header(name.as_str(), value.as_str().unwrap());
    }
    let body = recorded
        .body
        .as_ref()
        .map(|b| Body::from(b.to_string()))
        .unwrap_or_else(Body::empty);
    builder.body(body).unwrap()
}

#[test]
fn test_pact_names_this_provider() {
    let pact = load_pact();
    assert_eq!(pact.consumer.name, "jmarie");
    assert_eq!(pact.provider.name, "loginprovider");
    assert_eq!(pact.interactions.len(), 3);
}

#[tokio::test]
async fn test_each_interaction_gets_recorded_status_and_headers() {
    let pact = load_pact();
    let app = create_router(AppState::default());

    for interaction in &pact.interactions {
        let setup = Request::builder()
            .method("POST")
            .uri("/setup")
            .body(Body::from(
                json!({ "state": interaction.provider_state }).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(setup).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "setup for '{}'",
            interaction.provider_state
        );

        let response = app
            .clone()
            .oneshot(build_request(&interaction.request))
            .await
            .unwrap();

        let context = format!("{} given {}", interaction.description, interaction.provider_state);
        assert_eq!(response.status().as_u16(), interaction.response.status, "{context}");

        for name in interaction.response.headers.keys() {
            assert!(
                response.headers().contains_key(name.to_ascii_lowercase().as_str()),
                "missing header {name} for {context}"
            );
        }
        assert_eq!(
            response.headers()["content-type"],
            interaction.response.headers["Content-Type"].as_str().unwrap(),
            "{context}"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        match &interaction.response.body {
            Some(expected) => {
                let actual: Value = serde_json::from_slice(&body).unwrap();
                for key in expected["user"].as_object().unwrap().keys() {
                    assert!(actual["user"].get(key).is_some(), "missing user.{key} for {context}");
                }
                assert_eq!(actual["user"]["username"], expected["user"]["username"]);
            }
            None => assert!(body.is_empty(), "{context} should have no body"),
        }
    }
}
