//! Integration tests for `TeiClient` using wiremock HTTP mocks.

use std::time::Duration;

use profsent_sentiment::{SentimentError, TeiClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str, dimensions: Option<usize>) -> TeiClient {
    TeiClient::new(base_url, Duration::from_secs(5), dimensions)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn embed_one_returns_first_vector() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .and(body_json(serde_json::json!({ "inputs": "hello world" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![vec![0.1_f32, 0.2, 0.3]]))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some(3));
    let embedding = client.embed_one("hello world").await.expect("embedding");
    assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn embed_one_is_deterministic_for_same_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![vec![0.5_f32; 384]]))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some(384));
    let first = client.embed_one("same text").await.expect("first");
    let second = client.embed_one("same text").await.expect("second");
    assert_eq!(first, second);
    assert_eq!(first.len(), 384);
}

#[tokio::test]
async fn embed_one_rejects_wrong_dimensions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![vec![0.1_f32, 0.2]]))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some(384));
    let err = client.embed_one("text").await.unwrap_err();
    assert!(matches!(err, SentimentError::Tei(ref m) if m.contains("dimensions")), "got {err:?}");
}

#[tokio::test]
async fn embed_one_skips_dimension_check_when_unset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![vec![0.1_f32, 0.2]]))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let embedding = client.embed_one("text").await.expect("embedding");
    assert_eq!(embedding.len(), 2);
}

#[tokio::test]
async fn embed_one_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.embed_one("text").await.unwrap_err();
    assert!(matches!(err, SentimentError::Tei(ref m) if m.contains("503")), "got {err:?}");
}

#[tokio::test]
async fn embed_one_rejects_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Vec<f32>>::new()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.embed_one("").await.unwrap_err();
    assert!(matches!(err, SentimentError::Tei(ref m) if m.contains("empty")), "got {err:?}");
}
