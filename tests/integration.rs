use palabra_quiz::ai::{
    MockChatClient, MockImageClient, OpenAiChatClient, OpenAiImageClient, TextCompletionService,
};
use palabra_quiz::quiz::QuizOrchestrator;
use palabra_quiz::server;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_POOL: &str = r#"["casa","libro","perro","gato","sol","luna"]"#;

async fn spawn_app(orchestrator: QuizOrchestrator, allow_origins: &str) -> String {
    let app = server::router(Arc::new(orchestrator), server::cors_layer(allow_origins));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_generate_quiz_endpoint_success() {
    let chat = MockChatClient::new()
        .with_completion_response(TEST_POOL.to_string())
        .with_completion_response("犬".to_string());
    let image = MockImageClient::new().with_url_response("https://img.example/dog.png".to_string());

    let base = spawn_app(QuizOrchestrator::new(Box::new(chat), Box::new(image)), "").await;
    let response = reqwest::get(format!("{}/generate-quiz", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    let options = body["quiz_options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    let unique: HashSet<&str> = options.iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(unique.len(), 4);

    let answer = body["correct_answer"].as_str().unwrap();
    assert!(unique.contains(answer));
    assert_eq!(body["correct_meaning"], "犬");
    assert_eq!(body["image_url"], "https://img.example/dog.png");
}

#[tokio::test]
async fn test_generate_quiz_endpoint_provider_failure() {
    let chat = MockChatClient::new().with_completion_response(TEST_POOL.to_string());
    let image = MockImageClient::new().with_error_response("quota exceeded".to_string());

    let base = spawn_app(QuizOrchestrator::new(Box::new(chat), Box::new(image)), "").await;
    let response = reqwest::get(format!("{}/generate-quiz", base)).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("AI provider error: "));
    assert!(detail.contains("quota exceeded"));

    // All-or-nothing: the error body carries no partial quiz fields.
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("detail"));
}

#[tokio::test]
async fn test_generate_quiz_endpoint_malformed_candidates() {
    let chat = MockChatClient::new()
        .with_completion_response("Sure! Here are some nouns: casa, libro".to_string());
    let image = MockImageClient::new();
    let image_probe = image.clone();

    let base = spawn_app(QuizOrchestrator::new(Box::new(chat), Box::new(image)), "").await;
    let response = reqwest::get(format!("{}/generate-quiz", base)).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Unexpected error: "));

    // The pipeline never reached the image collaborator.
    assert_eq!(image_probe.get_call_count(), 0);
}

#[tokio::test]
async fn test_generate_quiz_endpoint_short_pool() {
    let chat = MockChatClient::new().with_completion_response(r#"["casa","libro"]"#.to_string());
    let image = MockImageClient::new();

    let base = spawn_app(QuizOrchestrator::new(Box::new(chat), Box::new(image)), "").await;
    let response = reqwest::get(format!("{}/generate-quiz", base)).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Unexpected error: "));
}

#[tokio::test]
async fn test_cors_headers_for_configured_origin() {
    let chat = MockChatClient::new()
        .with_completion_response(TEST_POOL.to_string())
        .with_completion_response("犬".to_string());
    let image = MockImageClient::new();

    let base = spawn_app(
        QuizOrchestrator::new(Box::new(chat), Box::new(image)),
        "https://quiz.example",
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/generate-quiz", base))
        .header("Origin", "https://quiz.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://quiz.example"
    );
}

#[tokio::test]
async fn test_full_stack_with_wiremock_providers() {
    let provider = MockServer::start().await;

    // Candidate-list call, matched by its prompt text.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("50 practical Spanish nouns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": TEST_POOL },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&provider)
        .await;

    // Meaning call, matched by its prompt text.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Japanese meaning"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": "犬" },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "url": "https://img.example/dog.png" }]
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let chat = OpenAiChatClient::new("key".to_string(), provider.uri(), "gpt-4o-mini".to_string());
    let image = OpenAiImageClient::new("key".to_string(), provider.uri(), "dall-e-3".to_string());

    let base = spawn_app(QuizOrchestrator::new(Box::new(chat), Box::new(image)), "").await;
    let response = reqwest::get(format!("{}/generate-quiz", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["quiz_options"].as_array().unwrap().len(), 4);
    assert_eq!(body["correct_meaning"], "犬");
    assert_eq!(body["image_url"], "https://img.example/dog.png");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    // A single queued reply serves every call, so interleaved requests all
    // see a parseable pool regardless of scheduling order.
    let chat = MockChatClient::new().with_completion_response(TEST_POOL.to_string());
    let image = MockImageClient::new().with_url_response("https://img.example/dog.png".to_string());
    let orchestrator = Arc::new(QuizOrchestrator::new(Box::new(chat), Box::new(image)));

    let handles: Vec<_> = (0..8)
        .map(|seed| {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.generate_quiz_seeded(seed).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.quiz_options.len(), 4);
        assert!(result.quiz_options.contains(&result.correct_answer));
    }
}

#[tokio::test]
async fn test_mock_chat_serves_list_then_meaning() {
    let chat = MockChatClient::new()
        .with_completion_response(TEST_POOL.to_string())
        .with_completion_response("犬".to_string());

    let first = chat.complete("s", "list", 500, 0.7).await.unwrap();
    assert_eq!(first, TEST_POOL);
    let second = chat.complete("s", "meaning", 10, 0.5).await.unwrap();
    assert_eq!(second, "犬");
}
