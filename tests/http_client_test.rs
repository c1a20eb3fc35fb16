// tests/http_client_test.rs — Integration test: HTTP answer service against a local stub

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use haqooq::client::{AnswerService, AskRequest, HttpAnswerService};
use haqooq::infra::config::ServiceConfig;
use haqooq::infra::errors::HaqooqError;
use haqooq::session::{Conversation, APOLOGY};

/// Raw JSON bodies received on `/chat`.
type Received = Arc<Mutex<Vec<Value>>>;

async fn chat(State(received): State<Received>, Json(body): Json<Value>) -> Response {
    received.lock().unwrap().push(body.clone());
    match body["message"].as_str().unwrap_or_default() {
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, "Error processing chat: boom").into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "bare" => Json(json!({"response": "no sources here", "conversation_id": "bare-1"}))
            .into_response(),
        _ => {
            let id = body["conversation_id"].as_str().unwrap_or("abc123").to_string();
            Json(json!({
                "response": "**Khula** is a woman's right to seek dissolution of marriage...",
                "sources": [
                    {"source": "Family_Law.pdf", "page": 12, "chunk_id": 3, "relevance_score": 0.87}
                ],
                "conversation_id": id,
            }))
            .into_response()
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "message": "API is running"}))
}

async fn history(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "conversation_id": id,
        "history": [
            {"role": "user", "content": "What is khula?"},
            {"role": "assistant", "content": "Khula is..."}
        ]
    }))
}

async fn forget(Path(id): Path<String>) -> Json<Value> {
    Json(json!({"message": format!("Conversation {} cleared", id)}))
}

async fn conversations() -> Json<Value> {
    Json(json!({
        "abc123": [
            {"role": "user", "content": "What is khula?"},
            {"role": "assistant", "content": "Khula is..."}
        ],
        "def456": []
    }))
}

async fn stats() -> Json<Value> {
    Json(json!({"total_conversations": 2, "total_messages": 8}))
}

/// Serve the stub on an ephemeral port and return its base URL.
async fn spawn_stub() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .route("/memory/conversation/{id}", get(history).delete(forget))
        .route("/memory/conversations", get(conversations))
        .route("/memory/stats", get(stats))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), received)
}

fn service_for(base_url: &str) -> HttpAnswerService {
    let config = ServiceConfig {
        base_url: base_url.to_string(),
        ..ServiceConfig::default()
    };
    HttpAnswerService::new(&config).unwrap()
}

fn ask(message: &str, conversation_id: Option<&str>) -> AskRequest {
    AskRequest {
        message: message.into(),
        conversation_id: conversation_id.map(str::to_string),
    }
}

#[tokio::test]
async fn test_chat_success_decodes_answer() {
    let (base, received) = spawn_stub().await;
    let service = service_for(&base);

    let answer = service.ask(ask("What is khula?", None)).await.unwrap();
    assert_eq!(answer.conversation_id, "abc123");
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].source, "Family_Law.pdf");
    assert_eq!(answer.sources[0].page, 12);

    // First exchange sends an explicit null token
    let bodies = received.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![json!({"message": "What is khula?", "conversation_id": null})]
    );
}

#[tokio::test]
async fn test_chat_sends_existing_token() {
    let (base, received) = spawn_stub().await;
    let service = service_for(&base);

    let answer = service.ask(ask("follow up", Some("conv-7"))).await.unwrap();
    assert_eq!(answer.conversation_id, "conv-7");
    assert_eq!(received.lock().unwrap()[0]["conversation_id"], json!("conv-7"));
}

#[tokio::test]
async fn test_chat_server_error_maps_to_status() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&base);

    let err = service.ask(ask("fail", None)).await.unwrap_err();
    match err {
        HaqooqError::Status { status, ref body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_malformed_body_maps_to_decode() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&base);

    let err = service.ask(ask("garbage", None)).await.unwrap_err();
    assert!(matches!(err, HaqooqError::Decode(_)));
}

#[tokio::test]
async fn test_chat_missing_sources_is_empty() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&base);

    let answer = service.ask(ask("bare", None)).await.unwrap();
    assert!(answer.sources.is_empty());
    assert_eq!(answer.conversation_id, "bare-1");
}

#[tokio::test]
async fn test_unreachable_service_maps_to_transport() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(&format!("http://{}", addr));
    let err = service.ask(ask("hello", None)).await.unwrap_err();
    assert!(matches!(err, HaqooqError::Transport { .. }));
}

#[tokio::test]
async fn test_conversation_over_http() {
    let (base, received) = spawn_stub().await;
    let mut conversation = Conversation::new(Arc::new(service_for(&base)));

    let turn = conversation.send("What is khula?").await.unwrap();
    assert_eq!(
        turn.content,
        "Khula is a woman's right to seek dissolution of marriage..."
    );
    let turn = conversation.send("fail").await.unwrap();
    assert_eq!(turn.content, APOLOGY);
    conversation.send("and mehr?").await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 3);
    assert_eq!(bodies[1]["conversation_id"], json!("abc123"));
    assert_eq!(bodies[2]["conversation_id"], json!("abc123"));
    assert_eq!(conversation.session().turns().len(), 6);
}

#[tokio::test]
async fn test_health() {
    let (base, _) = spawn_stub().await;
    let health = service_for(&base).health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.message, "API is running");
}

#[tokio::test]
async fn test_memory_endpoints() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&base);

    let history = service.history("abc123").await.unwrap();
    assert_eq!(history.conversation_id, "abc123");
    assert_eq!(history.history.len(), 2);
    assert_eq!(history.history[0].role, "user");

    let message = service.forget("abc123").await.unwrap();
    assert_eq!(message, "Conversation abc123 cleared");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats["total_conversations"], json!(2));
}

#[tokio::test]
async fn test_conversation_id_with_reserved_chars_stays_one_segment() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&base);

    let history = service.history("a/b?c#d").await.unwrap();
    assert_eq!(history.conversation_id, "a/b?c#d");

    let message = service.forget("a/b?c#d").await.unwrap();
    assert_eq!(message, "Conversation a/b?c#d cleared");
}

#[tokio::test]
async fn test_all_conversations() {
    let (base, _) = spawn_stub().await;
    let all = service_for(&base).conversations().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["abc123"].len(), 2);
    assert_eq!(all["abc123"][1].role, "assistant");
    assert!(all["def456"].is_empty());
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let (base, _) = spawn_stub().await;
    let service = service_for(&format!("{}/", base));
    assert_eq!(service.endpoint(), format!("{}/chat", base));
    assert!(service.ask(ask("What is khula?", None)).await.is_ok());
}
