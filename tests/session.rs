use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use joblens::config::Config;
use joblens::storage::{KEY_API_KEY, MemoryKeyStore};
use joblens::summary::{GenerateSummaryRequest, SetApiKeyRequest, Session};

fn session_against(base_url: &str, store: MemoryKeyStore) -> Session {
    let config = Config::new("unused-store.json", base_url, "gpt-4o-mini", "en");
    Session::new(Arc::new(store), &config)
}

fn request() -> GenerateSummaryRequest {
    GenerateSummaryRequest {
        prompt: "Title: Engineer\nCompany: Acme".to_string(),
        selected_fields: Some(vec!["jobTitle".to_string(), "salary".to_string()]),
        language: "en".to_string(),
        is_custom_format: false,
        custom_prompt: String::new(),
        has_company_reviews: false,
    }
}

fn seeded_store() -> MemoryKeyStore {
    MemoryKeyStore::with_entries([(KEY_API_KEY.to_string(), "sk-test".to_string())])
}

#[tokio::test]
async fn successful_call_returns_model_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content":
                r#"{"jobTitle":"Engineer","salary":"€60,000"}"#}}]
        })))
        .mount(&server)
        .await;

    let session = session_against(&server.uri(), seeded_store());
    let response = session.generate_summary(&request()).await;

    assert!(response.success);
    let summary = response.summary.unwrap();
    assert_eq!(summary["jobTitle"], "Engineer");
    assert_eq!(summary["salary"], "€60,000");
}

#[tokio::test]
async fn orchestrator_failure_substitutes_canned_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session_against(&server.uri(), seeded_store());
    let response = session.generate_summary(&request()).await;

    // The failure is absorbed: same required keys, canned values.
    assert!(response.success);
    assert!(response.error.is_none());
    let summary = response.summary.unwrap();
    let keys: Vec<&String> = summary.keys().collect();
    assert_eq!(keys, ["jobTitle", "salary"]);
    assert_eq!(summary["jobTitle"], "Software Engineer");
}

#[tokio::test]
async fn canned_summary_covers_custom_fields_too() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let session = session_against(&server.uri(), seeded_store());
    let response = session
        .generate_summary(&GenerateSummaryRequest {
            prompt: "job text".to_string(),
            selected_fields: None,
            language: "it".to_string(),
            is_custom_format: true,
            custom_prompt: "team size, remote policy".to_string(),
            has_company_reviews: false,
        })
        .await;

    assert!(response.success);
    let summary = response.summary.unwrap();
    assert_eq!(summary["teamSize"], "Non specificato");
    assert_eq!(summary["remotePolicy"], "Non specificato");
}

#[tokio::test]
async fn missing_credential_is_surfaced_not_substituted() {
    let server = MockServer::start().await;
    let session = session_against(&server.uri(), MemoryKeyStore::new());
    let response = session.generate_summary(&request()).await;

    assert!(!response.success);
    assert!(response.summary.is_none());
    assert!(response.error.unwrap().contains("settings"));
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_a_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_against(&server.uri(), seeded_store());
    let response = session
        .generate_summary(&GenerateSummaryRequest {
            prompt: "   ".to_string(),
            ..request()
        })
        .await;

    assert!(!response.success);
}

#[tokio::test]
async fn set_api_key_enables_subsequent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content":
                r#"{"jobTitle":"Engineer","salary":"Not specified"}"#}}]
        })))
        .mount(&server)
        .await;

    let session = session_against(&server.uri(), MemoryKeyStore::new());

    let ack = session
        .set_api_key(&SetApiKeyRequest {
            api_key: "sk-live".to_string(),
        })
        .await;
    assert!(ack.success);

    let response = session.generate_summary(&request()).await;
    assert!(response.success);
    assert_eq!(response.summary.unwrap()["jobTitle"], "Engineer");
}

#[tokio::test]
async fn blank_api_key_is_rejected() {
    let server = MockServer::start().await;
    let session = session_against(&server.uri(), MemoryKeyStore::new());
    let ack = session
        .set_api_key(&SetApiKeyRequest {
            api_key: "  ".to_string(),
        })
        .await;
    assert!(!ack.success);
}
