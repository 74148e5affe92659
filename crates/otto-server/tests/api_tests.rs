use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{self, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use async_trait::async_trait;
use mockall::mock;
use otto_content::Feedback;
use otto_latex::{InMemoryLatexService, LatexService};
use otto_llm::{AnthropicClient, ChatModel, ChatRequest, LlmError};
use otto_server::{OttoServer, ServerConfig};

struct TestContext {
    server: Arc<OttoServer>,
    latex: Arc<InMemoryLatexService>,
}

// Mock the chat-completion provider
mock! {
    #[derive(Debug)]
    pub ChatModel {}

    #[async_trait]
    impl ChatModel for ChatModel {
        async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
    }
}

fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        port: 0,
        bind_address: "127.0.0.1".to_string(),
        anthropic_api_key: api_key.map(str::to_string),
        model_api_url: "http://127.0.0.1:1".to_string(),
        latex_service_url: "memory://test".to_string(),
        assistant_model: "test-model".to_string(),
        document_model: "test-document-model".to_string(),
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        log_level: "debug".to_string(),
    }
}

// Helper to set up the test context with a mocked model
fn setup_test(model: MockChatModel) -> TestContext {
    let latex = Arc::new(InMemoryLatexService::new());
    let server = OttoServer::new(test_config(Some("test-key")), Arc::new(model), latex.clone());

    TestContext {
        server: Arc::new(server),
        latex,
    }
}

// Helper using the real provider client without a credential, so the
// missing-key path is exercised without any network traffic
fn setup_test_without_credential() -> TestContext {
    let config = test_config(None);
    let model = AnthropicClient::with_base_url(None, config.model_api_url.clone());
    let latex = Arc::new(InMemoryLatexService::new());
    let server = OttoServer::new(config, Arc::new(model), latex.clone());

    TestContext {
        server: Arc::new(server),
        latex,
    }
}

// Helper to make HTTP requests to the router
async fn make_request(
    ctx: &TestContext,
    method: http::Method,
    path: &str,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().uri(path).method(method);

    let body_data = body.unwrap_or_default();
    if !body_data.is_empty() {
        req = req.header("Content-Type", "application/json");
    }

    let req = req.body(Body::from(body_data)).unwrap();

    let app = otto_server::api::build_router(ctx.server.clone());
    let response = app.oneshot(req).await.unwrap();

    let status = response.status();
    let body = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();

    (status, body.to_vec())
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn missing_prompt_yields_400() {
    let ctx = setup_test(MockChatModel::new());

    for path in ["/v1/assistant", "/v1/evaluate", "/v1/documents/generate"] {
        let (status, body) =
            make_request(&ctx, http::Method::POST, path, Some("{}".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "path: {path}");
        let response = json_body(&body);
        assert_eq!(response["error"], "Missing prompt parameter");
    }
}

#[tokio::test]
async fn missing_credential_yields_500() {
    let ctx = setup_test_without_credential();

    let body = json!({ "prompt": "How does stamping work?" }).to_string();
    let (status, body) = make_request(&ctx, http::Method::POST, "/v1/assistant", Some(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let response = json_body(&body);
    assert_eq!(response["error"], "API key configuration error");
}

#[tokio::test]
async fn assistant_returns_upstream_text_unmodified() {
    let mut model = MockChatModel::new();
    model
        .expect_complete()
        .withf(|request| {
            request.model == "test-model"
                && request.max_tokens == 300
                && request.messages[0].content == "What torque for lug nuts?"
        })
        .returning(|_| Ok("  Typically 90-120 Nm.\n".to_string()));

    let ctx = setup_test(model);

    let body = json!({ "prompt": "What torque for lug nuts?" }).to_string();
    let (status, body) = make_request(&ctx, http::Method::POST, "/v1/assistant", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    // The upstream text is passed through verbatim, whitespace included
    assert_eq!(response["answer"], "  Typically 90-120 Nm.\n");
}

#[tokio::test]
async fn evaluate_extracts_embedded_feedback_object() {
    let mut model = MockChatModel::new();
    model.expect_complete().returning(|_| {
        Ok("Here is my assessment:\n{\"overallFeedback\": \"Solid\", \"score\": 17}\nRegards."
            .to_string())
    });

    let ctx = setup_test(model);

    let body = json!({ "prompt": "our answers" }).to_string();
    let (status, body) = make_request(&ctx, http::Method::POST, "/v1/evaluate", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["feedback"]["overallFeedback"], "Solid");
    assert_eq!(response["feedback"]["score"], 17);
}

#[tokio::test]
async fn evaluate_without_json_returns_fallback_feedback() {
    let mut model = MockChatModel::new();
    model
        .expect_complete()
        .returning(|_| Ok("I cannot provide structured feedback on this.".to_string()));

    let ctx = setup_test(model);

    let body = json!({ "prompt": "our answers" }).to_string();
    let (status, body) = make_request(&ctx, http::Method::POST, "/v1/evaluate", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(
        response["feedback"],
        serde_json::to_value(Feedback::fallback()).unwrap()
    );
    assert_eq!(response["feedback"]["score"], 10);
    assert_eq!(
        response["feedback"]["detailedFeedback"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
}

#[tokio::test]
async fn evaluate_with_unparseable_json_yields_500() {
    let mut model = MockChatModel::new();
    model
        .expect_complete()
        .returning(|_| Ok("{\"score\": oops}".to_string()));

    let ctx = setup_test(model);

    let body = json!({ "prompt": "our answers" }).to_string();
    let (status, body) = make_request(&ctx, http::Method::POST, "/v1/evaluate", Some(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let response = json_body(&body);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .starts_with("Error parsing feedback"));
}

#[tokio::test]
async fn model_failure_yields_bad_gateway() {
    let mut model = MockChatModel::new();
    model.expect_complete().returning(|_| {
        Err(LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        })
    });

    let ctx = setup_test(model);

    let body = json!({ "prompt": "hello" }).to_string();
    let (status, _) = make_request(&ctx, http::Method::POST, "/v1/assistant", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn stages_catalog_is_served() {
    let ctx = setup_test(MockChatModel::new());

    let (status, body) = make_request(&ctx, http::Method::GET, "/v1/stages", None).await;

    assert_eq!(status, StatusCode::OK);
    let stages = json_body(&body);
    let stages = stages.as_array().unwrap();
    assert_eq!(stages.len(), 5);
    assert_eq!(stages[0]["name"], "Input");
    assert_eq!(stages[0]["status"], "active");
    assert_eq!(stages[4]["status"], "error");
}

#[tokio::test]
async fn question_set_is_served_with_examples() {
    let ctx = setup_test(MockChatModel::new());

    let (status, body) = make_request(&ctx, http::Method::GET, "/v1/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["questions"].as_array().unwrap().len(), 4);
    assert_eq!(response["example_answers"].as_array().unwrap().len(), 4);
    assert!(response["questions"][1]["text"]
        .as_str()
        .unwrap()
        .contains("WELDING"));
}

#[tokio::test]
async fn document_generation_cleans_stores_and_compiles() {
    let mut model = MockChatModel::new();
    model
        .expect_complete()
        .withf(|request| request.model == "test-document-model" && request.max_tokens == 4000)
        .returning(|_| {
            Ok("\\documentclass{article}\n\n\\begin{document}\n   \nHi\n\\end{document}\n"
                .to_string())
        });

    let ctx = setup_test(model);

    let body = json!({ "prompt": "a one-page note", "document_type": "technical_report" })
        .to_string();
    let (status, body) =
        make_request(&ctx, http::Method::POST, "/v1/documents/generate", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["status"], "success");
    assert_eq!(response["pdf_url"], "memory://latex-pdf");
    // Blank lines are stripped before the document is stored
    let expected = "\\documentclass{article}\n\\begin{document}\nHi\n\\end{document}";
    assert_eq!(response["latex_code"], expected);
    assert_eq!(ctx.latex.stored_document().await.unwrap(), expected);

    // The compiled PDF is now retrievable
    let (status, pdf) = make_request(&ctx, http::Method::GET, "/v1/documents/pdf", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn manual_latex_flow_stores_compiles_and_serves() {
    let ctx = setup_test(MockChatModel::new());

    let body = json!({ "latex_code": "\\documentclass{article}\n\n\\begin{document}x\\end{document}" })
        .to_string();
    let (status, body) =
        make_request(&ctx, http::Method::POST, "/v1/documents/latex", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["message"], "LaTeX code saved successfully");

    let (status, body) =
        make_request(&ctx, http::Method::POST, "/v1/documents/compile", None).await;
    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["message"], "PDF compiled successfully");
    assert_eq!(response["pdf_url"], "memory://latex-pdf");

    let (status, pdf) = make_request(&ctx, http::Method::GET, "/v1/documents/pdf", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn compile_without_stored_document_yields_bad_gateway() {
    let ctx = setup_test(MockChatModel::new());

    let (status, body) =
        make_request(&ctx, http::Method::POST, "/v1/documents/compile", None).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let response = json_body(&body);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .contains("LaTeX file not found"));
}

#[tokio::test]
async fn missing_latex_code_yields_400() {
    let ctx = setup_test(MockChatModel::new());

    let (status, _) =
        make_request(&ctx, http::Method::POST, "/v1/documents/latex", Some("{}".to_string()))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_dependency_status() {
    let ctx = setup_test(MockChatModel::new());

    let (status, body) = make_request(&ctx, http::Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["status"], "UP");
    assert_eq!(response["dependencies"]["modelProvider"]["status"], "UP");
    assert_eq!(response["dependencies"]["latexService"]["status"], "UP");
}

#[tokio::test]
async fn health_is_unavailable_without_credential() {
    let ctx = setup_test_without_credential();

    let (status, body) = make_request(&ctx, http::Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let response = json_body(&body);
    assert_eq!(response["dependencies"]["modelProvider"]["status"], "DOWN");
}
