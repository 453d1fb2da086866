//! Gemini implementation of resume analysis.

use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::AnalysisService;
use crate::{Error, Result};
use async_trait::async_trait;

pub struct GeminiAnalysisClient {
    http: GeminiHttpClient,
}

impl GeminiAnalysisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl AnalysisService for GeminiAnalysisClient {
    async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String> {
        tracing::debug!(
            "Sending generateContent request to Gemini (model: {})",
            self.http.model()
        );

        let response: GenerateContentResponse = self.http.generate_content(request).await?;

        response
            .text()
            .ok_or_else(|| Error::AiProvider("No response text received".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::types::GenerationConfig;
    use crate::models::EncodedDocument;
    use crate::request::build_analysis_request;
    use wiremock::matchers::{body_partial_json, header, method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-1.5-pro";
    const GENERATE_CONTENT_PATH_REGEX: &str = r"/v1beta/models/.+:generateContent";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiAnalysisClient {
        GeminiAnalysisClient::new(api_key.to_string(), model.to_string())
            .with_base_url(server.uri())
    }

    fn sample_request() -> GenerateContentRequest {
        build_analysis_request(
            "Senior Rust Engineer",
            EncodedDocument {
                mime_type: "application/pdf".to_string(),
                data: "JVBERi0xLjQ=".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_generate_text_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "Matching skills: Git" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let text = client.generate_text(&sample_request()).await.unwrap();
        assert_eq!(text, "Matching skills: Git");
    }

    #[tokio::test]
    async fn test_request_body_carries_document_and_options() {
        let server = MockServer::start().await;
        let options = GenerationConfig::skill_analysis();

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [
                    { "role": "user" },
                    {
                        "role": "user",
                        "parts": [{
                            "inlineData": {
                                "mimeType": "application/pdf",
                                "data": "JVBERi0xLjQ="
                            }
                        }]
                    }
                ],
                "generationConfig": {
                    "topK": options.top_k,
                    "maxOutputTokens": options.max_output_tokens,
                    "responseMimeType": "text/plain"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", "models/gemini-1.5-pro");

        client.generate_text(&sample_request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key", DEFAULT_MODEL);

        let err = client.generate_text(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_generate_text_rejects_empty_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);
        let err = client.generate_text(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(ref msg) if msg == "No response text received"));
    }

    #[tokio::test]
    async fn test_generate_text_rejects_malformed_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"candidates\":["))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);
        let err = client.generate_text(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_returns_http_error() {
        // Nothing listens on port 1.
        let client = GeminiAnalysisClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url("http://127.0.0.1:1".to_string());
        let err = client.generate_text(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
