use super::AnalysisService;
use crate::ai::gemini::GenerateContentRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockAnalysisClient {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with `Error::AiProvider(message)`.
    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisClient {
    async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok("Matching skills:\n- Git\n\nMissing skills:\n- React\n\nRecommended skills:\n- TypeScript\n".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EncodedDocument;
    use crate::request::build_analysis_request;

    fn request() -> GenerateContentRequest {
        build_analysis_request(
            "Job",
            EncodedDocument {
                mime_type: "application/pdf".to_string(),
                data: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_mock_default_response_lists_three_sections() {
        let client = MockAnalysisClient::new();

        let text = client.generate_text(&request()).await.unwrap();
        assert!(text.contains("Matching skills"));
        assert!(text.contains("Missing skills"));
        assert!(text.contains("Recommended skills"));
    }

    #[tokio::test]
    async fn test_mock_custom_responses_cycle() {
        let client = MockAnalysisClient::new()
            .with_response("first".to_string())
            .with_response("second".to_string());

        assert_eq!(client.generate_text(&request()).await.unwrap(), "first");
        assert_eq!(client.generate_text(&request()).await.unwrap(), "second");
        // Should cycle back
        assert_eq!(client.generate_text(&request()).await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_failure_is_counted_and_recorded() {
        let client = MockAnalysisClient::new().with_failure("quota exceeded".to_string());

        let err = client.generate_text(&request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert_eq!(client.get_call_count(), 1);
        assert_eq!(client.get_requests().len(), 1);
    }
}
