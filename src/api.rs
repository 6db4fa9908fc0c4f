use crate::config::{get_config, Config};
use crate::errors::{ChatError, ChatResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Backend readiness, polled until `initialized` flips to true.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModelStatus {
    pub initialized: bool,
}

/// Body of a `/generate` call. The sampling parameters ride along with
/// every prompt and come from config, not from the UI.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub repeat_penalty: f32,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, config: &Config) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            repeat_penalty: config.repeat_penalty,
        }
    }
}

/// The backend answers `/generate` with either a completion or an
/// `error` field, never both. A `Refused` reply is application-level
/// data (it becomes an inline bot message), not a transport failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerateReply {
    Completed {
        response: String,
        #[serde(default)]
        generation_time: f64,
    },
    Refused {
        error: String,
    },
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(get_config().base_url)
    }

    pub async fn model_status(&self) -> ChatResult<ModelStatus> {
        let url = format!("{}/model-status", self.base_url);
        let status = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("Status request failed: {}", e)))?
            .json::<ModelStatus>()
            .await
            .map_err(|e| ChatError::api_error(format!("Failed to parse status response: {}", e)))?;

        Ok(status)
    }

    pub async fn generate(&self, prompt: &str) -> ChatResult<GenerateReply> {
        let url = format!("{}/generate", self.base_url);
        let payload = GenerateRequest::new(prompt, &get_config());

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("Generate request failed: {}", e)))?;

        // The backend pairs error replies with non-2xx statuses (503
        // while the model loads, 500 on generation failure), so decode
        // the body before consulting the status code.
        let reply = response
            .json::<GenerateReply>()
            .await
            .map_err(|e| ChatError::api_error(format!("Failed to parse generate response: {}", e)))?;

        Ok(reply)
    }

    pub async fn reset(&self) -> ChatResult<()> {
        let url = format!("{}/reset", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("Reset request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::api_error(format!(
                "Reset returned error status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_model_status_initializing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/model-status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "initialized": false })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let status = client.model_status().await.unwrap();
        assert!(!status.initialized);
    }

    #[tokio::test]
    async fn test_model_status_ready() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/model-status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "initialized": true })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        let status = client.model_status().await.unwrap();
        assert!(status.initialized);
    }

    #[tokio::test]
    async fn test_generate_carries_sampling_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(body_partial_json(json!({
                "prompt": "hello",
                "max_tokens": 1024,
                "temperature": 0.7,
                "top_k": 40,
                "top_p": 0.9,
                "repeat_penalty": 1.1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Hi",
                "generation_time": 0.42,
                "conversation": [
                    { "role": "user", "content": "hello" },
                    { "role": "assistant", "content": "Hi" }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        match client.generate("hello").await.unwrap() {
            GenerateReply::Completed {
                response,
                generation_time,
            } => {
                assert_eq!(response, "Hi");
                assert!((generation_time - 0.42).abs() < f64::EPSILON);
            }
            GenerateReply::Refused { error } => panic!("unexpected refusal: {}", error),
        }
    }

    #[tokio::test]
    async fn test_generate_tolerates_missing_generation_time() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Hi" })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        match client.generate("hello").await.unwrap() {
            GenerateReply::Completed { response, .. } => assert_eq!(response, "Hi"),
            GenerateReply::Refused { error } => panic!("unexpected refusal: {}", error),
        }
    }

    #[tokio::test]
    async fn test_generate_error_body_is_a_refusal_not_an_err() {
        let mock_server = MockServer::start().await;

        // 503 is what the backend sends while the model is still loading
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "boom" })))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        match client.generate("hello").await.unwrap() {
            GenerateReply::Refused { error } => assert_eq!(error, "boom"),
            GenerateReply::Completed { response, .. } => {
                panic!("unexpected completion: {}", response)
            }
        }
    }

    #[tokio::test]
    async fn test_generate_transport_failure_is_an_err() {
        // Nothing listens here
        let client = BackendClient::new("http://127.0.0.1:1");
        assert!(client.generate("hello").await.is_err());
    }

    #[tokio::test]
    async fn test_generate_unparseable_body_is_an_err() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        assert!(client.generate("hello").await.is_err());
    }

    #[tokio::test]
    async fn test_reset_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reset"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Conversation reset successfully." })),
            )
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        assert!(client.reset().await.is_ok());
    }

    #[tokio::test]
    async fn test_reset_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reset"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = BackendClient::new(mock_server.uri());
        assert!(client.reset().await.is_err());
    }
}
