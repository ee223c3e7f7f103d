use async_trait::async_trait;
use openai_dive::v1::api::Client;
use openai_dive::v1::resources::chat::{
    ChatCompletionParameters, ChatCompletionResponse,
    ChatCompletionResponseFormat, ChatMessage, ChatMessageContent,
};
use redact::Secret;
use serde::de::DeserializeOwned;

use crate::AgentError;

/// A chat model that answers a single prompt with a JSON object.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one user prompt and return the raw JSON text of the reply.
    async fn complete_json(&self, prompt: &str) -> Result<String, AgentError>;
}

/// Ask the model for a JSON object and deserialize it.
///
/// # Errors
/// If the request fails or the reply does not match `T`.
pub async fn complete_as<T: DeserializeOwned>(
    model: &dyn LanguageModel,
    prompt: &str,
) -> Result<T, AgentError> {
    let content = model.complete_json(prompt).await?;

    Ok(serde_json::from_str(&content)?)
}

/// `OpenAI` chat completion backed model.
pub struct OpenAiModel {
    client: Option<Client>,
    model: String,
}

impl OpenAiModel {
    /// Without an API key every request fails with
    /// [`AgentError::MissingApiKey`] and no network call is made.
    #[must_use]
    pub fn new(
        api_key: Option<&Secret<String>>,
        model: &str,
        base_url: Option<&str>,
    ) -> Self {
        let client = api_key.map(|key| {
            let mut client = Client::new(key.expose_secret().clone());
            if let Some(base_url) = base_url {
                client.base_url = base_url.to_string();
            }
            client
        });

        Self {
            client,
            model: model.to_string(),
        }
    }

    fn build_parameters(&self, prompt: &str) -> ChatCompletionParameters {
        ChatCompletionParameters {
            model: self.model.clone(),
            response_format: Some(ChatCompletionResponseFormat::JsonObject),
            messages: vec![ChatMessage::User {
                name: None,
                content: ChatMessageContent::Text(prompt.to_string()),
            }],
            ..Default::default()
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiModel {
    async fn complete_json(&self, prompt: &str) -> Result<String, AgentError> {
        let Some(client) = &self.client else {
            return Err(AgentError::MissingApiKey);
        };

        let response = client
            .chat()
            .create(self.build_parameters(prompt))
            .await
            .map_err(|e| AgentError::Api(format!("{e:?}")))?;

        extract_content(&response)
    }
}

fn extract_content(
    response: &ChatCompletionResponse,
) -> Result<String, AgentError> {
    let Some(choice) = response.choices.first() else {
        return Err(AgentError::EmptyResponse);
    };

    if let Some(reason) = &choice.finish_reason {
        tracing::debug!("Finish reason: {:?}", reason);
    }

    match &choice.message {
        ChatMessage::Assistant {
            content: Some(ChatMessageContent::Text(text)),
            ..
        } if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(AgentError::EmptyResponse),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(choices: Value) -> Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-test",
            "choices": choices,
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 5,
                "total_tokens": 17,
            },
        })
    }

    fn assistant_choice(content: &str) -> Value {
        json!([{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop",
        }])
    }

    async fn model_for(server: &MockServer) -> OpenAiModel {
        let key = Secret::new("sk-test".to_string());
        OpenAiModel::new(Some(&key), "gpt-test", Some(&server.uri()))
    }

    #[tokio::test]
    async fn test_complete_json_returns_assistant_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-test",
                "response_format": {"type": "json_object"},
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(assistant_choice(r#"{"a":1}"#))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let content = model_for(&server)
            .await
            .complete_json("hello")
            .await
            .unwrap();

        assert_eq!(content, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_complete_json_rejects_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion(json!([]))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = model_for(&server).await.complete_json("hello").await;

        assert!(matches!(result, Err(AgentError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_complete_json_rejects_blank_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(assistant_choice("   \n"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = model_for(&server).await.complete_json("hello").await;

        assert!(matches!(result, Err(AgentError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_complete_json_surfaces_service_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"message": "overloaded", "type": "server_error"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = model_for(&server).await.complete_json("hello").await;

        assert!(matches!(result, Err(AgentError::Api(_))));
    }

    #[tokio::test]
    async fn test_model_without_key_fails_without_calling_out() {
        let model = OpenAiModel::new(None, "gpt-4-turbo-preview", None);

        let result = model.complete_json("{}").await;

        assert!(matches!(result, Err(AgentError::MissingApiKey)));
    }

    #[test]
    fn test_build_parameters_requests_json_object() {
        let key = Secret::new("sk-test".to_string());
        let model = OpenAiModel::new(Some(&key), "gpt-test", None);

        let parameters = model.build_parameters("hello");

        assert_eq!(parameters.model, "gpt-test");
        assert!(matches!(
            parameters.response_format,
            Some(ChatCompletionResponseFormat::JsonObject)
        ));
        assert_eq!(parameters.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_complete_as_reports_parse_errors() {
        let model = fakes::CannedModel("not json".to_string());

        let result = complete_as::<serde_json::Value>(&model, "prompt").await;

        assert!(matches!(result, Err(AgentError::Parse(_))));
    }
}
