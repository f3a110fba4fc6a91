use super::api::{ApiClient, ApiConfig, ClientError};
use serde::{Deserialize, Serialize};

/// Backend for an OpenAI-compatible hosted chat-completions endpoint.
///
/// One synchronous request is made per prompt with provider-default
/// generation parameters; no temperature or token-limit tuning is applied.
pub struct HostedBackend {
    pub(crate) client: ApiClient,
}

impl HostedBackend {
    /// Resolves the bearer credential before the first request so a missing
    /// key fails the job up front rather than per row.
    pub fn new(mut config: ApiConfig) -> crate::Result<Self> {
        config.load_api_key()?;
        Ok(Self {
            client: ApiClient::new(config),
        })
    }

    pub(crate) async fn completion_request(
        &self,
        model_id: &str,
        prompt: &str,
    ) -> Result<String, ClientError> {
        let request = ChatCompletionRequest {
            model: model_id.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };
        let response: ChatCompletionResponse = self.client.post(request).await?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(ClientError::EmptyResponse)
    }
}

#[derive(Clone, Serialize, Debug)]
pub(crate) struct ChatCompletionRequest {
    /// ID of the model to use, as understood by the hosting provider.
    pub model: String,
    /// Input messages. The rendered prompt is sent as a single user turn.
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Serialize, Debug)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Clone, Deserialize, Debug)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Clone, Deserialize, Debug)]
pub(crate) struct ChatCompletionChoice {
    pub message: ChatResponseMessage,
}

#[derive(Clone, Deserialize, Debug)]
pub(crate) struct ChatResponseMessage {
    pub content: Option<String>,
}
