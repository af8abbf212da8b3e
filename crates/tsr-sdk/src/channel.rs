//! Transport seam between the SDK and the analytics service.

use crate::config::ChannelConfig;
use crate::error::SdkError;
use crate::messages::{RequestBatch, RequestMessage, ResponseBatch, ResponseMessage};
use reqwest::blocking::Client;

/// Delivers a batch of request messages and returns the response batch
///
/// Implementations block until the remote side answers or fails. Timeout
/// policy, if any, belongs to the implementation.
pub trait MessageChannel {
    /// Send `messages` and return every message of the response, in order
    fn send_messages(&self, messages: &[RequestMessage]) -> Result<Vec<ResponseMessage>, SdkError>;
}

impl<C: MessageChannel + ?Sized> MessageChannel for &C {
    fn send_messages(&self, messages: &[RequestMessage]) -> Result<Vec<ResponseMessage>, SdkError> {
        (**self).send_messages(messages)
    }
}

impl<C: MessageChannel + ?Sized> MessageChannel for Box<C> {
    fn send_messages(&self, messages: &[RequestMessage]) -> Result<Vec<ResponseMessage>, SdkError> {
        (**self).send_messages(messages)
    }
}

/// JSON-over-HTTP channel
pub struct HttpChannel {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HttpChannel {
    /// Build a channel from configuration
    pub fn new(config: &ChannelConfig) -> Result<Self, SdkError> {
        let url = config.messages_url()?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(SdkError::ClientBuild)?;

        Ok(Self {
            client,
            url,
            api_token: config.api_token.clone(),
        })
    }

    /// URL message batches are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MessageChannel for HttpChannel {
    fn send_messages(&self, messages: &[RequestMessage]) -> Result<Vec<ResponseMessage>, SdkError> {
        let mut request = self.client.post(&self.url).json(&RequestBatch { messages });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!("Posting {} message(s) to {}", messages.len(), self.url);

        let response = request
            .send()
            .map_err(|e| SdkError::transport(&self.url, e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SdkError::transport(&self.url, e))?;

        if !status.is_success() {
            return Err(SdkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let batch: ResponseBatch = serde_json::from_str(&body)?;
        Ok(batch.messages)
    }
}
