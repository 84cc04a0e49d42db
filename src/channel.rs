use std::sync::Arc;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client as SqsClient;
use thiserror::Error;
use tracing::debug;

pub type DynOutputChannel = Arc<dyn OutputChannel + Send + Sync>;

/// Downstream sink for accepted payloads. One `set` call per accepted
/// request; delivery guarantees beyond that are the queue's concern.
#[async_trait]
pub trait OutputChannel {
    async fn set(&self, payload: &str) -> Result<(), ChannelError>;
}

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("failed to send message to {queue_url} - {message}")]
    Send { queue_url: String, message: String },
}

/// Output channel backed by an SQS queue.
pub struct SqsChannel {
    client: SqsClient,
    queue_url: String,
}

impl SqsChannel {
    pub fn new(sdk_config: &SdkConfig, queue_url: String) -> Self {
        SqsChannel {
            client: SqsClient::new(sdk_config),
            queue_url,
        }
    }

    pub fn from_client(client: SqsClient, queue_url: String) -> Self {
        SqsChannel { client, queue_url }
    }
}

#[async_trait]
impl OutputChannel for SqsChannel {
    async fn set(&self, payload: &str) -> Result<(), ChannelError> {
        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(payload)
            .send()
            .await
            .map_err(|e| ChannelError::Send {
                queue_url: self.queue_url.clone(),
                message: e.to_string(),
            })?;

        debug!(
            "payload sent to {} - message id {:?}",
            self.queue_url,
            output.message_id()
        );

        Ok(())
    }
}
