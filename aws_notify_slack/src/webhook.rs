use std::future::Future;
use std::pin::Pin;

use tracing::{info, warn};

use crate::error::NotifyError;
use crate::message::DisplayMessage;

/// Type alias for the future returned by a [`Deliver`] implementation.
pub type DeliveryFuture = Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send>>;

/// Something that can hand a formatted message to a chat channel.
pub trait Deliver: Send + Sync {
    /// Sends one message. Called at most once per invocation.
    fn deliver(&self, message: DisplayMessage) -> DeliveryFuture;
}

/// Posts messages to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    url: String,
    client: reqwest::Client,
}

impl SlackWebhook {
    /// Constructs a new `SlackWebhook` posting to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        SlackWebhook {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Constructs a `SlackWebhook` that sends through an existing client.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        SlackWebhook {
            url: url.into(),
            client,
        }
    }
}

impl Deliver for SlackWebhook {
    fn deliver(&self, message: DisplayMessage) -> DeliveryFuture {
        let client = self.client.clone();
        let url = self.url.clone();

        Box::pin(async move {
            let response = client.post(&url).json(&message).send().await?;
            let status = response.status();

            if !status.is_success() {
                warn!(status = status.as_u16(), "Slack webhook rejected message");
                return Err(NotifyError::WebhookStatus(status.as_u16()));
            }

            info!(pretext = %message.pretext, "Posted message to Slack");
            Ok(())
        })
    }
}
