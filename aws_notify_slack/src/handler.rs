use std::sync::Arc;
use std::task::{Context, Poll};

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tower::Service;
use tracing::{error, info};

use crate::classify::NotificationKind;
use crate::config::Config;
use crate::error::NotifyError;
use crate::events::{notification_body, AwsEvent, LambdaFuture, SnsEvent};
use crate::webhook::Deliver;

/// What happened to a notification, returned to the Lambda runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HandlerOutcome {
    /// The notification was formatted and posted.
    Delivered,
    /// The notification had no recognised shape, so nothing was posted.
    Skipped,
}

/// Lambda service turning SNS notifications into chat messages.
///
/// Each invocation decodes the SNS event, formats the first record's body
/// and hands the result to the deliverer.
pub struct NotifyHandler<D> {
    config: Arc<Config>,
    deliverer: Arc<D>,
}

impl<D: Deliver + 'static> NotifyHandler<D> {
    /// Creates a new `NotifyHandler`.
    ///
    /// # Arguments
    ///
    /// * `config` - Bot identity and webhook settings, shared by all invocations.
    /// * `deliverer` - Where formatted messages are sent.
    pub fn new(config: Config, deliverer: D) -> Self {
        NotifyHandler {
            config: Arc::new(config),
            deliverer: Arc::new(deliverer),
        }
    }
}

impl<D> Clone for NotifyHandler<D> {
    fn clone(&self) -> Self {
        NotifyHandler {
            config: Arc::clone(&self.config),
            deliverer: Arc::clone(&self.deliverer),
        }
    }
}

/// Runs one notification through decoding, formatting and delivery.
///
/// # Returns
///
/// The outcome of the invocation, or the first error hit while decoding the
/// event or posting the message.
async fn handle(
    config: Arc<Config>,
    deliverer: Arc<impl Deliver>,
    event: LambdaEvent<Value>,
) -> Result<HandlerOutcome, NotifyError> {
    let event = SnsEvent::from_event(event).map_err(NotifyError::InvalidEvent)?;
    let topic = event.payload.event_name();
    let body = notification_body(&event.payload)?;

    let kind = NotificationKind::of(&body);
    let Some(message) = kind.format(&body, &config) else {
        info!(%topic, "Notification has no recognised shape, skipping");
        return Ok(HandlerOutcome::Skipped);
    };

    info!(%topic, ?kind, color = ?message.color, "Delivering notification");
    deliverer.deliver(message).await?;

    Ok(HandlerOutcome::Delivered)
}

impl<D: Deliver + 'static> Service<LambdaEvent<Value>> for NotifyHandler<D> {
    type Response = HandlerOutcome;
    type Error = LambdaError;
    type Future = LambdaFuture<HandlerOutcome>;

    /// Checks if the service is ready to process a request.
    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    /// Processes an incoming SNS event.
    ///
    /// # Arguments
    ///
    /// * `req` - The raw Lambda invocation.
    ///
    /// # Returns
    ///
    /// A future resolving to the outcome of the invocation, or a Lambda error.
    fn call(&mut self, req: LambdaEvent<Value>) -> Self::Future {
        let config = Arc::clone(&self.config);
        let deliverer = Arc::clone(&self.deliverer);

        Box::pin(async move {
            handle(config, deliverer, req).await.map_err(|e| {
                error!(error = %e, "Failed to process notification");
                LambdaError::from(e)
            })
        })
    }
}
