use thiserror::Error;

/// Errors raised around the formatter: decoding the invocation, reading
/// configuration and posting to the webhook.
///
/// An unrecognised notification is not an error; the formatter simply
/// returns `None` for it.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invocation payload is not an SNS event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("SNS event contains no records")]
    NoRecords,

    #[error("SNS message body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned HTTP {0}")]
    WebhookStatus(u16),
}
