//! Turns AWS SNS notifications into Slack incoming-webhook messages.
//!
//! CloudWatch alarm notifications and ECS task state change events are
//! recognised; anything else is skipped without posting.

pub mod classify;
pub mod config;
pub mod error;
pub mod events;
pub mod handler;
pub mod message;
pub mod webhook;

pub use classify::{classify_and_format, NotificationKind};
pub use config::Config;
pub use error::NotifyError;
pub use handler::{HandlerOutcome, NotifyHandler};
pub use message::{Color, DisplayMessage, Field};
pub use webhook::{Deliver, SlackWebhook};
