//! Lambda entry point: posts SNS notifications to Slack.

use lambda_runtime::Error as LambdaError;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use aws_notify_slack::{Config, NotifyHandler, SlackWebhook};

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    tracing::info!(bot = %config.bot_name, "Starting Slack notifier");

    let webhook = SlackWebhook::new(config.webhook_url.clone());
    let handler = NotifyHandler::new(config, webhook);

    lambda_runtime::run(handler).await
}
