use crate::error::NotifyError;

/// Bot name used when `USERNAME` is not set.
pub const DEFAULT_BOT_NAME: &str = "AWS-bot";

/// Bot icon used when `ICON` is not set.
pub const DEFAULT_BOT_ICON: &str = ":loudspeaker:";

const BOT_NAME_VAR: &str = "USERNAME";
const BOT_ICON_VAR: &str = "ICON";
const WEBHOOK_URL_VAR: &str = "SLACK_HOOK";

/// Runtime settings for the notifier.
///
/// Loaded once at cold start and shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bot_name: String,
    pub bot_icon: String,
    pub webhook_url: String,
}

impl Config {
    /// Creates a configuration posting to `webhook_url` with the default bot
    /// name and icon.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Config {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            bot_icon: DEFAULT_BOT_ICON.to_string(),
            webhook_url: webhook_url.into(),
        }
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn with_bot_icon(mut self, bot_icon: impl Into<String>) -> Self {
        self.bot_icon = bot_icon.into();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingConfig`] if `SLACK_HOOK` is unset or
    /// empty.
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Empty
    /// values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let webhook_url =
            read(WEBHOOK_URL_VAR).ok_or(NotifyError::MissingConfig(WEBHOOK_URL_VAR))?;

        Ok(Config {
            bot_name: read(BOT_NAME_VAR).unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            bot_icon: read(BOT_ICON_VAR).unwrap_or_else(|| DEFAULT_BOT_ICON.to_string()),
            webhook_url,
        })
    }
}
