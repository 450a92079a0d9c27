use serde::Serialize;

/// Severity colour understood by Slack attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Warning,
    Danger,
}

/// One `title`/`value` pair rendered in the attachment body.
///
/// `short` fields are laid out side by side; the rest take a full row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "is_false")]
    pub short: bool,
}

impl Field {
    /// Creates a field rendered side by side with its neighbours.
    pub fn short(title: &str, value: impl Into<String>) -> Self {
        Field {
            title: title.to_string(),
            value: value.into(),
            short: true,
        }
    }

    /// Creates a field that spans the whole attachment width.
    pub fn long(title: &str, value: impl Into<String>) -> Self {
        Field {
            title: title.to_string(),
            value: value.into(),
            short: false,
        }
    }
}

/// A formatted notification, ready to be posted to a Slack webhook.
///
/// Serializes to the attachment layout Slack expects, leaving out any key
/// whose value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMessage {
    pub color: Color,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pretext: String,
    #[serde(rename = "username", skip_serializing_if = "String::is_empty")]
    pub bot_name: String,
    #[serde(rename = "icon_emoji", skip_serializing_if = "String::is_empty")]
    pub bot_icon: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
