use serde_json::Value;

use crate::config::Config;
use crate::message::{Color, DisplayMessage, Field};

/// `detail-type` value carried by ECS task state change events.
pub const TASK_STATE_CHANGE: &str = "ECS Task State Change";

/// The notification shapes the formatter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// CloudWatch alarm state change.
    Alarm,
    /// EventBridge `ECS Task State Change` event.
    TaskStateChange,
    Unrecognized,
}

impl NotificationKind {
    /// Works out which shape `body` has.
    ///
    /// A task state change wins over an alarm when a body somehow carries
    /// both discriminators. A `null` `AlarmName` counts as absent.
    pub fn of(body: &Value) -> Self {
        if body.get("detail-type").and_then(Value::as_str) == Some(TASK_STATE_CHANGE) {
            NotificationKind::TaskStateChange
        } else if matches!(body.get("AlarmName"), Some(name) if !name.is_null()) {
            NotificationKind::Alarm
        } else {
            NotificationKind::Unrecognized
        }
    }
}

/// Formats a parsed notification body for Slack.
///
/// Returns `None` when the body matches no known shape, in which case
/// nothing should be posted. Missing or non-string fields read as empty
/// strings, so a recognised body always produces a message.
pub fn classify_and_format(body: &Value, config: &Config) -> Option<DisplayMessage> {
    NotificationKind::of(body).format(body, config)
}

impl NotificationKind {
    /// Formats `body` as this kind, for callers that already classified it.
    pub fn format(self, body: &Value, config: &Config) -> Option<DisplayMessage> {
        match self {
            NotificationKind::Alarm => Some(format_alarm(body, config)),
            NotificationKind::TaskStateChange => Some(format_task_state_change(body, config)),
            NotificationKind::Unrecognized => None,
        }
    }
}

fn format_alarm(body: &Value, config: &Config) -> DisplayMessage {
    let alarm_name = string_at(body, "AlarmName");
    let new_state = string_at(body, "NewStateValue");
    let reason = string_at(body, "NewStateReason");
    let region = string_at(body, "Region");

    DisplayMessage {
        color: alarm_color(new_state),
        pretext: format!("{}: {} in {}", new_state, alarm_name, region),
        bot_name: config.bot_name.clone(),
        bot_icon: config.bot_icon.clone(),
        fields: vec![
            Field::short("Alarm", alarm_name),
            Field::short("Status", new_state),
            Field::long("Reason", reason),
        ],
    }
}

fn format_task_state_change(body: &Value, config: &Config) -> DisplayMessage {
    let detail = &body["detail"];

    let cluster_name = short_name(string_at(detail, "clusterArn"));
    let task_name = short_name(string_at(detail, "taskArn"));
    let task_definition_name = short_name(string_at(detail, "taskDefinitionArn"));
    let last_status = string_at(detail, "lastStatus");
    let desired_status = string_at(detail, "desiredStatus");
    let stopped_reason = string_at(detail, "stoppedReason");

    let pretext = if last_status == desired_status {
        format!(
            "Task {} in {} cluster changed state: {}",
            task_definition_name, cluster_name, last_status
        )
    } else {
        format!(
            "Task {} in {} cluster is changing state: {} -> {}",
            task_definition_name, cluster_name, last_status, desired_status
        )
    };

    let mut fields = vec![
        Field::short("Last status", last_status),
        Field::short("Desired status", desired_status),
        Field::short("Cluster", cluster_name),
        Field::short("Task definition", task_definition_name),
        Field::short("Task", task_name),
    ];
    // Always last, and only when ECS gave a reason.
    if !stopped_reason.is_empty() {
        fields.push(Field::short("Stopped reason", stopped_reason));
    }

    DisplayMessage {
        color: task_color(desired_status),
        pretext,
        bot_name: config.bot_name.clone(),
        bot_icon: config.bot_icon.clone(),
        fields,
    }
}

/// Colour for a CloudWatch alarm state. Unknown states count as healthy.
pub fn alarm_color(state: &str) -> Color {
    match state {
        "ALARM" => Color::Danger,
        "INSUFFICIENT_DATA" => Color::Warning,
        _ => Color::Good,
    }
}

/// Colour for an ECS task heading towards `desired_status`.
pub fn task_color(desired_status: &str) -> Color {
    match desired_status {
        "STOPPED" => Color::Danger,
        _ => Color::Good,
    }
}

/// Returns the part of an ARN after its last `/`, or the whole string when
/// there is no `/`.
pub fn short_name(arn: &str) -> &str {
    match arn.rfind('/') {
        Some(idx) => &arn[idx + 1..],
        None => arn,
    }
}

fn string_at<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}
