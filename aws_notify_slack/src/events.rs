use std::future::Future;
use std::pin::Pin;

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

pub use aws_lambda_events::sns::SnsEvent;

use crate::error::NotifyError;

/// Trait defining methods that AWS events must implement.
pub trait AwsEvent: Send + Sync + Sized + DeserializeOwned {
    /// Deserializes an AWS event from a JSON request.
    fn from_request(request: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(request.clone())
    }

    /// Converts a generic `LambdaEvent` into a specialized AWS event.
    fn from_event(event: LambdaEvent<Value>) -> Result<LambdaEvent<Self>, serde_json::Error> {
        let deserialised: Self = Self::from_request(&event.payload)?;
        Ok(LambdaEvent {
            payload: deserialised,
            context: event.context,
        })
    }

    /// Returns the event name for the AWS event, used to label log lines.
    fn event_name(&self) -> String;
}

// Implement `AwsEvent` trait for `SnsEvent`; the name is the topic ARN.
impl AwsEvent for SnsEvent {
    fn event_name(&self) -> String {
        self.records
            .first()
            .map(|record| record.sns.topic_arn.clone())
            .unwrap_or_default()
    }
}

/// Type alias for a Lambda future, wrapping a boxed dynamic Future trait.
pub type LambdaFuture<R> = Pin<Box<dyn Future<Output = Result<R, LambdaError>> + Send>>;

/// Parses the message body carried by an SNS event.
///
/// SNS hands one notification to each invocation, so only the first record
/// is read; any further records are ignored.
///
/// # Errors
///
/// [`NotifyError::NoRecords`] if the event is empty, and
/// [`NotifyError::MalformedBody`] if the message is not JSON.
pub fn notification_body(event: &SnsEvent) -> Result<Value, NotifyError> {
    let record = event.records.first().ok_or(NotifyError::NoRecords)?;

    if event.records.len() > 1 {
        debug!(
            ignored = event.records.len() - 1,
            "SNS event has more than one record, only the first is used"
        );
    }

    serde_json::from_str(&record.sns.message).map_err(NotifyError::MalformedBody)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sns_record(topic: &str, message: &str) -> Value {
        json!({
            "EventSource": "aws:sns",
            "EventVersion": "1.0",
            "EventSubscriptionArn": "arn:aws:sns:eu-west-1:000000000000:cloudwatch-alarms:subscription",
            "Sns": {
                "Type": "Notification",
                "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                "TopicArn": topic,
                "Subject": "example subject",
                "Message": message,
                "Timestamp": "2022-05-03T07:29:20.000Z",
                "SignatureVersion": "1",
                "Signature": "EXAMPLE",
                "SigningCertUrl": "EXAMPLE",
                "UnsubscribeUrl": "EXAMPLE",
                "MessageAttributes": {}
            }
        })
    }

    fn sns_event(records: Vec<Value>) -> SnsEvent {
        SnsEvent::from_request(&json!({ "Records": records })).unwrap()
    }

    #[test]
    fn event_name_is_topic_arn() {
        let event = sns_event(vec![sns_record("arn:aws:sns:eu-west-1:000000000000:alarms", "{}")]);
        assert_eq!(event.event_name(), "arn:aws:sns:eu-west-1:000000000000:alarms");
    }

    #[test]
    fn empty_event_has_no_name() {
        let event = sns_event(Vec::new());
        assert_eq!(event.event_name(), "");
    }

    #[test]
    fn reads_only_the_first_record() {
        let event = sns_event(vec![
            sns_record("arn:aws:sns:eu-west-1:0:a", r#"{"AlarmName":"first"}"#),
            sns_record("arn:aws:sns:eu-west-1:0:a", r#"{"AlarmName":"second"}"#),
        ]);

        let body = notification_body(&event).unwrap();
        assert_eq!(body, json!({"AlarmName": "first"}));
    }

    #[test]
    fn empty_event_is_an_error() {
        let event = sns_event(Vec::new());
        assert!(matches!(notification_body(&event), Err(NotifyError::NoRecords)));
    }

    #[test]
    fn non_json_message_is_an_error() {
        let event = sns_event(vec![sns_record("arn:aws:sns:eu-west-1:0:a", "CPU is on fire")]);
        assert!(matches!(
            notification_body(&event),
            Err(NotifyError::MalformedBody(_))
        ));
    }

    #[test]
    fn non_sns_payload_does_not_decode() {
        let payload = json!({"Records": [{"s3": {"bucket": {"name": "b"}}}]});
        assert!(SnsEvent::from_request(&payload).is_err());
    }
}
