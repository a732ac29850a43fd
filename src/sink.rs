// src/sink.rs
//
// The remote store. One record per POST; the WordPress plugin rejects
// duplicates itself, which is what makes reruns safe — there is no
// local state between runs.

use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::config::consts::SINK_TIMEOUT_SECS;
use crate::engine::ReconciledRecord;
use crate::error::DeliveryError;

/// What the sink said about one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkAck {
    Accepted,
    /// The sink already holds this record. Expected on reruns; not an
    /// error.
    Duplicate,
}

pub trait RecordSink {
    fn post(&self, record: &ReconciledRecord) -> Result<SinkAck, DeliveryError>;
}

/// Sink over the WordPress ingest plugin's REST route. Posts only the
/// payload keys the route expects; records may carry extra fields that
/// exist for filtering or identity purposes.
pub struct WordPressSink {
    client: reqwest::blocking::Client,
    endpoint: String,
    post_fields: &'static [&'static str],
}

impl WordPressSink {
    pub fn new(
        sink_base: &str,
        route: &str,
        post_fields: &'static [&'static str],
    ) -> Result<Self, DeliveryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SINK_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/{}", sink_base.trim_end_matches('/'), route),
            post_fields,
        })
    }
}

impl RecordSink for WordPressSink {
    fn post(&self, record: &ReconciledRecord) -> Result<SinkAck, DeliveryError> {
        let payload: std::collections::BTreeMap<&str, &str> = self
            .post_fields
            .iter()
            .map(|f| (*f, record.record.get(f)))
            .collect();

        let response = self.client.post(&self.endpoint).json(&payload).send()?;

        let status = response.status();
        let body: Value = response.json().unwrap_or(Value::Null);
        debug!("sink {}: {} {}", self.endpoint, status, body);

        classify(status.is_success(), &body)
    }
}

/// Maps the plugin's reply onto an ack.
///
/// The plugin signals an existing record two ways: a success body with
/// `"status": "duplicate"`, or an error body with
/// `"code": "duplicate_entry"`. Both mean the record is already stored.
pub fn classify(success: bool, body: &Value) -> Result<SinkAck, DeliveryError> {
    let code = body.get("code").and_then(Value::as_str);
    let status = body.get("status").and_then(Value::as_str);

    if code == Some("duplicate_entry") || status == Some("duplicate") {
        return Ok(SinkAck::Duplicate);
    }
    if success {
        return Ok(SinkAck::Accepted);
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unrecognized sink error");
    Err(DeliveryError::Rejected(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_is_accepted() {
        let ack = classify(true, &json!({"status": "ok", "id": 991})).unwrap();
        assert_eq!(ack, SinkAck::Accepted);
    }

    #[test]
    fn duplicate_is_signaled_on_both_paths() {
        let on_ok = classify(true, &json!({"status": "duplicate"})).unwrap();
        assert_eq!(on_ok, SinkAck::Duplicate);

        let on_err = classify(false, &json!({"code": "duplicate_entry", "message": "exists"})).unwrap();
        assert_eq!(on_err, SinkAck::Duplicate);
    }

    #[test]
    fn other_errors_are_rejections_with_the_sink_message() {
        let err = classify(false, &json!({"code": "rest_forbidden", "message": "no auth"}))
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected(m) if m == "no auth"));
    }

    #[test]
    fn empty_error_body_still_rejects() {
        let err = classify(false, &Value::Null).unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected(_)));
    }
}
