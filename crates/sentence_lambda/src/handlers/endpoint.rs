use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adapters::sentence_source::SentenceSource;
use crate::runtime::contract::ResponseBody;

/// Function-as-a-service envelope returned on the success path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointHandlerError {
    pub message: String,
}

/// Handle one invocation: draw a sentence, reverse it, wrap it in a 200
/// envelope.
///
/// The event payload is accepted but never inspected. A word-source failure
/// is not converted into an error response here; it propagates to the
/// invoking runtime as an unhandled fault.
pub fn handle_endpoint_event(
    _event: &Value,
    source: &impl SentenceSource,
) -> Result<EndpointResponse, EndpointHandlerError> {
    log_endpoint_info("invocation_started", json!({}));

    let original = source.sentence().map_err(|error| {
        log_endpoint_error("invocation_failed", json!({ "error": error.clone() }));
        EndpointHandlerError {
            message: format!("word-generation source failed: {error}"),
        }
    })?;

    let body = ResponseBody::from_sentence(&original);
    let serialized = serde_json::to_string(&body).map_err(|error| EndpointHandlerError {
        message: format!("Failed to serialize response body: {error}"),
    })?;

    log_endpoint_info(
        "invocation_completed",
        json!({
            "length": body.length,
        }),
    );

    Ok(EndpointResponse {
        status_code: 200,
        body: serialized,
    })
}

fn log_endpoint_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "endpoint_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_endpoint_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "endpoint_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
