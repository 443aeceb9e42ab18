use mailgen_core::contract::{
    brief_fingerprint, normalize_request, preview, EmailRecord, GenerateResponse,
    GenerationRequest, ValidationError, LOG_PREVIEW_CHARS,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::adapters::object_store::ObjectStore;
use crate::archive::EmailArchive;
use crate::generator::{EmailGenerator, GenerationFailure};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationFailure),
    #[error("{0}")]
    Internal(String),
}

/// Runs validate, generate, persist for one API Gateway event.
///
/// Every stage error is mapped to a response here, so the Lambda runtime
/// always receives a well-formed gateway response.
pub fn handle_generate_event<S: ObjectStore>(
    event: Value,
    generator: &dyn EmailGenerator,
    archive: &EmailArchive<S>,
) -> ApiGatewayResponse {
    match generate_email_response(event, generator, archive) {
        Ok(body) => json_response(200, body),
        Err(HandlerError::Validation(error)) => {
            tracing::warn!(
                component = "generate_handler",
                event = "validation_failed",
                error = %error,
                "Rejected request"
            );
            error_response(400, error.message())
        }
        Err(HandlerError::Generation(failure)) => {
            error_response(failure.status_code, &failure.message)
        }
        Err(HandlerError::Internal(message)) => {
            tracing::error!(
                component = "generate_handler",
                event = "unhandled_error",
                error = %message,
                "Unhandled exception"
            );
            error_response(500, &format!("Internal server error: {message}"))
        }
    }
}

fn generate_email_response<S: ObjectStore>(
    event: Value,
    generator: &dyn EmailGenerator,
    archive: &EmailArchive<S>,
) -> Result<String, HandlerError> {
    tracing::info!(
        component = "generate_handler",
        event = "request_received",
        event_keys = %event_keys(&event),
        "Received event"
    );

    let payload = normalize_apigw_event(event).map_err(HandlerError::Internal)?;
    let request = serde_json::from_value::<GenerationRequest>(payload)
        .map_err(|error| HandlerError::Internal(format!("Malformed request: {error}")))?;

    tracing::info!(
        component = "generate_handler",
        event = "parameters_received",
        purpose = %preview(request.purpose.as_deref().unwrap_or_default(), LOG_PREVIEW_CHARS),
        recipient = %preview(request.recipient.as_deref().unwrap_or_default(), LOG_PREVIEW_CHARS),
        tone = request.tone.as_deref().unwrap_or_default(),
        "Received parameters"
    );

    let brief = normalize_request(request)?;
    let email = generator.generate(&brief)?;

    let email_id = archive.save(&EmailRecord::new(&brief, email.as_str()), None);
    if email_id.is_none() {
        tracing::warn!(
            component = "generate_handler",
            event = "persist_skipped",
            request_fingerprint = %brief_fingerprint(&brief),
            "Returning generated email without a stored copy"
        );
    }

    serde_json::to_string(&GenerateResponse { email, email_id })
        .map_err(|error| HandlerError::Internal(error.to_string()))
}

/// Unwraps the proxy integration envelope into the request payload.
fn normalize_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Ok(event);
    };

    match body {
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        _ => Err("Request body must be a JSON object".to_string()),
    }
}

fn event_keys(event: &Value) -> String {
    event
        .as_object()
        .map(|object| object.keys().cloned().collect::<Vec<_>>().join(","))
        .unwrap_or_default()
}

fn response_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
    })
}

fn json_response(status_code: u16, body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: response_headers(),
        body,
    }
}

fn error_response(status_code: u16, message: &str) -> ApiGatewayResponse {
    json_response(status_code, json!({ "error": message }).to_string())
}
