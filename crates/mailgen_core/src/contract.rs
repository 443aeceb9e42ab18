use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const DEFAULT_TONE: &str = "professional";
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Missing required parameters (purpose, recipient, or key_points)";
pub const LOG_PREVIEW_CHARS: usize = 20;

/// Inbound generation request as it arrives on the wire.
///
/// Every field is optional here so that absence can be reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

/// A validated request: all required fields present and non-blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailBrief {
    pub purpose: String,
    pub recipient: String,
    pub key_points: String,
    pub tone: String,
}

/// Document persisted for every successfully generated email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRecord {
    pub purpose: String,
    pub recipient: String,
    pub key_points: String,
    pub tone: String,
    pub generated_email: String,
}

impl EmailRecord {
    pub fn new(brief: &EmailBrief, generated_email: impl Into<String>) -> Self {
        Self {
            purpose: brief.purpose.clone(),
            recipient: brief.recipient.clone(),
            key_points: brief.key_points.clone(),
            tone: brief.tone.clone(),
            generated_email: generated_email.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub email: String,
    pub email_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks presence of the required fields and applies the default tone.
///
/// Values are passed through verbatim. Only absent or empty values count as
/// missing; the default tone applies only when `tone` is absent.
pub fn normalize_request(request: GenerationRequest) -> Result<EmailBrief, ValidationError> {
    let (Some(purpose), Some(recipient), Some(key_points)) = (
        non_empty(request.purpose),
        non_empty(request.recipient),
        non_empty(request.key_points),
    ) else {
        return Err(ValidationError::new(MISSING_PARAMETERS_MESSAGE));
    };

    let tone = request.tone.unwrap_or_else(|| DEFAULT_TONE.to_string());

    Ok(EmailBrief {
        purpose,
        recipient,
        key_points,
        tone,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Stable digest of a brief, safe to log in place of user content.
pub fn brief_fingerprint(brief: &EmailBrief) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stable_contract_json(brief));
    format!("{:x}", hasher.finalize())
}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).unwrap_or_default()
}

/// Truncates `text` to at most `max_chars` characters for log output.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
