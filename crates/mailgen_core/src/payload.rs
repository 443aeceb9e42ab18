//! Wire encoding for model invocations.
//!
//! Two model families are supported. Both carry the same prompt and sampling
//! parameters; only the request body layout and the response field path differ.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const ANTHROPIC_BEDROCK_VERSION: &str = "bedrock-2023-05-31";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Single `prompt` string in, `generation` string out.
    PromptCompletion,
    /// Anthropic messages list in, `content[0].text` out.
    AnthropicMessages,
}

impl ModelFamily {
    /// Picks the family a Bedrock model id belongs to.
    pub fn infer(model_id: &str) -> Self {
        if model_id.starts_with("anthropic.") || model_id.contains(".anthropic.") {
            Self::AnthropicMessages
        } else {
            Self::PromptCompletion
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prompt" | "prompt_completion" => Some(Self::PromptCompletion),
            "messages" | "anthropic_messages" => Some(Self::AnthropicMessages),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl SamplingParams {
    pub const fn new(max_tokens: u32, temperature: f64) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

pub fn build_request_body(family: ModelFamily, prompt: &str, sampling: SamplingParams) -> Value {
    match family {
        ModelFamily::PromptCompletion => json!({
            "prompt": prompt,
            "max_tokens": sampling.max_tokens,
            "temperature": sampling.temperature,
        }),
        ModelFamily::AnthropicMessages => json!({
            "anthropic_version": ANTHROPIC_BEDROCK_VERSION,
            "max_tokens": sampling.max_tokens,
            "temperature": sampling.temperature,
            "messages": [
                {"role": "user", "content": prompt}
            ],
        }),
    }
}

/// Reads the generated text out of a raw model response body.
pub fn extract_generated_text(family: ModelFamily, body: &[u8]) -> Result<String, String> {
    let response: Value = serde_json::from_slice(body)
        .map_err(|error| format!("model response is not valid JSON: {error}"))?;

    match family {
        ModelFamily::PromptCompletion => Ok(response
            .get("generation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        ModelFamily::AnthropicMessages => response
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| "model response is missing content[0].text".to_string()),
    }
}
