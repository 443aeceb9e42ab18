use mailgen_core::payload::{ModelFamily, SamplingParams, DEFAULT_MAX_TOKENS};
use mailgen_core::storage_keys::EMAIL_KEY_PREFIX;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BUCKET: &str = "emaill-generatorcc";
pub const DEFAULT_GENERATOR_MODEL_ID: &str = "deepseek.r1-v1:0";
pub const GENERATION_SAMPLING: SamplingParams = SamplingParams::new(DEFAULT_MAX_TOKENS, 0.7);

/// Cold-start configuration for the generate Lambda.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub region: String,
    pub bucket: String,
    pub key_prefix: String,
    pub model_id: String,
    pub model_family: ModelFamily,
    pub sampling: SamplingParams,
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let model_id = read("EMAIL_MODEL_ID", DEFAULT_GENERATOR_MODEL_ID);
        let model_family = match lookup("EMAIL_MODEL_FAMILY").filter(|value| !value.trim().is_empty()) {
            Some(value) => ModelFamily::parse(&value).ok_or_else(|| {
                format!("EMAIL_MODEL_FAMILY must be `prompt` or `messages`, got `{value}`")
            })?,
            None => ModelFamily::infer(&model_id),
        };

        Ok(Self {
            region: read("AWS_REGION", DEFAULT_REGION),
            bucket: read("S3_BUCKET_NAME", DEFAULT_BUCKET),
            key_prefix: EMAIL_KEY_PREFIX.to_string(),
            model_id,
            model_family,
            sampling: GENERATION_SAMPLING,
        })
    }
}
