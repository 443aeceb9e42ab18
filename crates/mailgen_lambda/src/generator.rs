//! Email drafting on top of a hosted text model.

use mailgen_core::contract::{brief_fingerprint, EmailBrief};
use mailgen_core::payload::SamplingParams;
use mailgen_core::prompt::draft_email_prompt;

use crate::adapters::model::TextModel;

/// Status reported for any failed model invocation.
pub const GENERATION_FAILURE_STATUS: u16 = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GenerationFailure {
    pub status_code: u16,
    pub message: String,
}

pub trait EmailGenerator {
    fn generate(&self, brief: &EmailBrief) -> Result<String, GenerationFailure>;
}

/// Builds the drafting prompt and sends it with sampling fixed at construction.
#[derive(Debug, Clone)]
pub struct ModelEmailGenerator<M> {
    model: M,
    sampling: SamplingParams,
}

impl<M: TextModel> ModelEmailGenerator<M> {
    pub fn new(model: M, sampling: SamplingParams) -> Self {
        Self { model, sampling }
    }
}

impl<M: TextModel> EmailGenerator for ModelEmailGenerator<M> {
    fn generate(&self, brief: &EmailBrief) -> Result<String, GenerationFailure> {
        let fingerprint = brief_fingerprint(brief);
        let prompt = draft_email_prompt(brief);

        match self.model.complete(&prompt, self.sampling) {
            Ok(email) => {
                tracing::info!(
                    component = "email_generator",
                    event = "email_generated",
                    request_fingerprint = %fingerprint,
                    email_chars = email.chars().count(),
                    "Email generated successfully"
                );
                Ok(email)
            }
            Err(message) => {
                tracing::error!(
                    component = "email_generator",
                    event = "generation_failed",
                    request_fingerprint = %fingerprint,
                    error = %message,
                    "Error generating email"
                );
                Err(GenerationFailure {
                    status_code: GENERATION_FAILURE_STATUS,
                    message,
                })
            }
        }
    }
}
