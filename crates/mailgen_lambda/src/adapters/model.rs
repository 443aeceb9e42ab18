use mailgen_core::payload::{build_request_body, extract_generated_text, ModelFamily, SamplingParams};

/// Raw model invocation: an encoded request body in, the response body out.
pub trait ModelRuntime {
    fn invoke_model(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, String>;
}

impl<T: ModelRuntime + ?Sized> ModelRuntime for &T {
    fn invoke_model(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, String> {
        (**self).invoke_model(model_id, body)
    }
}

/// Prompt-level access to a hosted model.
pub trait TextModel {
    fn complete(&self, prompt: &str, sampling: SamplingParams) -> Result<String, String>;
}

impl<T: TextModel + ?Sized> TextModel for &T {
    fn complete(&self, prompt: &str, sampling: SamplingParams) -> Result<String, String> {
        (**self).complete(prompt, sampling)
    }
}

/// Encodes prompts for one model id and family and decodes the reply text.
#[derive(Debug, Clone)]
pub struct BedrockTextModel<R> {
    runtime: R,
    model_id: String,
    family: ModelFamily,
}

impl<R: ModelRuntime> BedrockTextModel<R> {
    pub fn new(runtime: R, model_id: impl Into<String>, family: ModelFamily) -> Self {
        Self {
            runtime,
            model_id: model_id.into(),
            family,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }
}

impl<R: ModelRuntime> TextModel for BedrockTextModel<R> {
    fn complete(&self, prompt: &str, sampling: SamplingParams) -> Result<String, String> {
        let request_body = build_request_body(self.family, prompt, sampling);
        let bytes = serde_json::to_vec(&request_body)
            .map_err(|error| format!("failed to encode model request: {error}"))?;
        let response = self.runtime.invoke_model(&self.model_id, &bytes)?;
        extract_generated_text(self.family, &response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::Value;

    use super::*;

    struct CannedRuntime {
        response: Result<Vec<u8>, String>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl CannedRuntime {
        fn new(response: Result<&str, &str>) -> Self {
            Self {
                response: response
                    .map(|body| body.as_bytes().to_vec())
                    .map_err(str::to_string),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ModelRuntime for CannedRuntime {
        fn invoke_model(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, String> {
            let decoded: Value = serde_json::from_slice(body).expect("request should be JSON");
            self.requests
                .lock()
                .expect("poisoned mutex")
                .push((model_id.to_string(), decoded));
            self.response.clone()
        }
    }

    #[test]
    fn sends_family_specific_body_to_configured_model() {
        let model = BedrockTextModel::new(
            CannedRuntime::new(Ok(r#"{"content":[{"text":"Subject: Hi"}]}"#)),
            "anthropic.claude-3-haiku-20240307-v1:0",
            ModelFamily::AnthropicMessages,
        );

        let text = model
            .complete("Draft it", SamplingParams::new(1000, 0.2))
            .expect("completion should succeed");

        assert_eq!(text, "Subject: Hi");
        let requests = model.runtime.requests.lock().expect("poisoned mutex");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(requests[0].1["messages"][0]["content"], "Draft it");
        assert_eq!(requests[0].1["temperature"], 0.2);
    }

    #[test]
    fn transport_error_is_passed_through() {
        let model = BedrockTextModel::new(
            CannedRuntime::new(Err("throttled")),
            "deepseek.r1-v1:0",
            ModelFamily::PromptCompletion,
        );

        let error = model
            .complete("Draft it", SamplingParams::new(1000, 0.7))
            .expect_err("completion should fail");
        assert_eq!(error, "throttled");
    }
}
