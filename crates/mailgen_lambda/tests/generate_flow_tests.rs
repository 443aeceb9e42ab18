use std::collections::BTreeMap;
use std::sync::Mutex;

use mailgen_core::payload::{ModelFamily, SamplingParams};
use mailgen_lambda::adapters::model::{BedrockTextModel, ModelRuntime};
use mailgen_lambda::adapters::object_store::ObjectStore;
use mailgen_lambda::archive::EmailArchive;
use mailgen_lambda::generator::ModelEmailGenerator;
use mailgen_lambda::handlers::generate::handle_generate_event;
use serde_json::{json, Value};

const REFUND_EMAIL: &str =
    "Subject: Refund Request\n\nDear Support Team,\n\nMy order #123 arrived damaged.";

struct StubRuntime {
    response: Result<Value, String>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl StubRuntime {
    fn replying(response: Result<Value, &str>) -> Self {
        Self {
            response: response.map_err(str::to_string),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl ModelRuntime for StubRuntime {
    fn invoke_model(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, String> {
        let request: Value = serde_json::from_slice(body).expect("request body is JSON");
        self.requests
            .lock()
            .expect("poisoned mutex")
            .push((model_id.to_string(), request));
        self.response
            .clone()
            .map(|value| serde_json::to_vec(&value).expect("response serializes"))
    }
}

#[derive(Default)]
struct BucketStub {
    objects: Mutex<BTreeMap<String, Value>>,
}

impl ObjectStore for BucketStub {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String> {
        assert_eq!(content_type, "application/json");
        let document: Value = serde_json::from_slice(body).expect("stored body is JSON");
        self.objects
            .lock()
            .expect("poisoned mutex")
            .insert(key.to_string(), document);
        Ok(())
    }
}

fn refund_event() -> Value {
    json!({
        "resource": "/generate",
        "httpMethod": "POST",
        "body": json!({
            "purpose": "Requesting a refund",
            "recipient": "support team",
            "key_points": "order #123 arrived damaged",
            "tone": "polite"
        })
        .to_string()
    })
}

#[test]
fn refund_request_flows_through_model_and_bucket() {
    let runtime = StubRuntime::replying(Ok(json!({ "generation": REFUND_EMAIL })));
    let bucket = BucketStub::default();
    let generator = ModelEmailGenerator::new(
        BedrockTextModel::new(&runtime, "deepseek.r1-v1:0", ModelFamily::PromptCompletion),
        SamplingParams::new(1000, 0.7),
    );
    let archive = EmailArchive::new(&bucket);

    let response = handle_generate_event(refund_event(), &generator, &archive);

    assert_eq!(response.status_code, 200);
    let body = response.body_json().expect("json body");
    assert_eq!(body["email"], REFUND_EMAIL);
    let email_id = body["email_id"].as_str().expect("email_id is a string");
    assert!(!email_id.is_empty());

    let requests = runtime.requests.lock().expect("poisoned mutex");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "deepseek.r1-v1:0");
    let prompt = requests[0].1["prompt"].as_str().expect("prompt is a string");
    assert!(prompt.contains("Purpose: Requesting a refund"));
    assert!(prompt.contains("Tone: polite"));
    assert_eq!(requests[0].1["max_tokens"], 1000);

    let objects = bucket.objects.lock().expect("poisoned mutex");
    let stored = objects
        .get(&format!("emails/{email_id}.json"))
        .expect("email should be persisted");
    assert_eq!(
        stored,
        &json!({
            "purpose": "Requesting a refund",
            "recipient": "support team",
            "key_points": "order #123 arrived damaged",
            "tone": "polite",
            "generated_email": REFUND_EMAIL
        })
    );
}

#[test]
fn model_outage_surfaces_as_server_error_without_persisting() {
    let runtime = StubRuntime::replying(Err("failed to invoke model: service unavailable"));
    let bucket = BucketStub::default();
    let generator = ModelEmailGenerator::new(
        BedrockTextModel::new(
            &runtime,
            "anthropic.claude-3-haiku-20240307-v1:0",
            ModelFamily::AnthropicMessages,
        ),
        SamplingParams::new(1000, 0.7),
    );
    let archive = EmailArchive::new(&bucket);

    let response = handle_generate_event(refund_event(), &generator, &archive);

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json().expect("json body")["error"],
        "failed to invoke model: service unavailable"
    );
    assert!(bucket.objects.lock().expect("poisoned mutex").is_empty());
}

#[test]
fn messages_family_reads_first_content_block() {
    let runtime = StubRuntime::replying(Ok(json!({
        "content": [{"type": "text", "text": "Subject: Hello"}]
    })));
    let bucket = BucketStub::default();
    let generator = ModelEmailGenerator::new(
        BedrockTextModel::new(
            &runtime,
            "anthropic.claude-3-haiku-20240307-v1:0",
            ModelFamily::AnthropicMessages,
        ),
        SamplingParams::new(1000, 0.7),
    );
    let archive = EmailArchive::new(&bucket);

    let response = handle_generate_event(refund_event(), &generator, &archive);

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_json().expect("json body")["email"], "Subject: Hello");
    let requests = runtime.requests.lock().expect("poisoned mutex");
    assert_eq!(requests[0].1["anthropic_version"], "bedrock-2023-05-31");
}
