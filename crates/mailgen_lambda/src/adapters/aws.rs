use std::future::Future;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_s3::primitives::ByteStream;

use crate::adapters::model::ModelRuntime;
use crate::adapters::object_store::ObjectStore;

pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Bedrock runtime client. Requires a multi-threaded tokio runtime.
#[derive(Debug, Clone)]
pub struct BedrockRuntime {
    client: aws_sdk_bedrockruntime::Client,
}

impl BedrockRuntime {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
        }
    }
}

impl ModelRuntime for BedrockRuntime {
    fn invoke_model(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, String> {
        let client = self.client.clone();
        let model_id = model_id.to_string();
        let request_body = body.to_vec();

        block_on_current(async move {
            client
                .invoke_model()
                .model_id(model_id)
                .content_type("application/json")
                .accept("application/json")
                .body(Blob::new(request_body))
                .send()
                .await
                .map(|output| output.body().as_ref().to_vec())
                .map_err(|error| format!("failed to invoke model: {error}"))
        })
    }
}

/// S3 bucket used as the artifact store. Requires a multi-threaded tokio runtime.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(config: &SdkConfig, bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            s3_client: aws_sdk_s3::Client::new(config),
        }
    }
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let content_type = content_type.to_string();
        let client = self.s3_client.clone();

        block_on_current(async move {
            client
                .put_object()
                .bucket(bucket)
                .key(object_key)
                .content_type(content_type)
                .body(ByteStream::from(body_bytes))
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to write object to s3: {error}"))
        })
    }
}

fn block_on_current<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
