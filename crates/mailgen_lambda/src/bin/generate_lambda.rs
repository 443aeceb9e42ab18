use lambda_runtime::{service_fn, Error, LambdaEvent};
use mailgen_lambda::adapters::aws::{load_sdk_config, BedrockRuntime, S3ObjectStore};
use mailgen_lambda::adapters::model::BedrockTextModel;
use mailgen_lambda::archive::EmailArchive;
use mailgen_lambda::config::GeneratorConfig;
use mailgen_lambda::generator::ModelEmailGenerator;
use mailgen_lambda::handlers::generate::{handle_generate_event, ApiGatewayResponse};
use mailgen_lambda::telemetry::init_json_logging;
use serde_json::Value;

struct RuntimeDependencies {
    generator: ModelEmailGenerator<BedrockTextModel<BedrockRuntime>>,
    archive: EmailArchive<S3ObjectStore>,
}

impl RuntimeDependencies {
    async fn from_config(config: &GeneratorConfig) -> Self {
        let sdk_config = load_sdk_config(&config.region).await;
        let model = BedrockTextModel::new(
            BedrockRuntime::new(&sdk_config),
            config.model_id.clone(),
            config.model_family,
        );

        Self {
            generator: ModelEmailGenerator::new(model, config.sampling),
            archive: EmailArchive::with_prefix(
                S3ObjectStore::new(&sdk_config, config.bucket.clone()),
                config.key_prefix.clone(),
            ),
        }
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_generate_event(
        event.payload,
        &deps.generator,
        &deps.archive,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_json_logging();

    let config = GeneratorConfig::from_env().map_err(Error::from)?;
    tracing::info!(
        component = "generate_lambda",
        event = "cold_start",
        region = %config.region,
        bucket = %config.bucket,
        model_id = %config.model_id,
        "Initialized clients"
    );
    let deps = RuntimeDependencies::from_config(&config).await;

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
