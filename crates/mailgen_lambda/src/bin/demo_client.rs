use std::process::ExitCode;

use clap::Parser;
use mailgen_core::contract::GenerationRequest;
use mailgen_lambda::demo::{demo_request, post_generation_request};

#[derive(Parser)]
#[command(
    name = "demo_client",
    about = "Post a sample email brief to the deployed generate endpoint"
)]
struct Cli {
    /// Full URL of the generate endpoint
    #[arg(long, env = "MAILGEN_API_URL")]
    endpoint: String,
    /// API Gateway key sent as `x-api-key`
    #[arg(long, env = "MAILGEN_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(long)]
    purpose: Option<String>,
    #[arg(long)]
    recipient: Option<String>,
    #[arg(long)]
    key_points: Option<String>,
    #[arg(long)]
    tone: Option<String>,
}

impl Cli {
    fn request(&self) -> GenerationRequest {
        let defaults = demo_request();
        GenerationRequest {
            purpose: self.purpose.clone().or(defaults.purpose),
            recipient: self.recipient.clone().or(defaults.recipient),
            key_points: self.key_points.clone().or(defaults.key_points),
            tone: self.tone.clone().or(defaults.tone),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = reqwest::blocking::Client::new();

    match post_generation_request(&client, &cli.endpoint, &cli.api_key, &cli.request()) {
        Ok(reply) => {
            println!("Status Code: {}", reply.status_code);
            println!("Response: {}", reply.body);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
