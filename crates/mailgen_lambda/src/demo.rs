//! Minimal client for exercising a deployed generate endpoint.

use mailgen_core::contract::GenerationRequest;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub status_code: u16,
    pub body: String,
}

/// The sample brief posted when no overrides are given.
pub fn demo_request() -> GenerationRequest {
    GenerationRequest {
        purpose: Some("Requesting information about a product".to_string()),
        recipient: Some("Sales department".to_string()),
        key_points: Some(
            "Interested in pricing, availability, and technical specifications for Product X"
                .to_string(),
        ),
        tone: Some("professional".to_string()),
    }
}

pub fn post_generation_request(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    api_key: &str,
    request: &GenerationRequest,
) -> Result<EndpointReply, reqwest::Error> {
    let response = client
        .post(endpoint)
        .header(API_KEY_HEADER, api_key)
        .json(request)
        .send()?;

    let status_code = response.status().as_u16();
    let body = response.text()?;
    Ok(EndpointReply { status_code, body })
}
