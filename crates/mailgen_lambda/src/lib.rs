//! AWS-facing adapters and handlers for the email drafting service.
//!
//! This crate owns runtime integration details (the API Gateway Lambda handler,
//! Bedrock and S3 adapters, configuration, and logging setup). Prompt templates,
//! payload shapes, and validation come from `mailgen_core`.

pub mod adapters;
pub mod archive;
pub mod config;
pub mod demo;
pub mod generator;
pub mod handlers;
pub mod telemetry;
