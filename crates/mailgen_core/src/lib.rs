//! Shared email drafting primitives.
//!
//! This crate owns request validation, prompt templates, model payload shapes,
//! and the parsing of free-text model replies. It intentionally excludes AWS SDK
//! and Lambda runtime concerns, which live in `mailgen_lambda`.

pub mod contract;
pub mod evaluation;
pub mod extract;
pub mod payload;
pub mod prompt;
pub mod storage_keys;
