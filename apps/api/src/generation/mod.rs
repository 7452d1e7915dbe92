// Draft generation: prompt building, sequential model calls, motivation
// response parsing and progress reporting.
// All model calls go through llm_client::ModelGateway.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod progress;
pub mod prompts;
pub mod response;
