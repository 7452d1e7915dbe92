// Section lifecycle after generation: store, revision, translation, export.
// All model calls go through llm_client::ModelGateway.

pub mod export;
pub mod handlers;
pub mod prompts;
pub mod revision;
pub mod store;
pub mod translator;
