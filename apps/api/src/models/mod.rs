pub mod inputs;
pub mod module;
