pub mod actions;
pub mod engine;
pub mod protocol;

pub mod llm_client;
pub mod prompt_builder;
pub mod response_parser;
