//! LLM-backed suggestion generation for the AI client.

pub mod llm;

pub use llm::SuggestionClient;
