pub mod llm;
pub mod profile;
pub mod search;
