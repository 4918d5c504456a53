pub mod exa_client;

pub use exa_client::ExaSearchClient;
