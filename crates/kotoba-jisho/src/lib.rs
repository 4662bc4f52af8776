pub mod client;
mod response;

pub use client::{DEFAULT_API_URL, JishoClient};

/// One dictionary hit, reduced to what the output file needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDefinition {
    pub surface: String,
    pub reading: String,
    /// Up to three English glosses, in sense order.
    pub definitions: Vec<String>,
}

/// Remote definition provider interface
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up a single word. `Ok(None)` means the dictionary had no usable
    /// entry; `Err` means the request itself failed.
    async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("search returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
