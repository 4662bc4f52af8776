use crate::response::SearchResponse;
use crate::{DefinitionSource, LookupError, WordDefinition};

pub const DEFAULT_API_URL: &str = "https://jisho.org/api/v1/search/words";

/// Client for the Jisho word-search API.
#[derive(Clone)]
pub struct JishoClient {
    api_url: String,
    client: reqwest::Client,
}

impl JishoClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl DefinitionSource for JishoClient {
    async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, LookupError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", word)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_definition())
    }
}
