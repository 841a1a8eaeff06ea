use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::error::CatalogError;
use super::types::{DeckSummary, Textbook, Video};
use crate::traits::CatalogService;

pub const DEFAULT_BASE_URL: &str = "https://mesonjetorja.com";

/// Which remote resource a request addresses.
///
/// Collection kinds take no identifier; detail kinds require one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Textbooks,
    Textbook,
    Chapter,
    Exercise,
    Decks,
    Deck,
    Videos,
}

impl ResourceKind {
    /// API path for this kind, relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Textbooks | Self::Textbook => "api/textbooks",
            Self::Chapter => "api/chapters",
            Self::Exercise => "api/exercises",
            Self::Decks | Self::Deck => "api/decks",
            Self::Videos => "api/videos",
        }
    }
}

/// Catalog API client.
///
/// Every endpoint is a POST with an empty JSON body. One invocation is
/// one network call: no retry, no backoff, no caching — failures
/// surface immediately to the caller.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: Url,
    http: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    fn endpoint(&self, kind: ResourceKind, id: Option<&str>) -> Result<Url, CatalogError> {
        let path = match id {
            Some(id) => format!("{}/{}", kind.path(), id),
            None => kind.path().to_string(),
        };
        self.base
            .join(&path)
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            // Prefer a server-supplied message field when the body is JSON.
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(body);
            Err(CatalogError::Api { status, message })
        }
    }

    /// Perform one request for `(kind, id)` and return the raw JSON
    /// payload unchanged.
    pub async fn fetch(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
    ) -> Result<Value, CatalogError> {
        let url = self.endpoint(kind, id)?;
        tracing::debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<T>, CatalogError> {
        let payload = self.fetch(kind, None).await?;
        serde_json::from_value(payload).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

impl CatalogService for CatalogClient {
    type Error = CatalogError;

    async fn textbooks(&self) -> Result<Vec<Textbook>, CatalogError> {
        self.fetch_list(ResourceKind::Textbooks).await
    }

    async fn textbook(&self, id: &str) -> Result<Value, CatalogError> {
        self.fetch(ResourceKind::Textbook, Some(id)).await
    }

    async fn chapter(&self, id: &str) -> Result<Value, CatalogError> {
        self.fetch(ResourceKind::Chapter, Some(id)).await
    }

    async fn exercise(&self, id: &str) -> Result<Value, CatalogError> {
        self.fetch(ResourceKind::Exercise, Some(id)).await
    }

    async fn decks(&self) -> Result<Vec<DeckSummary>, CatalogError> {
        self.fetch_list(ResourceKind::Decks).await
    }

    async fn deck(&self, id: &str) -> Result<Value, CatalogError> {
        self.fetch(ResourceKind::Deck, Some(id)).await
    }

    async fn videos(&self) -> Result<Vec<Video>, CatalogError> {
        self.fetch_list(ResourceKind::Videos).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let client = CatalogClient::new("https://catalog.example.com").unwrap();

        let url = client.endpoint(ResourceKind::Textbooks, None).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.com/api/textbooks");

        let url = client.endpoint(ResourceKind::Chapter, Some("c42")).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.com/api/chapters/c42");

        let url = client.endpoint(ResourceKind::Deck, Some("d9")).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.com/api/decks/d9");

        let url = client.endpoint(ResourceKind::Videos, None).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.com/api/videos");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(CatalogClient::new("not a url").is_err());
    }
}
