use const_format::concatcp;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    errors::FetchError,
    googlebooks_schema::volume::{Volume, Volumes},
    types::book::Book,
};

/// Public volumes endpoint; `Config::api_base_url` overrides it.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

const USER_AGENT: &str = concatcp!("bookshelf/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the volumes API.
///
/// Two GETs, no caching, no retries. Connection reuse comes from the shared
/// `reqwest::Client`.
pub struct GoogleBooksClient {
    client:   reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `GET {base}/volumes?q={query}`, in upstream response order.
    ///
    /// `query` must be non-empty here; callers substitute the match-all
    /// placeholder before the transport boundary.
    pub async fn search(&self, query: &str) -> Result<Vec<Book>, FetchError> {
        let url = format!("{}/volumes", self.base_url);
        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        let status = response.status();
        debug!("GET {url} {status}");
        if !status.is_success() {
            return Err(FetchError::new(format!("{}, {}", status, response.url())));
        }
        let body = response.text().await?;
        let volumes: Volumes = decode(&body)?;
        Ok(volumes.items.into_iter().map(Book::from).collect())
    }

    /// `GET {base}/volumes/{id}`.
    pub async fn fetch_by_id(&self, id: &str) -> Result<Book, FetchError> {
        let url = format!("{}/volumes/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("GET {url} {status}");
        if !status.is_success() {
            return Err(FetchError::new(format!("{}, {}", status, response.url())));
        }
        let body = response.text().await?;
        let volume: Volume = decode(&body)?;
        Ok(volume.into())
    }
}

/// Decode a response body, logging the JSON path of a mismatch before it is
/// folded into the one fetch failure the caller sees.
fn decode<'de, T: Deserialize<'de>>(body: &'de str) -> Result<T, FetchError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        warn!("undecodable volumes payload at {}: {err}", err.path());
        FetchError::new(err.to_string())
    })
}
