//! Transport seam between the route client and the HTTP stack.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Status and raw body of a completed exchange. Non-2xx replies are still `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait RouteTransport: Send + Sync {
    /// Sends `body` as `application/json`.
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<HttpReply, TransportError>;
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError>;
}

pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(server_url).map_err(|source| TransportError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|source| TransportError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    async fn collect(res: reqwest::Response) -> Result<HttpReply, TransportError> {
        let status = res.status().as_u16();
        let body = res.bytes().await?;
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

#[async_trait]
impl RouteTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<HttpReply, TransportError> {
        let res = self
            .http
            .post(self.endpoint(path)?)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Self::collect(res).await
    }

    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        let res = self.http.get(self.endpoint(path)?).send().await?;
        Self::collect(res).await
    }
}
