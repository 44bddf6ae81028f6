use std::time::Duration;

use govdocs_core::{FilterQuery, RetrievalMode, RetrievalResult};
use govdocs_logging::govdocs_debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::wire::{self, DocumentsReply, ScrapeBody, ScrapeReply};
use crate::{ClientError, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    /// `limit` sent with `GET /documents`; only the total is read back.
    pub documents_limit: u32,
    /// `limit` sent with the filter/process endpoints.
    pub filter_limit: u32,
    pub connect_timeout: Duration,
}

pub const DEFAULT_DOCUMENTS_LIMIT: u32 = 1;
pub const DEFAULT_FILTER_LIMIT: u32 = 1000;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

impl ClientSettings {
    /// Settings for the service rooted at `base_url`, other fields at their defaults.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            documents_limit: DEFAULT_DOCUMENTS_LIMIT,
            filter_limit: DEFAULT_FILTER_LIMIT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }
}

/// Parses a service root, forcing a trailing slash so endpoint paths join
/// beneath it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::new(
            FailureKind::InvalidUrl,
            format!("{raw} cannot be used as a base url"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Remote operations the client state machine depends on.
#[async_trait::async_trait]
pub trait DocumentService: Send + Sync {
    /// `POST /scrape`; returns the number of newly persisted documents.
    async fn scrape(&self, sources: &[String]) -> Result<u64, ClientError>;

    /// `GET /documents`; returns the persisted total.
    async fn total_documents(&self) -> Result<u64, ClientError>;

    async fn retrieve(
        &self,
        query: &FilterQuery,
        mode: RetrievalMode,
    ) -> Result<RetrievalResult, ClientError>;

    /// `DELETE /documents`.
    async fn clear_documents(&self) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDocumentService {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestDocumentService {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        // Connect timeout only; a scrape request can run for several minutes.
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str, limit: Option<u32>) -> Result<Url, ClientError> {
        let mut url = self
            .settings
            .base_url
            .join(path)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ClientError> {
        govdocs_debug!("{} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl DocumentService for ReqwestDocumentService {
    async fn scrape(&self, sources: &[String]) -> Result<u64, ClientError> {
        let url = self.endpoint("scrape", None)?;
        let body = wire::encode(&ScrapeBody { sources })?;
        let bytes = self.send(Method::POST, url, Some(body)).await?;
        let reply: ScrapeReply = wire::decode(&bytes)?;
        Ok(reply.total)
    }

    async fn total_documents(&self) -> Result<u64, ClientError> {
        let url = self.endpoint("documents", Some(self.settings.documents_limit))?;
        let bytes = self.send(Method::GET, url, None).await?;
        let reply: DocumentsReply = wire::decode(&bytes)?;
        Ok(reply.total)
    }

    async fn retrieve(
        &self,
        query: &FilterQuery,
        mode: RetrievalMode,
    ) -> Result<RetrievalResult, ClientError> {
        let path = match mode {
            RetrievalMode::Filter => "documents/filter",
            RetrievalMode::Process => "documents/process",
        };
        let url = self.endpoint(path, Some(self.settings.filter_limit))?;
        let body = wire::encode(query)?;
        let bytes = self.send(Method::POST, url, Some(body)).await?;
        wire::decode_retrieval(&bytes)
    }

    async fn clear_documents(&self) -> Result<(), ClientError> {
        let url = self.endpoint("documents", None)?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}

fn status_error(status: StatusCode) -> ClientError {
    ClientError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ClientError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
