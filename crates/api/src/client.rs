use postview_types::comment::{Comment, NewComment};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use super::{endpoint::Endpoint, error::Error};

/// Configuration for the client.
/// base_url: Root of the students API. (default: https://mate.academy/students-api)
/// max_retries: How often a failed GET is retried. (default: 0)
/// timeout_ms: Per request timeout. (default: none)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub max_retries: Option<usize>,
    pub timeout_ms: Option<u64>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "https://mate.academy/students-api";
    const DEFAULT_MAX_RETRIES: usize = 0;

    pub fn new(base_url: Option<String>, max_retries: Option<usize>, timeout_ms: Option<u64>) -> Self {
        Config {
            base_url,
            max_retries,
            timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(Self::DEFAULT_BASE_URL)
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries.unwrap_or(Self::DEFAULT_MAX_RETRIES)
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_ms.map(std::time::Duration::from_millis)
    }
}

/// A client for the comments part of the students API.
/// Every request is JSON; any non-2xx status is an error, the status code is
/// the only detail kept.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    const CONTENT_TYPE: &'static str = "application/json; charset=UTF-8";

    pub fn new(cfg: Option<Config>) -> Self {
        let cfg = cfg.unwrap_or_default();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_else(|e| {
            error!("Could not build http client, using defaults: {}", e);
            reqwest::Client::new()
        });
        Self { cfg, http }
    }

    fn new_request(
        &self,
        method: reqwest::Method,
        endpoint: &Endpoint,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let url = endpoint.url(self.cfg.base_url());
        let url = reqwest::Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(self
            .http
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, Self::CONTENT_TYPE))
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let request = request.build()?;
        debug!("Sending {} request to {}", request.method(), request.url());
        self.handle_response(endpoint, self.http.execute(request).await?)
    }

    fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", endpoint, status);
            Ok(resp)
        } else {
            error!("request {} status: {}", endpoint, status);
            Err(Error::StatusCode(status.as_u16()))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let request = self.new_request(reqwest::Method::GET, endpoint)?;
        Ok(self.send(endpoint, request).await?.json().await?)
    }

    pub async fn get_with_retry<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let mut retries: usize = 0;
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(retries as u64)).await;
            match self.get(endpoint).await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_not_found() => return Err(e),
                Err(e) => {
                    if retries >= self.cfg.max_retries() {
                        if retries == 0 {
                            return Err(e);
                        }
                        return Err(Error::MaxRetriesExceeded(format!("{}: {}", endpoint, e)));
                    }
                    error!(
                        "Error getting {}: {}, retrying {} more times",
                        endpoint,
                        e,
                        (self.cfg.max_retries() - retries),
                    );
                    retries += 1;
                }
            }
        }
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, Error> {
        let request = self.new_request(reqwest::Method::POST, endpoint)?.json(body);
        Ok(self.send(endpoint, request).await?.json().await?)
    }

    /// Issues a DELETE; whatever the server answers with on success is ignored.
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<(), Error> {
        let request = self.new_request(reqwest::Method::DELETE, endpoint)?;
        self.send(endpoint, request).await.map(|_| ())
    }

    pub async fn get_comments(&self, post_id: i32) -> Result<Vec<Comment>, Error> {
        self.get_with_retry(&Endpoint::Comments(post_id)).await
    }

    pub async fn create_comment(&self, new_comment: &NewComment) -> Result<Comment, Error> {
        self.post(&Endpoint::NewComment, new_comment).await
    }

    pub async fn delete_comment(&self, comment_id: i32) -> Result<(), Error> {
        self.delete(&Endpoint::Comment(comment_id)).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
