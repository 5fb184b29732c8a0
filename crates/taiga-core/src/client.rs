//! HTTP transport for the Taiga REST API.
//!
//! [`TaigaClient`] owns the HTTP connection pool, the URL builder and the optional
//! bearer token. It is cheap to clone and safe to share between tasks; every
//! entity service holds one. Requests are sent exactly once, there is no retry.

use crate::config::TaigaClientConfig;
use crate::error::{map_status_to_error, Error, Result};
use crate::url_builder::UrlBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("taiga-rust/", env!("CARGO_PKG_VERSION"));

/// Header that asks Taiga for complete, unpaginated list responses.
pub const DISABLE_PAGINATION_HEADER: &str = "x-disable-pagination";

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// HTTP client tuning.
///
/// The request timeout itself comes from [`TaigaClientConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Connection establishment timeout
    pub connect_timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
}

impl ClientConfig {
    /// Create a new HTTP configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TaigaClient`].
#[derive(Debug)]
pub struct TaigaClientBuilder {
    config: TaigaClientConfig,
    http_config: ClientConfig,
    token: Option<SecretString>,
}

impl TaigaClientBuilder {
    /// Create a new builder from a [`TaigaClientConfig`].
    #[must_use]
    pub fn new(config: TaigaClientConfig) -> Self {
        Self {
            config,
            http_config: ClientConfig::new(),
            token: None,
        }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Authenticate every request with the given bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<TaigaClient> {
        let urls = UrlBuilder::new(self.config.parse_api_url()?)?;

        let user_agent = self
            .config
            .user_agent
            .clone()
            .unwrap_or_else(|| USER_AGENT.to_string());

        let mut builder = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(self.config.timeout())
            .connect_timeout(self.http_config.connect_timeout)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host);

        if !self.config.tls_verify {
            warn!("TLS verification disabled for Taiga client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build Taiga HTTP client: {err}"))
        })?;

        Ok(TaigaClient {
            inner: Arc::new(ClientInner {
                http,
                urls,
                token: self.token,
                disable_pagination: self.config.disable_pagination,
            }),
        })
    }
}

#[derive(Debug)]
struct ClientInner {
    http: Client,
    urls: UrlBuilder,
    token: Option<SecretString>,
    disable_pagination: bool,
}

/// Asynchronous Taiga HTTP transport.
#[derive(Debug, Clone)]
pub struct TaigaClient {
    inner: Arc<ClientInner>,
}

impl TaigaClient {
    /// Construct an unauthenticated client for the given host.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        TaigaClientBuilder::new(TaigaClientConfig::new(api_url)?).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: TaigaClientConfig) -> TaigaClientBuilder {
        TaigaClientBuilder::new(config)
    }

    /// Return a new handle sharing this client's connection pool but sending the given
    /// bearer token.
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: self.inner.http.clone(),
                urls: self.inner.urls.clone(),
                token: Some(SecretString::new(token.into().into_boxed_str())),
                disable_pagination: self.inner.disable_pagination,
            }),
        }
    }

    /// Returns true if a bearer token is configured.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Return the API base URL (`<host>/api/v1`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.urls.base()
    }

    /// Build a resource URL from path segments and query pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn make_url<S>(&self, segments: &[S], query: &[(&str, String)]) -> Result<Url>
    where
        S: AsRef<str>,
    {
        self.inner.urls.build(segments, query)
    }

    /// GET a URL and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decoding errors.
    pub async fn get_json<R>(&self, url: Url) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::GET, url, None).await
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decoding errors.
    pub async fn post_json<B, R>(&self, url: Url, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::POST, url, Some(body)).await
    }

    /// PATCH a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decoding errors.
    pub async fn patch_json<B, R>(&self, url: Url, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::PATCH, url, Some(body)).await
    }

    /// PATCH a JSON body and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns transport or status errors.
    pub async fn patch<B>(&self, url: Url, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, url, |request| request.json(body))
            .await
    }

    /// DELETE a URL and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns transport or status errors.
    pub async fn delete(&self, url: Url) -> Result<Response> {
        self.execute(Method::DELETE, url, |request| request).await
    }

    /// POST a multipart form and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decoding errors.
    pub async fn post_multipart<R>(&self, url: Url, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self
            .execute(Method::POST, url, |request| {
                request.header(ACCEPT, "application/json").multipart(form)
            })
            .await?;

        decode(response).await
    }

    async fn send_json<B, R>(&self, method: Method, url: Url, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .execute(method, url, |mut request| {
                request = request.header(ACCEPT, "application/json");
                if let Some(payload) = body {
                    request = request.json(payload);
                }
                request
            })
            .await?;

        decode(response).await
    }

    /// Send one request and map non-success statuses to errors.
    ///
    /// # Errors
    ///
    /// Returns transport or status errors.
    pub async fn execute<F>(&self, method: Method, url: Url, decorate: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        debug!(%method, %url, "Sending Taiga request");

        let mut request = self.inner.http.request(method, url);
        if let Some(token) = &self.inner.token {
            request = request.header(
                AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            );
        }
        if self.inner.disable_pagination {
            request = request.header(DISABLE_PAGINATION_HEADER, "True");
        }

        let response = decorate(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        debug!(%status, "Taiga request rejected");
        Err(map_status_to_error(status, text))
    }
}

async fn decode<R>(response: Response) -> Result<R>
where
    R: DeserializeOwned,
{
    let url = response.url().clone();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| {
        Error::ParseError(format!("Failed to parse Taiga response for `{url}`: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TaigaClient {
        TaigaClient::new(server.uri()).unwrap()
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_connect_timeout(Duration::from_secs(3))
            .with_pool_idle_timeout(Duration::from_secs(120))
            .with_pool_max_idle(20);

        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(120));
        assert_eq!(config.pool_max_idle_per_host, 20);
        assert_eq!(ClientConfig::default(), ClientConfig::new());
    }

    #[tokio::test]
    async fn base_url_carries_api_prefix() {
        let server = MockServer::start().await;
        let client = test_client(&server);
        assert_eq!(
            client.base_url().as_str(),
            format!("{}/api/v1", server.uri())
        );
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn get_json_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/issues/42"))
            .and(header("Authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).with_token("s3cret");
        assert!(client.is_authenticated());
        let url = client.make_url(&["issues", "42"], &[]).unwrap();
        let body: Value = client.get_json(url).await.unwrap();
        assert_eq!(body["id"], 42);
    }

    #[tokio::test]
    async fn pagination_header_sent_when_disabled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tasks"))
            .and(query_param("project", "5"))
            .and(header(DISABLE_PAGINATION_HEADER, "True"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = TaigaClientConfig::new(server.uri())
            .unwrap()
            .with_pagination_disabled(true);
        let client = TaigaClient::builder(config).build().unwrap();
        let url = client
            .make_url(&["tasks"], &[("project", "5".to_string())])
            .unwrap();
        let body: Vec<Value> = client.get_json(url).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn patch_json_sends_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/tasks/9"))
            .and(body_json(json!({"version": 3, "subject": "Ship it"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 9, "version": 4})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client.make_url(&["tasks", "9"], &[]).unwrap();
        let body: Value = client
            .patch_json(url, &json!({"version": 3, "subject": "Ship it"}))
            .await
            .unwrap();
        assert_eq!(body["version"], 4);
    }

    #[tokio::test]
    async fn non_success_status_maps_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/issues"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"subject":["required"]}"#),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client.make_url(&["issues"], &[]).unwrap();
        let err = client
            .post_json::<_, Value>(url, &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, Error::BadRequest(r#"{"subject":["required"]}"#.into()));
    }

    #[tokio::test]
    async fn delete_returns_raw_response() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/epics/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client.make_url(&["epics", "3"], &[]).unwrap();
        let response = client.delete(url).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client.make_url(&["projects", "1"], &[]).unwrap();
        let err = client.get_json::<Value>(url).await.unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
