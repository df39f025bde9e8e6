//
//  pulumi-org
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Pulumi API
//!
//! This module provides the transport layer shared by every resource
//! operation. It owns the HTTP client, the access token and the base URL, and
//! exposes one "execute and classify" helper that the resource modules call.
//!
//! ## Features
//!
//! - Configurable base URL (alternate hosts, local mock servers)
//! - Bounded request timeout (60 seconds by default)
//! - Fixed `Accept`, `Content-Type` and `Authorization` headers
//! - Identifiers encoded as single path segments
//! - Custom User-Agent header
//!
//! ## Concurrency
//!
//! [`reqwest::Client`] pools connections and is safe to share, so a single
//! [`PulumiClient`] may serve any number of concurrent in-flight calls. The
//! client holds no mutable state.

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::common::{ApiError, Expect, RawResponse};

/// Base URL of the hosted Pulumi API.
pub const DEFAULT_BASE_URL: &str = "https://api.pulumi.com/api/";

/// Upper bound on a single request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Versioned media type sent in the `Accept` header.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.pulumi+8";

/// Settings fixed at client construction.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pulumi_org::api::ClientConfig;
///
/// let config = ClientConfig::for_host("pulumi.internal.example.com")
///     .timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url, "https://pulumi.internal.example.com/api/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute URL every request path is resolved against.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", crate::APP_NAME, crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Default settings with the API served from `https://<host>/api/`.
    pub fn for_host(host: &str) -> Self {
        Self {
            base_url: format!("https://{}/api/", host),
            ..Self::default()
        }
    }

    /// Replaces the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A request described as data, consumed by [`PulumiClient::execute`].
///
/// Resource modules build one of these per operation: the path segments
/// (appended to the base URL and percent-encoded one by one), optional query
/// pairs, an optional JSON body, and the statuses that count as success.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    method: Method,
    segments: Vec<&'a str>,
    query: Vec<(&'static str, &'static str)>,
    body: Option<Vec<u8>>,
    expect: Expect,
}

impl<'a> ApiRequest<'a> {
    /// A request with no query and no body.
    pub fn new(method: Method, segments: Vec<&'a str>, expect: Expect) -> Self {
        Self {
            method,
            segments,
            query: Vec::new(),
            body: None,
            expect,
        }
    }

    /// Appends a query pair.
    pub fn query(mut self, key: &'static str, value: &'static str) -> Self {
        self.query.push((key, value));
        self
    }

    /// Serializes `body` as the JSON request payload.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body).map_err(ApiError::RequestBody)?);
        Ok(self)
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The encoded JSON body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// The HTTP client for the Pulumi organization API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use pulumi_org::api::PulumiClient;
///
/// // Hosted API at https://api.pulumi.com/api/
/// let client = PulumiClient::new("pul-0123456789abcdef")?;
///
/// // Self-hosted service
/// let client = PulumiClient::with_host("pul-0123456789abcdef", "pulumi.example.com")?;
/// # Ok::<(), pulumi_org::api::ApiError>(())
/// ```
///
/// An empty token is accepted; the server answers such requests with 401.
#[derive(Clone)]
pub struct PulumiClient {
    /// The underlying HTTP client
    http: Client,
    /// Opaque access token, sent as `Authorization: token <secret>`
    token: String,
    /// Base URL, always able to carry path segments
    base_url: Url,
}

impl fmt::Debug for PulumiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PulumiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl PulumiClient {
    /// Creates a client for the hosted API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_config(token, ClientConfig::default())
    }

    /// Creates a client for the API served by `host` over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `host` does not form a valid
    /// URL.
    pub fn with_host(token: impl Into<String>, host: &str) -> Result<Self, ApiError> {
        Self::from_config(token, ClientConfig::for_host(host))
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidBaseUrl`] if the base URL does not parse or
    ///   cannot carry a path (for example `mailto:` URLs)
    /// - [`ApiError::Transport`] if the HTTP client cannot be built
    pub fn from_config(token: impl Into<String>, config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }

        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            token: token.into(),
            base_url,
        })
    }

    /// The URL request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves path segments and query pairs against the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside an
    /// identifier is sent as `%2F` rather than starting a new segment.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Performs one HTTP round trip and returns the raw status and body.
    ///
    /// No status interpretation happens here; see [`PulumiClient::execute`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on connection failure, timeout, or an
    /// unreadable response body.
    pub async fn send(&self, request: &ApiRequest<'_>) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(&request.segments, &request.query)?;

        debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(header::ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("token {}", self.token));

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "Received API response");

        Ok(RawResponse { status, body })
    }

    /// Sends a request and classifies the response.
    ///
    /// This is the single path every resource operation goes through. On
    /// success the raw response is returned for the caller to decode (or
    /// discard, for operations without a response body).
    ///
    /// # Errors
    ///
    /// Any transport error from [`PulumiClient::send`], plus the
    /// classification errors of [`RawResponse::classify`].
    pub async fn execute(&self, request: ApiRequest<'_>) -> Result<RawResponse, ApiError> {
        let response = self.send(&request).await?;
        response.classify(&request.expect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> PulumiClient {
        PulumiClient::from_config("secret", ClientConfig::default().base_url(base_url)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.pulumi.com/api/");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("porg/"));
    }

    #[test]
    fn test_with_host_keeps_scheme_and_path() {
        let client = PulumiClient::with_host("", "pulumi.example.com").unwrap();
        assert_eq!(client.base_url().as_str(), "https://pulumi.example.com/api/");
    }

    #[test]
    fn test_endpoint_resolves_relative_to_api_path() {
        let url = client(DEFAULT_BASE_URL)
            .endpoint(&["orgs", "acme", "members"], &[("type", "backend")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pulumi.com/api/orgs/acme/members?type=backend"
        );
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let url = client("http://localhost:8080/api")
            .endpoint(&["user", "tokens"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/user/tokens");
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let url = client(DEFAULT_BASE_URL)
            .endpoint(&["orgs", "acme", "teams", "a/b c"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pulumi.com/api/orgs/acme/teams/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        let config = ClientConfig::default().base_url("mailto:ops@example.com");
        let err = PulumiClient::from_config("", config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));

        let err = PulumiClient::from_config("", ClientConfig::default().base_url("not a url"))
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", client(DEFAULT_BASE_URL));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_request_json_body() {
        let request = ApiRequest::new(Method::POST, vec!["user", "tokens"], Expect::success(&[201]))
            .json(&serde_json::json!({"description": "ci"}))
            .unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), Some(br#"{"description":"ci"}"#.as_slice()));
    }
}
