//
//  pulumi-org
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Pulumi organization API
//!
//! This module provides the error type shared by every resource operation and
//! the status-code classification that turns a completed HTTP exchange into
//! either a success or a structured error.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ValidationError`] - Argument errors raised before any request is sent
//! - [`RawResponse`] - Status code and body bytes of a completed exchange
//! - [`Expect`] - The status codes an operation treats as success
//!
//! # Example
//!
//! ```rust
//! use pulumi_org::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("No such resource"),
//!         Err(ApiError::Validation(e)) => println!("Fix your input: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

mod validation;

pub use validation::*;

/// Status codes the API documents as carrying a `{code, message}` error body.
///
/// `405` is only recognized by operations that opt in through
/// [`Expect::method_not_allowed`].
pub const ERROR_STATUSES: [u16; 5] = [400, 401, 403, 404, 500];

/// Unified error type for all Pulumi API operations.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Validation` | An argument is empty or outside its allowed set (no request sent) |
/// | `Transport` | The request could not be sent or the response not read |
/// | `InvalidBaseUrl` | The configured base URL cannot carry a request path |
/// | `RequestBody` | The request payload could not be encoded |
/// | `Api` | The server answered with a recognized error status |
/// | `Deserialization` | A success or error body did not match its JSON shape |
/// | `UnexpectedStatus` | The status is neither a success nor a recognized error |
///
/// `Transport`, `InvalidBaseUrl` and `RequestBody` form the transport class;
/// see [`ApiError::is_transport`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was empty or not drawn from its allowed set.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Connection failure, TLS failure, timeout, or an unreadable response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The base URL cannot be used to build request paths.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The JSON request body could not be encoded.
    #[error("Could not encode request body: {0}")]
    RequestBody(#[source] serde_json::Error),

    /// The server rejected the request with a recognized error status.
    ///
    /// `status` is the code embedded in the error body, or the HTTP status
    /// when the body carries none (or a zero or out-of-range code).
    #[error("{status} API Error: {message}")]
    Api {
        /// Embedded error code, falling back to the HTTP status.
        status: u16,
        /// Human readable message from the server.
        message: String,
    },

    /// A response body did not decode into the expected shape.
    #[error("Could not decode response body (HTTP {status}): {source}")]
    Deserialization {
        /// HTTP status of the response whose body failed to decode.
        status: u16,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The server answered with a status outside the documented contract.
    #[error("Unexpected status code {0}")]
    UnexpectedStatus(u16),
}

impl ApiError {
    /// Returns the status carried by an [`ApiError::Api`] or
    /// [`ApiError::UnexpectedStatus`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }

    /// True for an API error with status 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// True for API errors with status 401 or 403.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// True when the request never produced a classifiable response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::InvalidBaseUrl(_) | Self::RequestBody(_)
        )
    }
}

/// Error payload returned alongside recognized error statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

/// Success statuses an operation accepts, and whether it recognizes 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expect {
    success: &'static [u16],
    method_not_allowed: bool,
}

impl Expect {
    /// Accept the given statuses as success.
    pub const fn success(codes: &'static [u16]) -> Self {
        Self {
            success: codes,
            method_not_allowed: false,
        }
    }

    /// Also treat `405` as a recognized error carrying an error body.
    pub const fn method_not_allowed(mut self) -> Self {
        self.method_not_allowed = true;
        self
    }

    fn is_success(&self, status: u16) -> bool {
        self.success.contains(&status)
    }

    fn is_known_error(&self, status: u16) -> bool {
        ERROR_STATUSES.contains(&status) || (self.method_not_allowed && status == 405)
    }
}

/// The status code and raw body bytes of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decodes the body as JSON.
    ///
    /// A decoding failure is reported as [`ApiError::Deserialization`]; it is
    /// never replaced by a default value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|source| ApiError::Deserialization {
            status: self.status,
            source,
        })
    }

    /// Classifies the response against an operation's expectation.
    ///
    /// An embedded error code that is absent, zero or outside the range of
    /// HTTP status codes is replaced by the response status.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] for a recognized error status with a decodable body
    /// - [`ApiError::Deserialization`] when that error body is malformed
    /// - [`ApiError::UnexpectedStatus`] for anything else outside `expect`
    pub fn classify(self, expect: &Expect) -> Result<Self, ApiError> {
        if expect.is_success(self.status) {
            return Ok(self);
        }

        if expect.is_known_error(self.status) {
            let body: ErrorBody = self.json()?;
            let status = body
                .code
                .and_then(|code| u16::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(self.status);
            return Err(ApiError::Api {
                status,
                message: body.message,
            });
        }

        Err(ApiError::UnexpectedStatus(self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_success_passes_through() {
        let expect = Expect::success(&[200, 201]);
        let raw = response(201, r#"{"id":"t1"}"#);
        assert_eq!(raw.clone().classify(&expect).unwrap(), raw);
    }

    #[test]
    fn test_missing_code_uses_http_status() {
        let err = response(404, r#"{"message":"not found"}"#)
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_code_uses_http_status() {
        let err = response(403, r#"{"code":0,"message":"forbidden"}"#)
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_embedded_code_is_preserved() {
        let err = response(404, r#"{"code":499,"message":"x"}"#)
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        assert_eq!(err.status(), Some(499));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_out_of_range_code_uses_http_status() {
        for body in [r#"{"code":70000,"message":"bad"}"#, r#"{"code":-1,"message":"bad"}"#] {
            let err = response(400, body)
                .classify(&Expect::success(&[200]))
                .unwrap_err();
            match err {
                ApiError::Api { status, message } => {
                    assert_eq!(status, 400);
                    assert_eq!(message, "bad");
                }
                other => panic!("expected API error for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_method_not_allowed_is_opt_in() {
        let body = r#"{"message":"nope"}"#;

        let err = response(405, body)
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus(405)));

        let err = response(405, body)
            .classify(&Expect::success(&[204]).method_not_allowed())
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 405, .. }));
    }

    #[test]
    fn test_unexpected_status() {
        let err = response(418, "I'm a teapot")
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus(418)));
        assert_eq!(err.status(), Some(418));
    }

    #[test]
    fn test_malformed_error_body_is_an_error_not_a_panic() {
        let err = response(500, "<html>oops</html>")
            .classify(&Expect::success(&[200]))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { status: 500, .. }));
    }

    #[test]
    fn test_json_decode_failure() {
        let err = response(200, "not json").json::<Vec<String>>().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { status: 200, .. }));
        assert!(!err.is_transport());
    }
}
