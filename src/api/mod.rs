//
//  pulumi-org
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Pulumi organization-management REST API: access
//! tokens, organization members, teams and team membership.
//!
//! ## Architecture
//!
//! - [`client`]: HTTP transport, headers, base URL and the shared
//!   execute-and-classify helper
//! - [`common`]: error types, argument validation and status classification
//! - [`tokens`], [`members`], [`teams`]: request/response shapes and one
//!   operation per verb, implemented as methods on [`PulumiClient`]
//!
//! Every operation validates its arguments, builds a path under the base URL,
//! sends at most one request, and classifies the response. Nothing is cached
//! and nothing is retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pulumi_org::api::{PulumiClient, TeamKind};
//!
//! # async fn example() -> Result<(), pulumi_org::api::ApiError> {
//! let client = PulumiClient::new("pul-0123456789abcdef")?;
//!
//! let team = client
//!     .create_team("acme", "platform", TeamKind::Pulumi, "Platform", "Infra owners")
//!     .await?;
//! client.add_member_to_team("acme", &team.name, "octocat").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`ApiError`]:
//!
//! - `Validation`: empty identifier or out-of-set value, no request sent
//! - `Transport`: connection failure or timeout
//! - `Api`: 400, 401, 403, 404, 500 (and 405 where recognized) with a message
//! - `Deserialization`: a body that does not match its JSON shape
//! - `UnexpectedStatus`: any other status

pub mod client;
pub mod common;
pub mod members;
pub mod teams;
pub mod tokens;

pub use client::{ClientConfig, PulumiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use common::{ApiError, ValidationError};
pub use members::{Member, Role, User};
pub use teams::{MemberAction, Team, TeamKind, TeamMember};
pub use tokens::AccessToken;
