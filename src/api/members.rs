//
//  pulumi-org
//  api/members.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization membership types and operations.
//!
//! Membership is a relation between an organization and a user, addressed by
//! the pair `(org name, user name)`. It is created with
//! [`PulumiClient::add_member_to_org`], enumerated with
//! [`PulumiClient::list_org_members`] and removed with
//! [`PulumiClient::delete_member_from_org`].
//!
//! # Example
//!
//! ```rust,no_run
//! use pulumi_org::api::{PulumiClient, Role};
//!
//! # async fn example() -> Result<(), pulumi_org::api::ApiError> {
//! let client = PulumiClient::new("pul-0123456789abcdef")?;
//! client.add_member_to_org("octocat", "acme", Role::Member).await?;
//!
//! for member in client.list_org_members("acme").await? {
//!     println!("{} ({})", member.user.github_login, member.role);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, PulumiClient};
use super::common::{require_non_empty, ApiError, Expect, ValidationError};

/// Role of a user within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative rights over the organization.
    Admin,
    /// Regular member.
    Member,
}

impl Role {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["admin", "member"];

    /// The wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(ValidationError::InvalidChoice {
                field: "role",
                value: s.to_string(),
                allowed: Self::VARIANTS,
            }),
        }
    }
}

/// Profile of the user behind a membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub github_login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub email: String,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The member's role.
    pub role: Role,

    /// The member's profile.
    pub user: User,

    /// Whether the user has signed in to Pulumi at least once.
    #[serde(default)]
    pub known_to_pulumi: bool,

    /// Whether admin rights are inherited rather than granted directly.
    #[serde(default)]
    pub virtual_admin: bool,
}

#[derive(Debug, Deserialize)]
struct MemberList {
    #[serde(default)]
    members: Vec<Member>,
}

#[derive(Debug, Serialize)]
struct AddMemberRequest {
    role: Role,
}

impl PulumiClient {
    /// Adds `user_name` to `org_name` with the given role.
    ///
    /// `POST orgs/{org}/members/{user}`. Success is 200 or 204; any response
    /// body is discarded.
    pub async fn add_member_to_org(
        &self,
        user_name: &str,
        org_name: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        require_non_empty("user name", user_name)?;
        require_non_empty("organization name", org_name)?;

        let request = ApiRequest::new(
            Method::POST,
            vec!["orgs", org_name, "members", user_name],
            Expect::success(&[200, 204]),
        )
        .json(&AddMemberRequest { role })?;

        self.execute(request).await?;
        Ok(())
    }

    /// Lists the members of an organization in server order.
    ///
    /// `GET orgs/{org}/members?type=backend`.
    pub async fn list_org_members(&self, org_name: &str) -> Result<Vec<Member>, ApiError> {
        require_non_empty("organization name", org_name)?;

        let request = ApiRequest::new(
            Method::GET,
            vec!["orgs", org_name, "members"],
            Expect::success(&[200]),
        )
        .query("type", "backend");

        let list: MemberList = self.execute(request).await?.json()?;
        Ok(list.members)
    }

    /// Removes `user_name` from `org_name`.
    ///
    /// `DELETE orgs/{org}/members/{user}`, success is 204.
    pub async fn delete_member_from_org(
        &self,
        org_name: &str,
        user_name: &str,
    ) -> Result<(), ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("user name", user_name)?;

        let request = ApiRequest::new(
            Method::DELETE,
            vec!["orgs", org_name, "members", user_name],
            Expect::success(&[204]).method_not_allowed(),
        );

        self.execute(request).await?;
        Ok(())
    }
}
