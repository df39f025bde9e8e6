//
//  pulumi-org
//  api/tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Personal access token operations.
//!
//! A token's secret value is only returned once, by
//! [`PulumiClient::create_access_token`]. The id is the handle used to delete
//! it later.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, PulumiClient};
use super::common::{require_non_empty, ApiError, Expect};

/// A newly created access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Identifier used to delete the token.
    pub id: String,

    /// The secret itself. Not retrievable after creation.
    #[serde(rename = "tokenValue")]
    pub value: String,
}

#[derive(Debug, Serialize)]
struct CreateAccessTokenRequest<'a> {
    description: &'a str,
}

impl PulumiClient {
    /// Creates an access token for the authenticated user.
    ///
    /// `POST user/tokens`, success is 200 or 201.
    pub async fn create_access_token(&self, description: &str) -> Result<AccessToken, ApiError> {
        let request = ApiRequest::new(
            Method::POST,
            vec!["user", "tokens"],
            Expect::success(&[200, 201]),
        )
        .json(&CreateAccessTokenRequest { description })?;

        self.execute(request).await?.json()
    }

    /// Deletes the access token with the given id.
    ///
    /// `DELETE user/tokens/{id}`, success is 204.
    pub async fn delete_access_token(&self, token_id: &str) -> Result<(), ApiError> {
        require_non_empty("token id", token_id)?;

        let request = ApiRequest::new(
            Method::DELETE,
            vec!["user", "tokens", token_id],
            Expect::success(&[204]).method_not_allowed(),
        );

        self.execute(request).await?;
        Ok(())
    }
}
