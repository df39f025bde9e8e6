//
//  pulumi-org
//  api/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Team types and operations.
//!
//! Teams live inside an organization and are addressed by `(org name, team
//! name)`. A team's kind is fixed when it is created; afterwards only its
//! display name and description can change. Team membership is a separate
//! relation changed through PATCH requests that return no body, so a [`Team`]
//! fetched earlier does not reflect later membership changes.
//!
//! # Team Lifecycle
//!
//! ```text
//! create_team ──► get_team / list_teams
//!      │              │
//!      │              ├── update_team (display name, description)
//!      │              ├── add_member_to_team / delete_member_from_team
//!      │              │
//!      └──────────────┴──► delete_team
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, PulumiClient};
use super::common::{require_non_empty, ApiError, Expect, ValidationError};

/// Where a team's membership is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    /// Backed by a GitHub team.
    Github,
    /// Managed directly in Pulumi.
    Pulumi,
}

impl TeamKind {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["github", "pulumi"];

    /// The wire spelling, also the last path segment of `create_team`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Pulumi => "pulumi",
        }
    }
}

impl fmt::Display for TeamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "pulumi" => Ok(Self::Pulumi),
            _ => Err(ValidationError::InvalidChoice {
                field: "team type",
                value: s.to_string(),
                allowed: Self::VARIANTS,
            }),
        }
    }
}

/// Change applied to a team's membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberAction {
    /// Add the user to the team.
    Add,
    /// Remove the user from the team.
    Remove,
}

impl MemberAction {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["add", "remove"];

    /// The wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for MemberAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(ValidationError::InvalidChoice {
                field: "member action",
                value: s.to_string(),
                allowed: Self::VARIANTS,
            }),
        }
    }
}

/// A member as listed inside a [`Team`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub github_login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub role: String,
}

/// A team within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team kind. `None` only on values returned by
    /// [`PulumiClient::update_team`], which are not read back from the server.
    #[serde(default)]
    pub kind: Option<TeamKind>,

    /// Immutable identifier, unique within the organization.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    /// Members in server order.
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Deserialize)]
struct TeamList {
    #[serde(default)]
    teams: Vec<Team>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTeamRequest<'a> {
    organization: &'a str,
    team_type: TeamKind,
    name: &'a str,
    display_name: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTeamRequest<'a> {
    new_display_name: &'a str,
    new_description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMembershipRequest<'a> {
    member_action: MemberAction,
    member: &'a str,
}

impl PulumiClient {
    /// Lists the teams of an organization.
    ///
    /// `GET orgs/{org}/teams`.
    pub async fn list_teams(&self, org_name: &str) -> Result<Vec<Team>, ApiError> {
        require_non_empty("organization name", org_name)?;

        let request = ApiRequest::new(
            Method::GET,
            vec!["orgs", org_name, "teams"],
            Expect::success(&[200]),
        );

        let list: TeamList = self.execute(request).await?.json()?;
        Ok(list.teams)
    }

    /// Fetches a single team, members included.
    ///
    /// `GET orgs/{org}/teams/{team}`.
    pub async fn get_team(&self, org_name: &str, team_name: &str) -> Result<Team, ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("team name", team_name)?;

        let request = ApiRequest::new(
            Method::GET,
            vec!["orgs", org_name, "teams", team_name],
            Expect::success(&[200]),
        );

        self.execute(request).await?.json()
    }

    /// Creates a team and returns it as stored by the server.
    ///
    /// `POST orgs/{org}/teams/{kind}`. The path is keyed by team kind, not
    /// team name; the name travels in the body.
    pub async fn create_team(
        &self,
        org_name: &str,
        team_name: &str,
        kind: TeamKind,
        display_name: &str,
        description: &str,
    ) -> Result<Team, ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("team name", team_name)?;

        let request = ApiRequest::new(
            Method::POST,
            vec!["orgs", org_name, "teams", kind.as_str()],
            Expect::success(&[200, 201]),
        )
        .json(&CreateTeamRequest {
            organization: org_name,
            team_type: kind,
            name: team_name,
            display_name,
            description,
        })?;

        self.execute(request).await?.json()
    }

    /// Changes a team's display name and description.
    ///
    /// `PATCH orgs/{org}/teams/{team}`, success is 204 with no body. The
    /// returned [`Team`] is assembled from the arguments: only `name`,
    /// `display_name` and `description` are meaningful, `kind` is `None` and
    /// `members` is empty. Call [`PulumiClient::get_team`] for the stored
    /// state.
    pub async fn update_team(
        &self,
        org_name: &str,
        team_name: &str,
        display_name: &str,
        description: &str,
    ) -> Result<Team, ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("team name", team_name)?;

        let request = ApiRequest::new(
            Method::PATCH,
            vec!["orgs", org_name, "teams", team_name],
            Expect::success(&[204]).method_not_allowed(),
        )
        .json(&UpdateTeamRequest {
            new_display_name: display_name,
            new_description: description,
        })?;

        self.execute(request).await?;

        Ok(Team {
            kind: None,
            name: team_name.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            members: Vec::new(),
        })
    }

    /// Deletes a team.
    ///
    /// `DELETE orgs/{org}/teams/{team}`, success is 204.
    pub async fn delete_team(&self, org_name: &str, team_name: &str) -> Result<(), ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("team name", team_name)?;

        let request = ApiRequest::new(
            Method::DELETE,
            vec!["orgs", org_name, "teams", team_name],
            Expect::success(&[204]).method_not_allowed(),
        );

        self.execute(request).await?;
        Ok(())
    }

    /// Adds an organization member to a team.
    pub async fn add_member_to_team(
        &self,
        org_name: &str,
        team_name: &str,
        user_name: &str,
    ) -> Result<(), ApiError> {
        self.update_team_membership(org_name, team_name, user_name, MemberAction::Add)
            .await
    }

    /// Removes a member from a team.
    pub async fn delete_member_from_team(
        &self,
        org_name: &str,
        team_name: &str,
        user_name: &str,
    ) -> Result<(), ApiError> {
        self.update_team_membership(org_name, team_name, user_name, MemberAction::Remove)
            .await
    }

    // PATCH orgs/{org}/teams/{team} with {memberAction, member}; 200 or 204, no body.
    async fn update_team_membership(
        &self,
        org_name: &str,
        team_name: &str,
        user_name: &str,
        action: MemberAction,
    ) -> Result<(), ApiError> {
        require_non_empty("organization name", org_name)?;
        require_non_empty("team name", team_name)?;
        require_non_empty("user name", user_name)?;

        let request = ApiRequest::new(
            Method::PATCH,
            vec!["orgs", org_name, "teams", team_name],
            Expect::success(&[200, 204]).method_not_allowed(),
        )
        .json(&UpdateMembershipRequest {
            member_action: action,
            member: user_name,
        })?;

        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_kind_parse() {
        assert_eq!("github".parse::<TeamKind>().unwrap(), TeamKind::Github);
        assert_eq!("pulumi".parse::<TeamKind>().unwrap(), TeamKind::Pulumi);

        let err = "gitlab".parse::<TeamKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid team type 'gitlab': expected one of github, pulumi"
        );
    }

    #[test]
    fn test_member_action_parse() {
        assert_eq!("add".parse::<MemberAction>().unwrap(), MemberAction::Add);
        assert_eq!("remove".parse::<MemberAction>().unwrap(), MemberAction::Remove);
        assert!("delete".parse::<MemberAction>().is_err());
    }

    #[test]
    fn test_team_decodes_kind_and_members() {
        let json = r#"{
            "kind": "pulumi",
            "name": "platform",
            "displayName": "Platform",
            "description": "Infra owners",
            "members": [
                {"name": "Mona", "githubLogin": "octocat", "avatarUrl": "", "role": "admin"},
                {"name": "Hubot", "githubLogin": "hubot", "avatarUrl": "", "role": "member"}
            ]
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.kind, Some(TeamKind::Pulumi));
        assert_eq!(team.display_name, "Platform");
        let logins: Vec<&str> = team.members.iter().map(|m| m.github_login.as_str()).collect();
        assert_eq!(logins, ["octocat", "hubot"]);
    }

    #[test]
    fn test_create_team_body() {
        let body = serde_json::to_value(CreateTeamRequest {
            organization: "acme",
            team_type: TeamKind::Github,
            name: "platform",
            display_name: "Platform",
            description: "Infra owners",
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "organization": "acme",
                "teamType": "github",
                "name": "platform",
                "displayName": "Platform",
                "description": "Infra owners"
            })
        );
    }

    #[test]
    fn test_update_bodies() {
        let body = serde_json::to_value(UpdateTeamRequest {
            new_display_name: "Platform",
            new_description: "",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"newDisplayName": "Platform", "newDescription": ""})
        );

        let body = serde_json::to_value(UpdateMembershipRequest {
            member_action: MemberAction::Remove,
            member: "octocat",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"memberAction": "remove", "member": "octocat"})
        );
    }
}
