//
//  pulumi-org
//  cli/member.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization member commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::{Member, Role};
use crate::config::Config;
use crate::output::{format_bool, format_role, or_dash, OutputWriter, TableRow};

use super::GlobalOptions;

/// Manage organization members
#[derive(Args, Debug)]
pub struct MemberCommand {
    #[command(subcommand)]
    pub command: MemberSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MemberSubcommand {
    /// List organization members
    #[command(visible_alias = "ls")]
    List,

    /// Add a user to the organization
    Add(AddArgs),

    /// Remove a user from the organization
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Pulumi user name
    pub user: String,

    /// Role in the organization (admin, member)
    #[arg(long, short = 'r', default_value = "member")]
    pub role: Role,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Pulumi user name
    pub user: String,
}

impl TableRow for Member {
    const HEADERS: &'static [&'static str] = &["Login", "Name", "Email", "Role", "Virtual Admin"];

    fn row(&self, color: bool) -> Vec<String> {
        let login = if color {
            style(&self.user.github_login).bold().to_string()
        } else {
            self.user.github_login.clone()
        };
        vec![
            login,
            or_dash(&self.user.name).to_string(),
            or_dash(&self.user.email).to_string(),
            format_role(self.role.as_str(), color),
            format_bool(self.virtual_admin, color),
        ]
    }
}

impl MemberCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            MemberSubcommand::List => self.list(global).await,
            MemberSubcommand::Add(args) => self.add(args, global).await,
            MemberSubcommand::Remove(args) => self.remove(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        let members = client.list_org_members(&org).await?;

        OutputWriter::new(global.output_format())
            .write_list(&members, &format!("No members found in {}", org))
    }

    async fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        client.add_member_to_org(&args.user, &org, args.role).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Added {} to {} as {}", args.user, org, args.role));
        Ok(())
    }

    async fn remove(&self, args: &RemoveArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        global.confirm(&format!("Remove {} from {}?", args.user, org))?;
        client.delete_member_from_org(&org, &args.user).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Removed {} from {}", args.user, org));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;

    #[test]
    fn test_member_row_plain() {
        let member = Member {
            role: Role::Admin,
            user: User {
                name: String::new(),
                github_login: "octocat".to_string(),
                avatar_url: String::new(),
                email: "octo@example.com".to_string(),
            },
            known_to_pulumi: true,
            virtual_admin: false,
        };
        assert_eq!(
            member.row(false),
            vec!["octocat", "-", "octo@example.com", "admin", "No"]
        );
        assert_eq!(Member::HEADERS.len(), member.row(false).len());
    }
}
