//
//  pulumi-org
//  cli/team.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Team commands
//!
//! Teams group organization members. Pulumi teams are managed here; GitHub
//! teams mirror a GitHub team and their membership is synced from GitHub.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::{Team, TeamKind, TeamMember};
use crate::config::Config;
use crate::output::{
    format_role, md_header, md_properties, md_table, or_dash, print_field, print_header, truncate,
    OutputWriter, TableBuilder, TableOutput, TableRow,
};

use super::GlobalOptions;

/// Manage teams
#[derive(Args, Debug)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub command: TeamSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TeamSubcommand {
    /// List teams in the organization
    #[command(visible_alias = "ls")]
    List,

    /// View a team and its members
    View(ViewArgs),

    /// Create a team
    Create(CreateArgs),

    /// Change a team's display name or description
    Edit(EditArgs),

    /// Delete a team
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Add a user to a team
    AddMember(MembershipArgs),

    /// Remove a user from a team
    RemoveMember(MembershipArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Team name
    pub team: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Team name
    pub team: String,

    /// Team type (github, pulumi)
    #[arg(long, short = 'k')]
    pub kind: TeamKind,

    /// Display name (defaults to the team name)
    #[arg(long)]
    pub display_name: Option<String>,

    /// Team description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Team name
    pub team: String,

    /// New display name
    #[arg(long)]
    pub display_name: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Team name
    pub team: String,
}

#[derive(Args, Debug)]
pub struct MembershipArgs {
    /// Team name
    pub team: String,

    /// Pulumi user name
    pub user: String,
}

impl TableRow for Team {
    const HEADERS: &'static [&'static str] =
        &["Name", "Display Name", "Type", "Members", "Description"];

    fn row(&self, color: bool) -> Vec<String> {
        let name = if color {
            style(&self.name).cyan().bold().to_string()
        } else {
            self.name.clone()
        };
        vec![
            name,
            or_dash(&self.display_name).to_string(),
            self.kind.map_or("-", |k| k.as_str()).to_string(),
            self.members.len().to_string(),
            truncate(or_dash(&self.description), 40),
        ]
    }
}

impl TableRow for TeamMember {
    const HEADERS: &'static [&'static str] = &["Login", "Name", "Role"];

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.github_login.clone(),
            or_dash(&self.name).to_string(),
            format_role(or_dash(&self.role), color),
        ]
    }
}

fn team_title(team: &Team) -> &str {
    if team.display_name.is_empty() {
        &team.name
    } else {
        &team.display_name
    }
}

impl TableOutput for Team {
    fn print_table(&self, color: bool) {
        print_header(team_title(self), color);
        print_field("Name", &self.name, color);
        print_field("Type", self.kind.map_or("-", |k| k.as_str()), color);
        print_field("Description", or_dash(&self.description), color);
        println!();

        if self.members.is_empty() {
            println!("No members");
            return;
        }
        TableBuilder::new()
            .color(color)
            .headers(TeamMember::HEADERS.iter().copied())
            .rows(self.members.iter().map(|m| m.row(color)))
            .print();
    }

    fn print_markdown(&self) {
        println!("{}", md_header(1, team_title(self)));
        println!();
        print!(
            "{}",
            md_properties(&[
                ("Name", self.name.as_str()),
                ("Type", self.kind.map_or("-", |k| k.as_str())),
                ("Description", or_dash(&self.description)),
            ])
        );
        println!();
        println!("{}", md_header(2, "Members"));
        println!();
        let rows: Vec<Vec<String>> = self.members.iter().map(|m| m.row(false)).collect();
        print!("{}", md_table(TeamMember::HEADERS, &rows));
    }
}

impl TeamCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TeamSubcommand::List => self.list(global).await,
            TeamSubcommand::View(args) => self.view(args, global).await,
            TeamSubcommand::Create(args) => self.create(args, global).await,
            TeamSubcommand::Edit(args) => self.edit(args, global).await,
            TeamSubcommand::Delete(args) => self.delete(args, global).await,
            TeamSubcommand::AddMember(args) => self.add_member(args, global).await,
            TeamSubcommand::RemoveMember(args) => self.remove_member(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        let teams = client.list_teams(&org).await?;

        OutputWriter::new(global.output_format())
            .write_list(&teams, &format!("No teams found in {}", org))
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        let team = client.get_team(&org, &args.team).await?;

        OutputWriter::new(global.output_format()).write(&team)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        let display_name = args.display_name.as_deref().unwrap_or(&args.team);
        let team = client
            .create_team(&org, &args.team, args.kind, display_name, &args.description)
            .await?;

        let writer = OutputWriter::new(global.output_format());
        if global.json {
            return writer.write(&team);
        }
        writer.write_success(&format!("Created {} team {} in {}", args.kind, team.name, org));
        Ok(())
    }

    /// Unspecified fields keep their current value, read with `get_team`.
    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        let writer = OutputWriter::new(global.output_format());
        if args.display_name.is_none() && args.description.is_none() {
            writer.write_warning("Nothing to change; pass --display-name or --description");
            return Ok(());
        }

        let (display_name, description) = match (&args.display_name, &args.description) {
            (Some(name), Some(desc)) => (name.clone(), desc.clone()),
            _ => {
                let current = client.get_team(&org, &args.team).await?;
                (
                    args.display_name.clone().unwrap_or(current.display_name),
                    args.description.clone().unwrap_or(current.description),
                )
            }
        };

        let team = client
            .update_team(&org, &args.team, &display_name, &description)
            .await?;

        if global.json {
            return writer.write(&team);
        }
        writer.write_success(&format!("Updated team {}", team.name));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        global.confirm(&format!("Delete team '{}' from {}?", args.team, org))?;
        client.delete_team(&org, &args.team).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Deleted team {}", args.team));
        Ok(())
    }

    async fn add_member(&self, args: &MembershipArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        client.add_member_to_team(&org, &args.team, &args.user).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Added {} to team {}", args.user, args.team));
        Ok(())
    }

    async fn remove_member(&self, args: &MembershipArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let org = global.organization(&config)?;
        let client = global.client(&config)?;

        global.confirm(&format!("Remove {} from team '{}'?", args.user, args.team))?;
        client.delete_member_from_team(&org, &args.team, &args.user).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Removed {} from team {}", args.user, args.team));
        Ok(())
    }
}
