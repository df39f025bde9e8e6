//
//  pulumi-org
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod member;
mod team;
mod token;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use member::MemberCommand;
pub use team::TeamCommand;
pub use token::TokenCommand;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::api::PulumiClient;
use crate::config::Config;
use crate::interactive::prompt_confirm;
use crate::output::OutputFormat;

/// Pulumi organization CLI - Manage Pulumi organizations from the command line
#[derive(Parser, Debug)]
#[command(
    name = "porg",
    version,
    about = "Manage Pulumi organizations from the command line",
    long_about = "porg is a CLI for the Pulumi Service organization API.\n\n\
                  It manages access tokens, organization members and teams.",
    propagate_version = true,
    after_help = "Use 'porg <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Pulumi access token
    #[arg(long, global = true, env = "PULUMI_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization for the operation
    #[arg(long, short = 'o', global = true, env = "PULUMI_ORG")]
    pub org: Option<String>,

    /// Pulumi API host (defaults to api.pulumi.com)
    #[arg(long, global = true, env = "PULUMI_API_HOST")]
    pub host: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true, conflicts_with = "markdown")]
    pub json: bool,

    /// Output format as Markdown
    #[arg(long, global = true)]
    pub markdown: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

impl GlobalOptions {
    /// Output format selected by `--json` / `--markdown`
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Table
        }
    }

    /// Build an API client from the token and the configured host
    pub fn client(&self, config: &Config) -> Result<PulumiClient> {
        let Some(token) = self.token.as_deref() else {
            bail!("No access token. Pass --token or set PULUMI_ACCESS_TOKEN");
        };
        let client_config = config.client_config(self.host.as_deref());
        PulumiClient::from_config(token, client_config).context("Failed to create API client")
    }

    /// Organization from `--org`, falling back to `core.default_org`
    pub fn organization(&self, config: &Config) -> Result<String> {
        self.org
            .clone()
            .or_else(|| config.core.default_org.clone())
            .context(
                "No organization. Pass --org, set PULUMI_ORG, \
                 or run 'porg config set default_org <ORG>'",
            )
    }

    /// Ask before a destructive action unless `--yes` was given
    pub fn confirm(&self, message: &str) -> Result<()> {
        if self.yes || prompt_confirm(message)? {
            Ok(())
        } else {
            Err(Cancelled.into())
        }
    }
}

/// The user declined a confirmation prompt
#[derive(Debug, Error)]
#[error("Operation cancelled")]
pub struct Cancelled;

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage personal access tokens
    Token(TokenCommand),

    /// Manage organization members
    #[command(visible_alias = "members")]
    Member(MemberCommand),

    /// Manage teams
    #[command(visible_alias = "teams")]
    Team(TeamCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
