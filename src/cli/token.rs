//
//  pulumi-org
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Personal access token commands
//!
//! Tokens created here belong to the user who owns the token passed with
//! `--token`. The secret value is shown once, at creation.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::AccessToken;
use crate::config::Config;
use crate::output::{md_properties, print_field, OutputWriter, TableOutput};

use super::GlobalOptions;

/// Manage personal access tokens
#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Create a new access token
    Create(CreateArgs),

    /// Delete an access token
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Description shown in the Pulumi console
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Token ID
    pub id: String,
}

impl TableOutput for AccessToken {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("Token", &self.value, color);
        println!();
        let note = "Copy the token now. It will not be shown again.";
        if color {
            println!("{}", style(note).yellow());
        } else {
            println!("{}", note);
        }
    }

    fn print_markdown(&self) {
        print!(
            "{}",
            md_properties(&[("ID", self.id.as_str()), ("Token", self.value.as_str())])
        );
    }
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TokenSubcommand::Create(args) => self.create(args, global).await,
            TokenSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        let token = client.create_access_token(&args.description).await?;

        OutputWriter::new(global.output_format()).write(&token)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        global.confirm(&format!("Delete access token '{}'?", args.id))?;
        client.delete_access_token(&args.id).await?;

        OutputWriter::new(global.output_format())
            .write_success(&format!("Deleted access token {}", args.id));
        Ok(())
    }
}
