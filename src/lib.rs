//
//  pulumi-org
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Pulumi Organization Library
//!
//! A typed client for the Pulumi organization-management REST API, plus the
//! `porg` command-line tool built on it.
//!
//! ## Overview
//!
//! The library covers four resource groups of the Pulumi Service API:
//!
//! - **Access tokens**: create and revoke personal access tokens
//! - **Organization members**: list, add and remove members with a role
//! - **Teams**: list, view, create, edit and delete teams
//! - **Team membership**: add users to and remove users from a team
//!
//! Every operation is a single authenticated HTTPS request. Responses are
//! decoded into typed records and failures are classified into
//! [`api::ApiError`].
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and the typed resource operations
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON, Markdown)
//! - [`interactive`]: Confirmation prompts
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pulumi_org::api::{PulumiClient, Role};
//!
//! # async fn example() -> Result<(), pulumi_org::api::ApiError> {
//! let client = PulumiClient::new("pul-0123456789abcdef")?;
//!
//! client.add_member_to_org("octocat", "acme", Role::Member).await?;
//! for member in client.list_org_members("acme").await? {
//!     println!("{} ({})", member.user.github_login, member.role);
//! }
//! # Ok(())
//! # }
//! ```

/// API client for the Pulumi Service.
///
/// Holds the transport client, the shared error classification, and one
/// module per resource group.
pub mod api;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/porg/config.toml`
/// - macOS: `~/Library/Application Support/porg/config.toml`
/// - Windows: `%APPDATA%\porg\config.toml`
pub mod config;

/// Output formatting for different modes.
///
/// Provides formatters for:
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
/// - Markdown format: Documentation-friendly output
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Re-export of the API client.
///
/// # Example
///
/// ```rust,no_run
/// use pulumi_org::PulumiClient;
///
/// let client = PulumiClient::with_host("pul-0123456789abcdef", "pulumi.example.com")
///     .expect("valid host");
/// assert_eq!(client.base_url().as_str(), "https://pulumi.example.com/api/");
/// ```
pub use api::PulumiClient;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use pulumi_org::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// # Example
///
/// ```rust,no_run
/// use pulumi_org::Config;
///
/// let config = Config::load().expect("Failed to load config");
/// if let Some(org) = config.get("default_org") {
///     println!("Default organization: {}", org);
/// }
/// ```
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used in the user agent and configuration paths.
///
/// # Value
///
/// `"porg"`
pub const APP_NAME: &str = "porg";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use pulumi_org::VERSION;
///
/// println!("porg version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
///
/// # Example
///
/// ```rust,no_run
/// use pulumi_org::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    ///
    /// # Value
    ///
    /// `0`
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    ///
    /// # Value
    ///
    /// `1`
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// The command was invoked with invalid arguments, or an argument failed
    /// validation before any request was sent.
    ///
    /// # Value
    ///
    /// `2`
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// The API answered 401 or 403. Check `--token` or `PULUMI_ACCESS_TOKEN`.
    ///
    /// # Value
    ///
    /// `4`
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The organization, team, member or token does not exist, or the token
    /// cannot see it.
    ///
    /// # Value
    ///
    /// `8`
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by user.
    ///
    /// The user declined a confirmation prompt.
    ///
    /// # Value
    ///
    /// `16`
    pub const CANCELLED: i32 = 16;
}
