//
//  pulumi-org
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Confirmation Prompts
//!
//! Destructive commands (`token delete`, `member remove`, `team delete`,
//! `team remove-member`) ask before sending the request. Outside a terminal
//! there is nobody to ask, so the prompt fails and the caller must pass
//! `--yes`.
//!
//! # Example
//!
//! ```no_run
//! use pulumi_org::interactive::prompt_confirm;
//!
//! if prompt_confirm("Delete team 'platform'?").unwrap() {
//!     println!("Deleting...");
//! }
//! ```

use anyhow::{bail, Result};
use dialoguer::Confirm;

/// Asks a yes/no question, defaulting to no.
///
/// # Errors
///
/// Fails when stdin or stderr is not a terminal, or if reading input fails.
pub fn prompt_confirm(message: &str) -> Result<bool> {
    if !console::user_attended_stderr() {
        bail!("Confirmation required but the terminal is not interactive; pass --yes");
    }
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
