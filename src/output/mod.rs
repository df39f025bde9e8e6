//
//  pulumi-org
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for `porg`, supporting three formats:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON output for scripting and automation
//! - **Markdown format**: Markdown tables and sections for documentation
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`markdown`]: Markdown helpers
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for single records rendered as a detail view
//! - [`TableRow`]: Trait for records rendered as one row of a list
//!
//! ## Example
//!
//! ```rust,ignore
//! use pulumi_org::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&members, "No members found")?;
//! writer.write_success("Added octocat to acme");
//! ```

mod markdown;
mod table;

pub use markdown::*;
pub use table::*;

use console::style;
use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
}

/// Writes values and status messages in the selected format.
///
/// Colors follow `console::colors_enabled()`, off when stdout is not a
/// terminal.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a single record.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => value.print_table(self.color),
            OutputFormat::Markdown => value.print_markdown(),
        }
        Ok(())
    }

    /// Writes a list of records as one table.
    ///
    /// JSON output of an empty list is `[]`; the other formats print `empty`.
    pub fn write_list<T: Serialize + TableRow>(
        &self,
        values: &[T],
        empty: &str,
    ) -> anyhow::Result<()> {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(values)?);
            return Ok(());
        }

        if values.is_empty() {
            self.write_info(empty);
            return Ok(());
        }

        match self.format {
            OutputFormat::Markdown => {
                let rows: Vec<Vec<String>> = values.iter().map(|v| v.row(false)).collect();
                print!("{}", md_table(T::HEADERS, &rows));
            }
            _ => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::HEADERS.iter().copied())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    /// Writes a success message. With `--json` a `{"success": true, "message": ...}`
    /// object is printed instead.
    pub fn write_success(&self, msg: &str) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "success": true, "message": msg }));
            }
            _ if self.color => println!("{} {}", style("✓").green().bold(), msg),
            _ => println!("✓ {}", msg),
        }
    }

    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }
}

/// A record with a detail view.
pub trait TableOutput {
    fn print_table(&self, color: bool);

    fn print_markdown(&self);
}

/// A record shown as one row of a list.
pub trait TableRow {
    /// Column headers, in the same order as [`TableRow::row`].
    const HEADERS: &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

/// Prints a bold header underlined with dashes.
pub fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line, dimming the key when colored.
pub fn print_field(key: &str, value: &str, color: bool) {
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
