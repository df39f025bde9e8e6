//
//  pulumi-org
//  output/markdown.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Markdown Output Formatting
//!
//! Helpers for `--markdown` output. The output is plain CommonMark, suitable
//! for pasting into issues and documentation.

/// Formats a header of the given level, e.g. `## Members`.
pub fn md_header(level: u8, text: &str) -> String {
    let level = level.clamp(1, 6) as usize;
    format!("{} {}", "#".repeat(level), text)
}

/// Escapes pipe characters so a value stays inside its table cell.
pub fn md_escape(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Creates a markdown table.
///
/// ```rust,ignore
/// use pulumi_org::output::md_table;
///
/// let table = md_table(&["Login", "Role"], &[vec!["octocat".into(), "admin".into()]]);
/// // | Login | Role |
/// // | --- | --- |
/// // | octocat | admin |
/// ```
pub fn md_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut result = String::new();

    result.push_str("| ");
    result.push_str(&headers.join(" | "));
    result.push_str(" |\n");

    result.push_str("| ");
    result.push_str(&headers.iter().map(|_| "---").collect::<Vec<_>>().join(" | "));
    result.push_str(" |\n");

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| md_escape(c.as_ref())).collect();
        result.push_str("| ");
        result.push_str(&cells.join(" | "));
        result.push_str(" |\n");
    }

    result
}

/// Creates a two-column `Property | Value` table for a detail view.
pub fn md_properties(fields: &[(&str, &str)]) -> String {
    let rows: Vec<Vec<&str>> = fields.iter().map(|(key, value)| vec![*key, *value]).collect();
    md_table(&["Property", "Value"], &rows)
}
