//
//  pulumi-org
//  api/common/validation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Argument validation performed before a request is built.
//!
//! Identifiers (organization, team, user and token id) are interpolated into
//! the request path, so an empty one would address a different resource.
//! Closed-set arguments are Rust enums; parsing one from a string is the only
//! place an out-of-set value can appear, and it fails with
//! [`ValidationError::InvalidChoice`].

use thiserror::Error;

/// An argument was rejected before any network call was made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identifier was the empty string.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the rejected argument.
        field: &'static str,
    },

    /// A value was not one of the allowed choices.
    #[error("invalid {field} '{value}': expected one of {}", .allowed.join(", "))]
    InvalidChoice {
        /// Name of the rejected argument.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Every accepted spelling.
        allowed: &'static [&'static str],
    },
}

/// Fails with [`ValidationError::Empty`] when `value` is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
