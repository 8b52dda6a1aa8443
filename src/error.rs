//! # Selection Errors
//!
//! Building a phone and calling a creation step can never fail. The only fallible
//! step is turning an external selection key into a creator or factory. This module
//! defines the error it produces.

use thiserror::Error;

/// Errors raised while selecting a construction strategy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The key is absent or not one of the known keys.
    ///
    /// Raised before any creator or product is constructed. The caller gets no
    /// fallback. A different key needs a new external input.
    #[error(
        "unknown selection {} (expected one of: {})",
        display_key(.key),
        display_expected(.expected)
    )]
    UnknownSelection {
        key: Option<String>,
        expected: &'static [&'static str],
    },
}

impl SelectionError {
    pub(crate) fn unknown(key: Option<&str>, expected: &'static [&'static str]) -> Self {
        SelectionError::UnknownSelection {
            key: key.map(str::to_owned),
            expected,
        }
    }

    /// The rejected key, if one was given at all.
    pub fn key(&self) -> Option<&str> {
        match self {
            SelectionError::UnknownSelection { key, .. } => key.as_deref(),
        }
    }
}

fn display_key(key: &Option<String>) -> String {
    match key {
        Some(key) => format!("{key:?}"),
        None => "<none>".to_string(),
    }
}

fn display_expected(expected: &[&str]) -> String {
    expected.join(", ")
}
