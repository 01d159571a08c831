//! Error types returned by a parse attempt.

use std::fmt;
use thiserror::Error;

/// A single rejected option value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Long name of the offending option, without the leading dashes.
    pub option: String,
    /// Ready-to-print diagnostic, e.g. `--media - possible values: print, screen`.
    pub message: String,
}

impl ValidationError {
    /// Error for `option` (long name, no dashes) with a finished message.
    pub fn new(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            message: message.into(),
        }
    }
}

/// Every validation failure of one parse attempt, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Why [`crate::ConfigAssembler::parse`] produced no configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    /// One or more option values were rejected.
    #[error("{0}")]
    Invalid(ValidationErrors),
    /// The tokens could not be split into options at all (unknown flag,
    /// missing value, surplus positional).
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl ParseError {
    /// The validation failures, if that is what this is.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ParseError::Invalid(errors) => Some(errors),
            ParseError::Usage(_) => None,
        }
    }
}
