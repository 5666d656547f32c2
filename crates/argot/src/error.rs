use thiserror::Error;

use crate::convert::TypeTag;

/// A single problem found while binding one declared parameter.
///
/// The binder keeps scanning after the first failure so a caller sees every
/// missing or unconvertible parameter at once, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindIssue {
    #[error("missing parameter --{0}")]
    Missing(String),

    #[error("invalid value {raw:?} for --{name}: expected {expected}")]
    Invalid {
        name: String,
        raw: String,
        expected: TypeTag,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgotError {
    /// No registered command matches the requested name. Also covers the
    /// empty command from an empty argument vector.
    #[error("command not found: {0:?}")]
    CommandNotFound(String),

    /// One or more parameters of a matched command failed to bind.
    #[error("binding failed for `{command}`: {}", summarize(.issues))]
    BindingFailed {
        command: String,
        issues: Vec<BindIssue>,
    },
}

impl ArgotError {
    /// Map error to a process exit code.
    ///
    /// Both failure kinds deliberately converge on `1`: the process contract
    /// does not distinguish an unknown command from bad arguments. Callers
    /// that want the distinction should branch on the variants instead.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CommandNotFound(_) | Self::BindingFailed { .. } => 1,
        }
    }
}

fn summarize(issues: &[BindIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ArgotError>;
