//! # Error Taxonomy
//!
//! Every failure the core can report is a tagged variant here. Callers decide
//! how to phrase them for a user; nothing in the core panics across its boundary.

use thiserror::Error;

use crate::inventory::source::SourceName;

/// A single raw token could not be turned into a host identifier.
///
/// Non-fatal: the parser skips the row and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationFailure {
    #[error("host identifier is empty after trimming")]
    Empty,
}

/// The reconciler was called outside of its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("a comparison needs 2 or 3 sources, got {0}")]
    InvalidComparisonArity(usize),

    #[error("source {0} was supplied more than once")]
    DuplicateSource(SourceName),
}

/// Failure of a whole comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("select required files: no input for {}", join_sources(.missing))]
    InputMissing { missing: Vec<SourceName> },

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("IP address is required")]
    IpRequired,
    #[error("invalid IP address format: {0}")]
    InvalidIp(String),
    #[error("username too long (max 256 characters)")]
    UsernameTooLong,
    #[error("username contains invalid characters")]
    UsernameInvalid,
    #[error("password too long (max {0} characters)")]
    PasswordTooLong(usize),
    #[error("project name is required")]
    ProjectNameRequired,
    #[error("project name too long (max 100 characters)")]
    ProjectNameTooLong,
    #[error("project name contains invalid characters")]
    ProjectNameInvalid,
    #[error("OS type must be 'Windows' or 'Linux', got '{0}'")]
    InvalidOsType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("server with IP {0} already exists")]
    DuplicateIp(String),

    #[error("server {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn join_sources(sources: &[SourceName]) -> String {
    sources
        .iter()
        .map(|source| source.label())
        .collect::<Vec<&str>>()
        .join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
