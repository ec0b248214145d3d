//! People-domain error model.

use thiserror::Error;

/// Result type for people-domain parsing.
pub type PeopleResult<T> = Result<T, PeopleError>;

/// Deterministic people-domain failures.
///
/// Event construction never fails; the fallible surface is limited to
/// parsing profile enums from their wire strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeopleError {
    /// An employment status string outside the contract vocabulary.
    #[error("unknown employment status: {0}")]
    UnknownEmploymentStatus(String),

    /// An employment type string outside the contract vocabulary.
    #[error("unknown employment type: {0}")]
    UnknownEmploymentType(String),
}
