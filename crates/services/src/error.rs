//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted when assembling a practice run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("no cards available for practice")]
    Empty,
}
