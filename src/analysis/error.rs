//! Analysis error types

use thiserror::Error;

/// Errors that can occur while analyzing a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No address was supplied, or it was empty
    #[error("Token address is required")]
    MissingAddress,
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
