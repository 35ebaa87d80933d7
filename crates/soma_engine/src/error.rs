use thiserror::Error;

use crate::ephemeris::OracleError;
use crate::time::TimeError;

/// Failures surfaced by the position pipeline.
///
/// Nothing is recovered locally: no default sign, no retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] TimeError),
    #[error("Invalid location: {message}")]
    InvalidLocation { message: String },
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] OracleError),
}

impl AnalysisError {
    /// Stable error kind reported to clients
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidDate(_) => "InvalidDateError",
            AnalysisError::InvalidLocation { .. } => "InvalidLocationError",
            AnalysisError::EphemerisUnavailable(_) => "EphemerisUnavailableError",
        }
    }
}
