use thiserror::Error;

use crate::ephemeris::types::RawPosition;
use crate::time::JulianDay;

/// Errors that can occur while querying an ephemeris
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Ephemeris path not found: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Unknown body: {name}. Valid bodies: {valid:?}")]
    UnknownBody { name: String, valid: Vec<String> },
    #[error("Failed to calculate position for body {body_id} at {jd}: {message}")]
    CalculationFailed {
        body_id: i32,
        jd: JulianDay,
        message: String,
    },
    #[error("Ephemeris returned a non-finite longitude for body {body_id} at {jd}")]
    NonFiniteLongitude { body_id: i32, jd: JulianDay },
}

/// Source of raw body positions.
///
/// Implementations must report every failure through `Err`; callers never
/// inspect the numbers of a failed query.
pub trait EphemerisOracle: Send + Sync {
    fn position(&self, jd: JulianDay, body_id: i32) -> Result<RawPosition, OracleError>;
}
