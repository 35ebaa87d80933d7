
pub mod classifier;
pub mod ephemeris;
pub mod error;
pub mod time;
pub mod types;
pub mod zodiac;

pub use classifier::PositionClassifier;
pub use ephemeris::{Body, EphemerisOracle, OracleError, RawPosition, SwissEphemerisAdapter};
pub use error::AnalysisError;
pub use time::{JulianDay, TimeError};
pub use types::{BirthData, BodyAnalysis, SunAnalysis, ZodiacClassification};
pub use zodiac::{EnergyProfile, ZodiacSign};
