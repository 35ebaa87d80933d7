use std::sync::Arc;

use crate::ephemeris::{Body, EphemerisOracle};
use crate::error::AnalysisError;
use crate::time::JulianDay;
use crate::types::{BirthData, BodyAnalysis, SunAnalysis, ZodiacClassification};

/// Maps body positions onto zodiac bands.
///
/// Stateless apart from the shared oracle handle. Each call runs
/// query, normalize, band lookup, label and rounding in that order.
#[derive(Clone)]
pub struct PositionClassifier {
    oracle: Arc<dyn EphemerisOracle>,
}

impl PositionClassifier {
    pub fn new(oracle: Arc<dyn EphemerisOracle>) -> Self {
        Self { oracle }
    }

    /// Classify one body at a Julian Day.
    pub fn classify(&self, jd: JulianDay, body: Body) -> Result<ZodiacClassification, AnalysisError> {
        let position = self.oracle.position(jd, body.swe_id()).map_err(|e| {
            log::warn!("Ephemeris query for {} at {} failed: {}", body, jd, e);
            AnalysisError::from(e)
        })?;

        let classification = ZodiacClassification::from_position(jd, &position);
        log::debug!(
            "{} at {}: {:.2}° {} ({})",
            body,
            jd,
            classification.longitude_deg(),
            classification.sign(),
            classification.energy_profile()
        );
        Ok(classification)
    }

    /// Validate birth data, then classify `body` at that moment.
    ///
    /// Date errors are raised before the oracle is touched.
    pub fn classify_birth(
        &self,
        data: &BirthData,
        body: Body,
    ) -> Result<ZodiacClassification, AnalysisError> {
        let jd = data.julian_day()?;
        data.validate_location()?;
        self.classify(jd, body)
    }

    pub fn analyze_sun(&self, data: &BirthData) -> Result<SunAnalysis, AnalysisError> {
        self.classify_birth(data, Body::Sun).map(SunAnalysis::from)
    }

    pub fn analyze_body(&self, data: &BirthData, body: Body) -> Result<BodyAnalysis, AnalysisError> {
        self.classify_birth(data, body).map(|c| BodyAnalysis::new(body, c))
    }
}
