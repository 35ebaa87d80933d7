//! Request and result records for the position pipeline.

use serde::{Deserialize, Serialize};

use crate::ephemeris::{Body, RawPosition};
use crate::error::AnalysisError;
use crate::time::JulianDay;
use crate::zodiac::{self, EnergyProfile, ZodiacSign};

/// Birth moment and place, UT.
///
/// `lat`/`lon` are validated but not used by single-body classification;
/// they are carried for house-system work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Fractional hour of day, `[0, 24)`
    pub hour: f64,
    pub lat: f64,
    pub lon: f64,
}

impl BirthData {
    pub fn julian_day(&self) -> Result<JulianDay, AnalysisError> {
        Ok(JulianDay::from_civil(self.year, self.month, self.day, self.hour)?)
    }

    pub fn validate_location(&self) -> Result<(), AnalysisError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AnalysisError::InvalidLocation {
                message: format!("latitude {} is outside [-90, 90]", self.lat),
            });
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(AnalysisError::InvalidLocation {
                message: format!("longitude {} is outside [-180, 180]", self.lon),
            });
        }
        Ok(())
    }
}

/// Zodiac placement of one body at one moment.
///
/// Only constructed from a raw position, so the sign and label always agree
/// with the stored degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacClassification {
    julian_day: JulianDay,
    longitude_deg: f64,
    sign: ZodiacSign,
    energy_profile: EnergyProfile,
}

impl ZodiacClassification {
    pub fn from_position(julian_day: JulianDay, position: &RawPosition) -> Self {
        let normalized = zodiac::normalize_degrees(position.longitude);
        let sign = ZodiacSign::from_longitude(normalized);
        Self {
            julian_day,
            longitude_deg: zodiac::round_degrees(normalized),
            sign,
            energy_profile: EnergyProfile::for_sign(sign),
        }
    }

    pub fn julian_day(&self) -> JulianDay {
        self.julian_day
    }

    /// Normalized longitude rounded to two decimals.
    ///
    /// The sign is taken from the unrounded degree, so a body at 359.996°
    /// reports `360.0` here while [`sign`](Self::sign) is still Pisces.
    /// Rounding never moves a body into the next band.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    pub fn energy_profile(&self) -> EnergyProfile {
        self.energy_profile
    }
}

/// Wire shape of the Sun analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunAnalysis {
    pub julian_day: f64,
    /// Rounded to two decimals; may read `360.0` for a Pisces Sun
    pub sun_longitude_deg: f64,
    pub zodiac_sign: ZodiacSign,
    pub energy_profile: EnergyProfile,
}

impl From<ZodiacClassification> for SunAnalysis {
    fn from(c: ZodiacClassification) -> Self {
        Self {
            julian_day: c.julian_day.value(),
            sun_longitude_deg: c.longitude_deg,
            zodiac_sign: c.sign,
            energy_profile: c.energy_profile,
        }
    }
}

/// Wire shape for any single body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAnalysis {
    pub julian_day: f64,
    pub body: Body,
    pub longitude_deg: f64,
    pub zodiac_sign: ZodiacSign,
    pub energy_profile: EnergyProfile,
}

impl BodyAnalysis {
    pub fn new(body: Body, c: ZodiacClassification) -> Self {
        Self {
            julian_day: c.julian_day.value(),
            body,
            longitude_deg: c.longitude_deg,
            zodiac_sign: c.sign,
            energy_profile: c.energy_profile,
        }
    }
}
