//! Tropical zodiac bands.
//!
//! The ecliptic is split into twelve 30° bands starting at 0° Aries. The
//! order below is fixed and must never be rearranged.

use serde::{Deserialize, Serialize};
use std::fmt;

const DEGREES_PER_SIGN: f64 = 30.0;
const FULL_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in zodiac order, index 0 = Aries
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for a band index; indices wrap modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude, in any range.
    pub fn from_longitude(longitude: f64) -> Self {
        Self::ALL[sign_index(normalize_degrees(longitude))]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse energy label attached to a sign.
///
/// Aries is `High`, every other sign is `Variable`. The rule is a
/// placeholder: eleven of the twelve signs share one label. Keep it
/// bivalent until a richer rule is actually requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyProfile {
    High,
    Variable,
}

impl EnergyProfile {
    pub fn for_sign(sign: ZodiacSign) -> Self {
        match sign {
            ZodiacSign::Aries => EnergyProfile::High,
            _ => EnergyProfile::Variable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyProfile::High => "High",
            EnergyProfile::Variable => "Variable",
        }
    }
}

impl fmt::Display for EnergyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduce an angle into `[0, 360)`.
///
/// Negative inputs wrap forward. `rem_euclid` can return exactly 360.0 for
/// tiny negative inputs, which is folded back to 0.0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_CIRCLE);
    if normalized >= FULL_CIRCLE {
        0.0
    } else {
        normalized
    }
}

/// Band index (0-11) for a longitude already reduced by [`normalize_degrees`].
///
/// Clamped so float noise at the top of the circle can never produce 12.
pub fn sign_index(normalized: f64) -> usize {
    if normalized >= FULL_CIRCLE {
        return 0;
    }
    let index = (normalized / DEGREES_PER_SIGN).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(11)
    }
}

/// Round to two decimal places for presentation.
pub fn round_degrees(degrees: f64) -> f64 {
    (degrees * 100.0).round() / 100.0
}
