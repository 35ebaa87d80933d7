use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::oracle::OracleError;

/// Bodies the Swiss Ephemeris adapter knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
}

// Swiss Ephemeris planet numbers. NorthNode is SE_TRUE_NODE.
const BODY_IDS: &[(Body, &str, i32)] = &[
    (Body::Sun, "sun", 0),
    (Body::Moon, "moon", 1),
    (Body::Mercury, "mercury", 2),
    (Body::Venus, "venus", 3),
    (Body::Mars, "mars", 4),
    (Body::Jupiter, "jupiter", 5),
    (Body::Saturn, "saturn", 6),
    (Body::Uranus, "uranus", 7),
    (Body::Neptune, "neptune", 8),
    (Body::Pluto, "pluto", 9),
    (Body::NorthNode, "north_node", 11),
    (Body::Chiron, "chiron", 15),
];

impl Body {
    /// Swiss Ephemeris body number
    pub fn swe_id(self) -> i32 {
        self.entry().2
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Every supported body, in Swiss Ephemeris id order
    pub fn all() -> impl Iterator<Item = Body> {
        BODY_IDS.iter().map(|(body, _, _)| *body)
    }

    fn entry(self) -> &'static (Body, &'static str, i32) {
        // BODY_IDS lists every variant exactly once, in declaration order.
        &BODY_IDS[self as usize]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Body::all()
            .find(|body| body.name() == wanted)
            .ok_or_else(|| OracleError::UnknownBody {
                name: s.to_string(),
                valid: Body::all().map(|body| body.name().to_string()).collect(),
            })
    }
}

/// Raw output of an ephemeris query.
///
/// `longitude` is ecliptic longitude in degrees and is not guaranteed to be
/// inside `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

impl RawPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed_lon < 0.0
    }
}
