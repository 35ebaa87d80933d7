use crate::ephemeris::oracle::{EphemerisOracle, OracleError};
use crate::ephemeris::types::RawPosition;
use crate::time::JulianDay;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use swisseph::swe::calc_ut;

/// FLG_SWIEPH: use Swiss Ephemeris data files, falling back to the built-in
/// Moshier model when they are missing.
const FLG_SWIEPH: i32 = 2;

/// FLG_SPEED: fill in daily motion
const FLG_SPEED: i32 = 256;

/// Environment variable the Swiss Ephemeris C library reads for its data path
const SE_EPHE_PATH: &str = "SE_EPHE_PATH";

static EPHE_PATH_INIT: Once = Once::new();

/// Swiss Ephemeris adapter implementation.
///
/// The C library keeps global computation buffers, so every query goes
/// through `guard`. Sharing one adapter behind an `Arc` serializes all
/// ephemeris calls in the process.
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
    flags: i32,
    guard: Mutex<()>,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with an optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH` when no path is given. With
    /// neither, Swiss Ephemeris uses its lower precision built-in model.
    /// The data path is process-wide and is applied only by the first
    /// adapter constructed; build it before starting worker threads.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, OracleError> {
        let path = ephemeris_path.or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        });

        if let Some(path) = &path {
            if !path.exists() {
                return Err(OracleError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                });
            }
        }

        apply_ephemeris_path(path.as_deref());

        Ok(Self {
            ephemeris_path: path,
            flags: FLG_SWIEPH | FLG_SPEED,
            guard: Mutex::new(()),
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }
}

impl EphemerisOracle for SwissEphemerisAdapter {
    fn position(&self, jd: JulianDay, body_id: i32) -> Result<RawPosition, OracleError> {
        let code = u32::try_from(body_id).map_err(|_| OracleError::CalculationFailed {
            body_id,
            jd,
            message: format!("Body id out of range: {}", body_id),
        })?;

        let result = {
            let _lock = self.guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            calc_ut(jd.value(), code, self.flags as u32)
        }
        .map_err(|e| OracleError::CalculationFailed {
            body_id,
            jd,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let position = RawPosition {
            longitude: out[0],
            latitude: out[1],
            distance: out[2],
            speed_lon: out[3],
        };

        if !position.longitude.is_finite() {
            return Err(OracleError::NonFiniteLongitude { body_id, jd });
        }

        Ok(position)
    }
}

fn apply_ephemeris_path(path: Option<&Path>) {
    EPHE_PATH_INIT.call_once(|| match path {
        Some(path) => {
            log::info!("Swiss Ephemeris data path: {}", path.display());
            env::set_var(SE_EPHE_PATH, path);
        }
        None => {
            log::warn!("No Swiss Ephemeris data path configured; using built-in Moshier model");
        }
    });
}
