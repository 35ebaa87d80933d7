use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSettings {
    /// Swiss Ephemeris data directory; `None` means the built-in model
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SomaSettings {
    pub server: ServerSettings,
    pub ephemeris: EphemerisSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct ServerToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_timeout_ms")]
    request_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: Option<ServerToml>,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Try `$SOMA_CONFIG`, then the common relative paths for `configs/soma.toml`.
///
/// A missing file is not an error; an explicit `$SOMA_CONFIG` that cannot be
/// read is.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    if let Ok(explicit) = env::var("SOMA_CONFIG") {
        let text = fs::read_to_string(&explicit)
            .map_err(|e| anyhow::anyhow!("Could not read SOMA_CONFIG={explicit}: {e}"))?;
        return Ok(Some(text));
    }
    let paths = ["configs/soma.toml", "../../configs/soma.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

/// Parse settings from TOML text, filling unset keys with defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<SomaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse soma.toml: {e}"))?;
    let server = root.server.unwrap_or_else(|| ServerToml {
        host: default_host(),
        port: default_port(),
        request_timeout_ms: default_timeout_ms(),
    });
    let ephemeris = root.ephemeris.unwrap_or_default();

    Ok(SomaSettings {
        server: ServerSettings {
            host: server.host,
            port: server.port,
            request_timeout: Duration::from_millis(server.request_timeout_ms),
        },
        ephemeris: EphemerisSettings {
            path: ephemeris.path,
        },
    })
}

/// Apply `HOST`, `PORT` and `SWISS_EPHEMERIS_PATH` on top of file settings.
pub fn apply_env_overrides<F>(mut settings: SomaSettings, lookup: F) -> anyhow::Result<SomaSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
        settings.server.host = host;
    }
    if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
        settings.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT={port} is not a valid port: {e}"))?;
    }
    if let Some(path) = lookup("SWISS_EPHEMERIS_PATH").filter(|p| !p.is_empty()) {
        settings.ephemeris.path = Some(PathBuf::from(path));
    }
    Ok(settings)
}

pub fn validate_settings(settings: &SomaSettings) -> anyhow::Result<()> {
    if settings.server.host.trim().is_empty() {
        anyhow::bail!("server.host must not be empty");
    }
    if settings.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }
    if settings.server.request_timeout.is_zero() {
        anyhow::bail!("server.request_timeout_ms must be greater than zero");
    }
    Ok(())
}

pub fn load_settings() -> anyhow::Result<SomaSettings> {
    let settings = match read_config_toml_text()? {
        Some(text) => parse_settings(&text)?,
        None => parse_settings("")?,
    };
    let settings = apply_env_overrides(settings, |key| env::var(key).ok())?;
    validate_settings(&settings)?;
    Ok(settings)
}
