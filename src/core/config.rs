//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.staymap/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::listing::LatLng;
use crate::core::share::DEFAULT_PROMO_PREFIX;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StaymapConfig {
    #[serde(default)]
    pub listings: ListingsConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListingsConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShareConfig {
    pub promo_prefix: Option<String>,
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapConfig {
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom: Option<f64>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub notice_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str =
    "https://run.mocky.io/v3/6f6abfa1-0a9a-4cf8-8a00-c70078e97f69";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const DEFAULT_CENTER: LatLng = LatLng::new(37.497816, 127.027235);
pub const DEFAULT_ZOOM: f64 = 12.0;
pub const DEFAULT_MIN_ZOOM: f64 = 10.0;
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;
pub const DEFAULT_NOTICE_SECS: u64 = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub promo_prefix: String,
    pub share_command: Option<String>,
    pub initial_center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub notice_ttl: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.staymap/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".staymap").join("config.toml"))
}

/// Load config from `~/.staymap/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StaymapConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StaymapConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StaymapConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StaymapConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: StaymapConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# staymap Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [listings]
# endpoint = "https://run.mocky.io/v3/6f6abfa1-0a9a-4cf8-8a00-c70078e97f69"
# timeout_secs = 10                  # Or set STAYMAP_TIMEOUT_SECS

# [share]
# promo_prefix = "[Book now at this price!!]"
# command = "wl-copy"                # Receives the share text on stdin

# [map]
# center_lat = 37.497816
# center_lng = 127.027235
# zoom = 12
# min_zoom = 10
# max_zoom = 18

# [ui]
# notice_secs = 3
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub zoom: Option<f64>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StaymapConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an explicit environment lookup.
pub fn resolve_with_env(
    config: &StaymapConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("STAYMAP_ENDPOINT"))
        .or_else(|| config.listings.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Timeout: env → config → default
    let timeout_secs = env("STAYMAP_TIMEOUT_SECS")
        .and_then(|s| s.trim().parse().ok())
        .or(config.listings.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs < MIN_TIMEOUT_SECS {
        warn!(
            "timeout_secs = {} would fail every request, using {}",
            timeout_secs, MIN_TIMEOUT_SECS
        );
    }

    // Share command: env → config
    let share_command = env("STAYMAP_SHARE_COMMAND")
        .or_else(|| config.share.command.clone())
        .filter(|c| !c.trim().is_empty());

    let (min_zoom, max_zoom) = resolve_zoom_bounds(&config.map);
    let zoom = finite("zoom", cli.zoom.or(config.map.zoom))
        .unwrap_or(DEFAULT_ZOOM)
        .clamp(min_zoom, max_zoom);

    ResolvedConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs.max(MIN_TIMEOUT_SECS)),
        promo_prefix: config
            .share
            .promo_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMO_PREFIX.to_string()),
        share_command,
        initial_center: resolve_center(&config.map),
        zoom,
        min_zoom,
        max_zoom,
        notice_ttl: Duration::from_secs(config.ui.notice_secs.unwrap_or(DEFAULT_NOTICE_SECS)),
    }
}

/// Drops NaN and infinities, which TOML and `f64::from_str` both accept.
fn finite(name: &str, value: Option<f64>) -> Option<f64> {
    value.filter(|v| {
        let ok = v.is_finite();
        if !ok {
            warn!("{} = {} is not a finite number, using default", name, v);
        }
        ok
    })
}

/// Out-of-range or non-finite coordinates fall back to the default per axis.
fn resolve_center(map: &MapConfig) -> LatLng {
    let lat = finite("center_lat", map.center_lat)
        .filter(|lat| (-90.0..=90.0).contains(lat))
        .unwrap_or(DEFAULT_CENTER.lat);
    let lng = finite("center_lng", map.center_lng)
        .filter(|lng| (-180.0..=180.0).contains(lng))
        .unwrap_or(DEFAULT_CENTER.lng);
    LatLng::new(lat, lng)
}

/// Inverted bounds fall back to the defaults.
fn resolve_zoom_bounds(map: &MapConfig) -> (f64, f64) {
    let min = finite("min_zoom", map.min_zoom).unwrap_or(DEFAULT_MIN_ZOOM);
    let max = finite("max_zoom", map.max_zoom).unwrap_or(DEFAULT_MAX_ZOOM);
    if min > max {
        warn!(
            "min_zoom ({}) exceeds max_zoom ({}), using defaults",
            min, max
        );
        return (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM);
    }
    (min, max)
}
