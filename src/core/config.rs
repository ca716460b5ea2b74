//! # Configuration
//!
//! Optional palette overrides with a clear hierarchy:
//! defaults -> config file -> CLI flags.
//!
//! Config lives at `~/.cellbrush/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the format.
//! Individual bad entries (unknown key, unparseable color) are skipped
//! with a warning; a malformed file is fatal before any frame is shown.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;

use crate::core::palette::Palette;

// ============================================================================
// Config Structs (sparse TOML, everything optional)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CellbrushConfig {
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

/// One palette override: rebind a digit key to a hex color.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorEntry {
    pub key: String,
    pub color: String,
}

// ============================================================================
// Resolved Config (concrete values, nothing optional)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub palette: Palette,
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

/// Returns the path to `~/.cellbrush/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cellbrush").join("config.toml"))
}

/// Load the config file.
///
/// An explicit `cli_path` must exist and parse. The default path is
/// looser: no home directory or no file just means defaults, and a
/// missing file additionally gets a commented-out template written in
/// its place.
pub fn load_config(cli_path: Option<&Path>) -> Result<CellbrushConfig, ConfigError> {
    if let Some(path) = cli_path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default palette");
            return Ok(CellbrushConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CellbrushConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<CellbrushConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CellbrushConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Cellbrush Configuration
# All settings are optional. Defaults are used for anything not specified.
#
# Rebind any of the color keys 1..8 to a #rrggbb color:
#
# [[colors]]
# key = "3"
# color = "#ff5544"
#
# [[colors]]
# key = "8"
# color = "#b5651d"
"##;

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

/// Resolve the final palette by applying file overrides to the standard
/// table. Bad entries are skipped with a warning, never fatal.
pub fn resolve(config: &CellbrushConfig) -> ResolvedConfig {
    let mut palette = Palette::standard();

    for entry in &config.colors {
        let key = match single_char(&entry.key) {
            Some(k) => k,
            None => {
                warn!("Ignoring palette override with key {:?}: not a single key", entry.key);
                continue;
            }
        };
        let color = match parse_hex_color(&entry.color) {
            Some(c) => c,
            None => {
                warn!(
                    "Ignoring palette override for key {:?}: {:?} is not a #rrggbb color",
                    entry.key, entry.color
                );
                continue;
            }
        };
        if palette.override_key(key, color) {
            info!("Palette override: {} -> {}", key, entry.color);
        } else {
            warn!("Ignoring palette override with key {:?}: not one of 1..8", entry.key);
        }
    }

    ResolvedConfig { palette }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse a `#rrggbb` string into an RGB color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
