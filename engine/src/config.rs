use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Contents of `~/.periodle/config.toml`. Every section is optional.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
///
/// [catalog]
/// source = "bundled"          # or "minimal"
/// path = "${HOME}/elements.json"
///
/// [game]
/// seed = 42
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct PeriodleConfig {
    pub app: Option<AppConfig>,
    pub catalog: Option<CatalogConfig>,
    pub game: Option<GameConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for markers and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Which built-in element table to play with.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// All 118 elements.
    #[default]
    Bundled,
    /// The six-element fallback set.
    Minimal,
}

impl CatalogSource {
    pub const ENV_VAR: &'static str = "PERIODLE_CATALOG";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Minimal => "minimal",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bundled" | "full" => Some(Self::Bundled),
            "minimal" | "fallback" => Some(Self::Minimal),
            _ => None,
        }
    }

    pub fn from_env() -> Option<Self> {
        let value = env::var(Self::ENV_VAR).ok()?;
        let parsed = Self::parse(&value);
        if parsed.is_none() {
            tracing::warn!("Unknown catalog source in {}: {}", Self::ENV_VAR, value);
        }
        parsed
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogConfig {
    pub source: Option<CatalogSource>,
    /// External JSON table. Takes precedence over `source`.
    pub path: Option<String>,
}

impl CatalogConfig {
    /// `path` with `${VAR}` references expanded.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let raw = self.path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(PathBuf::from(expand_env_vars(raw)))
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct GameConfig {
    /// Fixed seed for target selection. Rounds repeat across launches.
    pub seed: Option<u64>,
}

/// Replace `${VAR}` with the value of the environment variable `VAR`.
/// Unset variables expand to nothing; unterminated references are kept.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

impl PeriodleConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn app(&self) -> AppConfig {
        self.app.unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.game.and_then(|game| game.seed)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".periodle").join("config.toml"))
}
