//! Defaults file and templates root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, ContractMode, Network, Platform, SigningMode};

/// Defaults file looked up in the working directory when `--config` is absent.
pub const DEFAULTS_FILE: &str = "create-kadena-app.toml";

/// Environment variable overriding the templates root.
pub const TEMPLATES_ENV: &str = "CREATE_KADENA_APP_TEMPLATES";

/// Option defaults read from a TOML file. Explicit flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDefaults {
    pub platform: Option<Platform>,
    pub network: Option<Network>,
    pub contract: Option<ContractMode>,
    pub signing: Option<SigningMode>,
    pub chain: Option<String>,
    pub git: Option<bool>,
    pub install: Option<bool>,
    pub templates_dir: Option<PathBuf>,
}

impl CreateDefaults {
    /// Parse defaults from TOML content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Load defaults from `explicit`, or from [`DEFAULTS_FILE`] in `cwd` if it exists.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, AppError> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = cwd.join(DEFAULTS_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "loading defaults");
        let content =
            fs::read_to_string(&path).map_err(|e| AppError::io("Failed to read", &path, e))?;
        Self::parse(&content)
    }
}

/// Pick the templates root.
///
/// Order: explicit flag, defaults file, environment, `templates/` beside the
/// executable, then the source checkout.
pub fn resolve_templates_root(flag: Option<&Path>, defaults: &CreateDefaults) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = &defaults.templates_dir {
        return path.clone();
    }
    if let Some(path) = env::var_os(TEMPLATES_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }
    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let candidate = dir.join("templates");
        if candidate.is_dir() {
            return candidate;
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
