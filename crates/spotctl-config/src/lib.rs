//! spotctl credentials and environment settings

pub mod error;

pub use error::*;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE: &str = "default";

pub const ENV_TOKEN: &str = "SPOTINST_TOKEN";
pub const ENV_ACCOUNT: &str = "SPOTINST_ACCOUNT";
pub const ENV_PROFILE: &str = "SPOTINST_PROFILE";
pub const ENV_CREDENTIALS_FILE: &str = "SPOTINST_CREDENTIALS_FILE";
pub const ENV_BASE_URL: &str = "SPOTINST_BASE_URL";

/// Spot API credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub account: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

/// Where the credentials came from, for `doctor` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsSource {
    Environment,
    File(PathBuf),
}

impl std::fmt::Display for CredentialsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsSource::Environment => write!(f, "environment ({})", ENV_TOKEN),
            CredentialsSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Profile selection: explicit value, then SPOTINST_PROFILE, then "default"
pub fn resolve_profile(explicit: Option<&str>) -> String {
    explicit
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(ENV_PROFILE).ok().filter(|p| !p.is_empty()))
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

/// Path of the shared credentials file
///
/// SPOTINST_CREDENTIALS_FILE overrides `~/.spotinst/credentials`.
pub fn credentials_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CREDENTIALS_FILE) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(".spotinst").join("credentials"))
}

/// Resolve credentials for a profile
///
/// Search order:
/// 1. SPOTINST_TOKEN / SPOTINST_ACCOUNT environment variables
/// 2. The profile entry of the shared credentials file
pub fn load_credentials(profile: Option<&str>) -> Result<(Credentials, CredentialsSource)> {
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        if !token.is_empty() {
            tracing::debug!("Using credentials from environment");
            let account = std::env::var(ENV_ACCOUNT).ok().filter(|a| !a.is_empty());
            return Ok((Credentials { token, account }, CredentialsSource::Environment));
        }
    }

    let profile = resolve_profile(profile);
    let path = credentials_path()?;
    let mut credentials = load_credentials_from(&path, &profile)?;

    // The account env var still applies on top of a file profile.
    if let Ok(account) = std::env::var(ENV_ACCOUNT) {
        if !account.is_empty() {
            credentials.account = Some(account);
        }
    }

    Ok((credentials, CredentialsSource::File(path)))
}

/// Read one profile from a credentials file
///
/// The file is a YAML map of profile name to `{token, account}`.
pub fn load_credentials_from(path: &Path, profile: &str) -> Result<Credentials> {
    if !path.exists() {
        return Err(ConfigError::CredentialsNotFound {
            profile: profile.to_string(),
        });
    }

    tracing::debug!("Reading credentials file: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let mut profiles: HashMap<String, Credentials> =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::CredentialsParse {
            path: path.to_path_buf(),
            source,
        })?;

    match profiles.remove(profile) {
        Some(credentials) if !credentials.is_empty() => Ok(credentials),
        _ => Err(ConfigError::CredentialsNotFound {
            profile: profile.to_string(),
        }),
    }
}

/// Optional API base URL override
pub fn base_url() -> Option<String> {
    std::env::var(ENV_BASE_URL).ok().filter(|u| !u.is_empty())
}
