use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("home directory not found")]
    HomeDirNotFound,

    #[error(
        "no Spot credentials found for profile '{profile}'. Either:\n\
        - set SPOTINST_TOKEN (and optionally SPOTINST_ACCOUNT), or\n\
        - add a '{profile}' entry with a token to ~/.spotinst/credentials"
    )]
    CredentialsNotFound { profile: String },

    #[error("failed to parse credentials file {path}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
