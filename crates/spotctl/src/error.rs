//! CLI error types

use spotctl_cloud::CloudError;
use spotctl_config::ConfigError;
use thiserror::Error;

/// Option validation failures, raised before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        ValidationError::Required { field }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } | ValidationError::Invalid { field, .. } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cloud(#[from] CloudError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown output format: {0} (expected one of: json, yaml, table)")]
    UnknownFormat(String),

    #[error("unknown helper command: {0} (expected one of: kubectl, aws)")]
    UnknownCommand(String),

    #[error("{name} exited with {status}")]
    CommandFailed { name: String, status: String },

    #[error("missing required dependencies: {0}")]
    MissingDependency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_names_the_field() {
        let err = ValidationError::required("cluster-id");
        assert_eq!(err.to_string(), "cluster-id is required");
        assert_eq!(err.field(), "cluster-id");
    }

    #[test]
    fn test_vendor_errors_stay_verbatim() {
        #[derive(Error, Debug)]
        #[error("Response status 401: invalid token")]
        struct Vendor;

        let err: CliError = CloudError::vendor(Vendor).into();
        assert_eq!(err.to_string(), "Response status 401: invalid token");
    }
}
