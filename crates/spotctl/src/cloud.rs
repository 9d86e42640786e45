//! Cloud provider handles
//!
//! A handle answers provider-local questions (default region) without
//! talking to the Spot API.

use crate::error::Result;
use spotctl_cloud::{CloudError, CloudProviderName};
use std::str::FromStr;

pub trait Cloud: Send + Sync {
    fn name(&self) -> CloudProviderName;

    /// Region to offer when the user did not pass one
    fn default_region(&self) -> Option<String>;
}

/// AWS handle backed by the standard AWS environment variables
#[derive(Debug, Clone, Default)]
pub struct AwsCloud {
    region: Option<String>,
}

impl AwsCloud {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    pub fn from_env() -> Self {
        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty());
        Self { region }
    }
}

impl Cloud for AwsCloud {
    fn name(&self) -> CloudProviderName {
        CloudProviderName::Aws
    }

    fn default_region(&self) -> Option<String> {
        self.region.clone()
    }
}

/// Look up the handle for a provider name
pub fn get_instance(name: &str) -> Result<Box<dyn Cloud>> {
    match CloudProviderName::from_str(name)? {
        CloudProviderName::Aws => Ok(Box::new(AwsCloud::from_env())),
        other => Err(CloudError::UnknownProvider(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_aws_region_from_env() {
        temp_env::with_vars(
            [
                ("AWS_REGION", None),
                ("AWS_DEFAULT_REGION", Some("eu-west-1")),
            ],
            || {
                let cloud = get_instance("aws").unwrap();
                assert_eq!(cloud.name(), CloudProviderName::Aws);
                assert_eq!(cloud.default_region().as_deref(), Some("eu-west-1"));
            },
        );

        temp_env::with_vars(
            [
                ("AWS_REGION", Some("us-east-2")),
                ("AWS_DEFAULT_REGION", Some("eu-west-1")),
            ],
            || {
                assert_eq!(
                    AwsCloud::from_env().default_region().as_deref(),
                    Some("us-east-2")
                );
            },
        );
    }

    #[test]
    fn test_unknown_provider() {
        for name in ["oracle", "gcp"] {
            assert!(matches!(
                get_instance(name),
                Err(CliError::Cloud(CloudError::UnknownProvider(_)))
            ));
        }
    }
}
