//! Spot management API client

use crate::error::Result;
use spotctl_cloud::{CloudProviderName, Orchestrator, ServiceRegistry};
use spotctl_cloud_aws::{HttpConfig, HttpOceanAws, OceanKubernetesAws};
use std::sync::Arc;

/// Client construction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Profile to read from the shared credentials file
    CredentialsProfile(String),
    /// Override the API endpoint
    BaseUrl(String),
    /// Override the account the token acts on
    Account(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ClientSettings {
    profile: Option<String>,
    base_url: Option<String>,
    account: Option<String>,
}

impl ClientSettings {
    /// Later options win
    fn from_options(options: impl IntoIterator<Item = ClientOption>) -> Self {
        let mut settings = Self::default();
        for option in options {
            match option {
                ClientOption::CredentialsProfile(p) => settings.profile = Some(p),
                ClientOption::BaseUrl(u) => settings.base_url = Some(u),
                ClientOption::Account(a) => settings.account = Some(a),
            }
        }
        settings
    }
}

/// Entry point to the Spot services
#[derive(Debug, Clone)]
pub struct SpotClient {
    services: ServiceRegistry,
}

impl SpotClient {
    /// Resolve credentials and register every supported Ocean backend
    pub fn new(options: impl IntoIterator<Item = ClientOption>) -> Result<Self> {
        let settings = ClientSettings::from_options(options);
        let (credentials, source) = spotctl_config::load_credentials(settings.profile.as_deref())?;
        tracing::debug!("Loaded Spot credentials from {}", source);

        let mut config = HttpConfig::new(credentials.token);
        if let Some(account) = settings.account.or(credentials.account) {
            config = config.with_account(account);
        }
        if let Some(base_url) = settings.base_url.or_else(spotctl_config::base_url) {
            config = config.with_base_url(base_url);
        }

        let api = Arc::new(HttpOceanAws::new(config));
        let services = ServiceRegistry::new().with(
            CloudProviderName::Aws,
            Orchestrator::Kubernetes,
            Arc::new(OceanKubernetesAws::new(api)),
        );

        Ok(Self { services })
    }

    /// Wrap an already populated registry
    pub fn with_services(services: ServiceRegistry) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_options_win() {
        let settings = ClientSettings::from_options([
            ClientOption::CredentialsProfile("default".to_string()),
            ClientOption::Account("act-1".to_string()),
            ClientOption::CredentialsProfile("staging".to_string()),
        ]);
        assert_eq!(settings.profile.as_deref(), Some("staging"));
        assert_eq!(settings.account.as_deref(), Some("act-1"));
        assert!(settings.base_url.is_none());
    }

    #[test]
    fn test_env_credentials_register_aws_kubernetes() {
        temp_env::with_vars(
            [
                ("SPOTINST_TOKEN", Some("token")),
                ("SPOTINST_ACCOUNT", None),
            ],
            || {
                let client = SpotClient::new([ClientOption::BaseUrl(
                    "http://127.0.0.1:1".to_string(),
                )])
                .unwrap();

                assert_eq!(
                    client.services().keys(),
                    vec![(CloudProviderName::Aws, Orchestrator::Kubernetes)]
                );
                let ocean = client
                    .services()
                    .ocean(CloudProviderName::Aws, Orchestrator::Kubernetes)
                    .unwrap();
                assert_eq!(ocean.name(), "ocean-aws-kubernetes");
            },
        );
    }

    #[test]
    fn test_missing_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("credentials");

        temp_env::with_vars(
            [
                ("SPOTINST_TOKEN", None),
                ("SPOTINST_CREDENTIALS_FILE", Some(missing.to_str().unwrap())),
            ],
            || {
                assert!(SpotClient::new(Vec::new()).is_err());
            },
        );
    }
}
