//! Closed sets of cloud provider and orchestrator names

use crate::error::CloudError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cloud providers known to spotctl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProviderName {
    Aws,
    Gcp,
    Azure,
}

impl CloudProviderName {
    pub const ALL: [CloudProviderName; 3] = [
        CloudProviderName::Aws,
        CloudProviderName::Gcp,
        CloudProviderName::Azure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProviderName::Aws => "aws",
            CloudProviderName::Gcp => "gcp",
            CloudProviderName::Azure => "azure",
        }
    }
}

impl std::fmt::Display for CloudProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProviderName {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CloudError::UnknownProvider(s.to_string()))
    }
}

/// Container orchestrators an Ocean cluster can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orchestrator {
    Kubernetes,
    Ecs,
}

impl Orchestrator {
    pub const ALL: [Orchestrator; 2] = [Orchestrator::Kubernetes, Orchestrator::Ecs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orchestrator::Kubernetes => "kubernetes",
            Orchestrator::Ecs => "ecs",
        }
    }
}

impl std::fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orchestrator {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == wanted)
            .ok_or_else(|| CloudError::UnknownOrchestrator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!("AWS".parse::<CloudProviderName>().unwrap(), CloudProviderName::Aws);
        assert_eq!(" gcp ".parse::<CloudProviderName>().unwrap(), CloudProviderName::Gcp);
    }

    #[test]
    fn test_unknown_provider() {
        let err = "oracle".parse::<CloudProviderName>().unwrap_err();
        assert!(matches!(err, CloudError::UnknownProvider(ref name) if name == "oracle"));
    }

    #[test]
    fn test_orchestrator_display_round_trips() {
        for orchestrator in Orchestrator::ALL {
            let parsed: Orchestrator = orchestrator.to_string().parse().unwrap();
            assert_eq!(parsed, orchestrator);
        }
        assert!("nomad".parse::<Orchestrator>().is_err());
    }
}
