//! Provider-typed payloads
//!
//! Each resource kind has one enum with a variant per provider that has a
//! model. `Unspecified` is what a builder produces for a provider it has no
//! entry for; backends reject it.

pub mod aws;

use crate::envelope::Resource;
use crate::name::CloudProviderName;
use serde::Serialize;

/// Ocean cluster payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClusterPayload {
    Aws(aws::Cluster),
    #[default]
    Unspecified,
}

impl ClusterPayload {
    pub fn provider(&self) -> Option<CloudProviderName> {
        match self {
            ClusterPayload::Aws(_) => Some(CloudProviderName::Aws),
            ClusterPayload::Unspecified => None,
        }
    }

    /// Label used when a payload ends up at the wrong backend
    pub fn variant_name(&self) -> String {
        self.provider()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unspecified".to_string())
    }
}

impl Resource for ClusterPayload {
    const KIND: &'static str = "Cluster";
}

/// Ocean launch spec payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LaunchSpecPayload {
    Aws(aws::LaunchSpec),
    #[default]
    Unspecified,
}

impl LaunchSpecPayload {
    pub fn provider(&self) -> Option<CloudProviderName> {
        match self {
            LaunchSpecPayload::Aws(_) => Some(CloudProviderName::Aws),
            LaunchSpecPayload::Unspecified => None,
        }
    }

    pub fn variant_name(&self) -> String {
        self.provider()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unspecified".to_string())
    }
}

impl Resource for LaunchSpecPayload {
    const KIND: &'static str = "LaunchSpec";
}
