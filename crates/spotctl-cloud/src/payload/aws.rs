//! Ocean AWS resource models
//!
//! Field names follow the Spot API wire format. Every field is optional and
//! omitted from requests when unset, so the server keeps its own defaults
//! for anything the caller did not provide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ocean cluster on AWS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_cluster_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaler: Option<AutoScaler>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_percentage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilize_reserved_instances: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_od: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<InstanceTypes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_specification: Option<LaunchSpecification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<Vec<String>>,
}

/// Launch configuration applied to every node of the cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_volume_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_config: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
}

/// Ocean launch spec (custom node group) on AWS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocean_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cluster_serializes_empty() {
        assert_eq!(serde_json::to_string(&Cluster::default()).unwrap(), "{}");
    }

    #[test]
    fn test_cluster_wire_names() {
        let cluster = Cluster {
            strategy: Some(Strategy {
                fallback_to_od: Some(true),
                ..Default::default()
            }),
            auto_scaler: Some(AutoScaler {
                is_auto_config: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(value["strategy"]["fallbackToOd"], true);
        assert_eq!(value["autoScaler"]["isAutoConfig"], true);
    }

    #[test]
    fn test_deserialize_api_item() {
        let raw = r#"{
            "id": "o-12345678",
            "name": "demo",
            "controllerClusterId": "demo-controller",
            "region": "us-west-2",
            "capacity": { "minimum": 0, "maximum": 100, "target": 2 },
            "createdAt": "2019-06-10T15:06:13.000Z",
            "updatedAt": "2019-06-11T08:00:00.000Z"
        }"#;

        let cluster: Cluster = serde_json::from_str(raw).unwrap();
        assert_eq!(cluster.id.as_deref(), Some("o-12345678"));
        assert_eq!(cluster.capacity.unwrap().maximum, Some(100));
        assert!(cluster.created_at.is_some());
    }

    #[test]
    fn test_deserialize_launch_spec() {
        let raw = r#"{
            "id": "ols-1234",
            "oceanId": "o-12345678",
            "securityGroupIds": ["sg-1", "sg-2"],
            "userData": "aGVsbG8="
        }"#;

        let spec: LaunchSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(spec.ocean_id.as_deref(), Some("o-12345678"));
        assert_eq!(spec.security_group_ids.unwrap().len(), 2);
    }
}
