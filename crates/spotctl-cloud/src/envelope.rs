//! Resource envelope shared by every Ocean resource kind
//!
//! An [`Envelope`] carries the identity and timestamps the management API
//! reports for a resource, plus a provider-typed payload. The `kind` tag is
//! derived from the payload type and cannot be changed after construction,
//! and the timestamps can only be filled from a backend response.

use crate::payload::{ClusterPayload, LaunchSpecPayload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker for payload types that can travel inside an [`Envelope`]
pub trait Resource {
    /// Logical resource kind, e.g. "Cluster"
    const KIND: &'static str;
}

/// Identity and bookkeeping fields reported by the management API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Generic wrapper around a provider-specific resource payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<P> {
    kind: &'static str,
    #[serde(flatten)]
    meta: ObjectMeta,
    #[serde(rename = "spec")]
    payload: P,
}

pub type OceanCluster = Envelope<ClusterPayload>;
pub type OceanLaunchSpec = Envelope<LaunchSpecPayload>;

impl<P: Resource> Envelope<P> {
    /// Wrap a payload that does not exist remotely yet
    pub fn new(payload: P) -> Self {
        Self {
            kind: P::KIND,
            meta: ObjectMeta::default(),
            payload,
        }
    }

    /// Wrap a payload as returned by a backend, keeping its identity and timestamps verbatim
    pub fn from_remote(meta: ObjectMeta, payload: P) -> Self {
        Self {
            kind: P::KIND,
            meta,
            payload,
        }
    }

    /// Address an existing resource by ID (used by update requests)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = id.into();
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.meta.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.meta.updated_at
    }

    pub fn meta(&self) -> &ObjectMeta {
        &self.meta
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::aws;

    #[test]
    fn test_new_envelope_is_empty() {
        let cluster = OceanCluster::new(ClusterPayload::Aws(aws::Cluster::default()));
        assert_eq!(cluster.kind(), "Cluster");
        assert!(cluster.id().is_empty());
        assert!(cluster.name().is_empty());
        assert!(cluster.created_at().is_none());
        assert!(cluster.updated_at().is_none());
    }

    #[test]
    fn test_kind_follows_payload_type() {
        let spec = OceanLaunchSpec::new(LaunchSpecPayload::default());
        assert_eq!(spec.kind(), "LaunchSpec");
    }

    #[test]
    fn test_serialized_shape() {
        let meta = ObjectMeta {
            id: "o-1234".to_string(),
            name: "prod".to_string(),
            created_at: None,
            updated_at: None,
        };
        let cluster = OceanCluster::from_remote(
            meta,
            ClusterPayload::Aws(aws::Cluster {
                name: Some("prod".to_string()),
                ..Default::default()
            }),
        );

        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(value["kind"], "Cluster");
        assert_eq!(value["id"], "o-1234");
        assert_eq!(value["spec"]["name"], "prod");
        assert!(value.get("createdAt").is_none());
    }
}
