//! Ocean AWS vendor service contract

use crate::error::Result;
use async_trait::async_trait;
use spotctl_cloud::payload::aws::{Cluster, LaunchSpec};

/// One method per Ocean AWS Kubernetes API call.
///
/// Implementations report failures as-is; retries, if any, live here and
/// never in the backend above.
#[async_trait]
pub trait OceanAwsApi: Send + Sync {
    async fn list_clusters(&self) -> Result<Vec<Cluster>>;

    async fn read_cluster(&self, cluster_id: &str) -> Result<Cluster>;

    async fn create_cluster(&self, cluster: &Cluster) -> Result<Cluster>;

    async fn update_cluster(&self, cluster_id: &str, cluster: &Cluster) -> Result<Cluster>;

    async fn delete_cluster(&self, cluster_id: &str) -> Result<()>;

    async fn list_launch_specs(&self) -> Result<Vec<LaunchSpec>>;

    async fn read_launch_spec(&self, spec_id: &str) -> Result<LaunchSpec>;

    async fn create_launch_spec(&self, spec: &LaunchSpec) -> Result<LaunchSpec>;

    async fn update_launch_spec(&self, spec_id: &str, spec: &LaunchSpec) -> Result<LaunchSpec>;

    async fn delete_launch_spec(&self, spec_id: &str) -> Result<()>;
}
