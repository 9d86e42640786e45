//! Backend contract every `(cloud provider, orchestrator)` implementation satisfies

use crate::context::Context;
use crate::envelope::{OceanCluster, OceanLaunchSpec};
use crate::error::Result;
use async_trait::async_trait;

/// Uniform CRUD over Ocean envelopes.
///
/// Implementations must:
///
/// - map every response into a fresh envelope, copying identity and
///   timestamps verbatim from the response;
/// - check the payload variant before submitting a create or update;
/// - strip region and both timestamps from the payload copy sent by an
///   update, whatever the caller put there;
/// - run every vendor call through [`Context::run`].
#[async_trait]
pub trait OceanBackend: Send + Sync {
    /// Short backend label used in logs and error messages (e.g. "ocean-aws-kubernetes")
    fn name(&self) -> &'static str;

    async fn list_clusters(&self, ctx: &Context) -> Result<Vec<OceanCluster>>;

    async fn get_cluster(&self, ctx: &Context, cluster_id: &str) -> Result<OceanCluster>;

    async fn create_cluster(&self, ctx: &Context, cluster: &OceanCluster) -> Result<OceanCluster>;

    async fn update_cluster(&self, ctx: &Context, cluster: &OceanCluster) -> Result<OceanCluster>;

    async fn delete_cluster(&self, ctx: &Context, cluster_id: &str) -> Result<()>;

    async fn list_launch_specs(&self, ctx: &Context) -> Result<Vec<OceanLaunchSpec>>;

    async fn get_launch_spec(&self, ctx: &Context, spec_id: &str) -> Result<OceanLaunchSpec>;

    async fn create_launch_spec(
        &self,
        ctx: &Context,
        spec: &OceanLaunchSpec,
    ) -> Result<OceanLaunchSpec>;

    async fn update_launch_spec(
        &self,
        ctx: &Context,
        spec: &OceanLaunchSpec,
    ) -> Result<OceanLaunchSpec>;

    async fn delete_launch_spec(&self, ctx: &Context, spec_id: &str) -> Result<()>;
}
