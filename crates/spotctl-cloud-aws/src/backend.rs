//! `OceanBackend` implementation for Kubernetes on AWS

use crate::api::OceanAwsApi;
use async_trait::async_trait;
use spotctl_cloud::payload::aws::{Cluster, LaunchSpec};
use spotctl_cloud::{
    CloudError, ClusterPayload, Context, LaunchSpecPayload, ObjectMeta, OceanBackend,
    OceanCluster, OceanLaunchSpec, Result,
};
use std::sync::Arc;

const BACKEND_NAME: &str = "ocean-aws-kubernetes";

/// Ocean Kubernetes clusters and launch specs on AWS
pub struct OceanKubernetesAws {
    api: Arc<dyn OceanAwsApi>,
}

impl OceanKubernetesAws {
    pub fn new(api: Arc<dyn OceanAwsApi>) -> Self {
        Self { api }
    }

    fn cluster_payload<'a>(&self, cluster: &'a OceanCluster) -> Result<&'a Cluster> {
        match cluster.payload() {
            ClusterPayload::Aws(c) => Ok(c),
            other => Err(CloudError::PayloadMismatch {
                backend: BACKEND_NAME,
                kind: cluster.kind(),
                found: other.variant_name(),
            }),
        }
    }

    fn launch_spec_payload<'a>(&self, spec: &'a OceanLaunchSpec) -> Result<&'a LaunchSpec> {
        match spec.payload() {
            LaunchSpecPayload::Aws(s) => Ok(s),
            other => Err(CloudError::PayloadMismatch {
                backend: BACKEND_NAME,
                kind: spec.kind(),
                found: other.variant_name(),
            }),
        }
    }
}

fn cluster_envelope(cluster: Cluster) -> OceanCluster {
    let meta = ObjectMeta {
        id: cluster.id.clone().unwrap_or_default(),
        name: cluster.name.clone().unwrap_or_default(),
        created_at: cluster.created_at,
        updated_at: cluster.updated_at,
    };
    OceanCluster::from_remote(meta, ClusterPayload::Aws(cluster))
}

fn launch_spec_envelope(spec: LaunchSpec) -> OceanLaunchSpec {
    let meta = ObjectMeta {
        id: spec.id.clone().unwrap_or_default(),
        name: spec.name.clone().unwrap_or_default(),
        created_at: spec.created_at,
        updated_at: spec.updated_at,
    };
    OceanLaunchSpec::from_remote(meta, LaunchSpecPayload::Aws(spec))
}

/// Envelope ID first, then the ID carried inside the payload
fn target_id(envelope_id: &str, payload_id: Option<&String>) -> Option<String> {
    if !envelope_id.is_empty() {
        return Some(envelope_id.to_string());
    }
    payload_id.filter(|id| !id.is_empty()).cloned()
}

#[async_trait]
impl OceanBackend for OceanKubernetesAws {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn list_clusters(&self, ctx: &Context) -> Result<Vec<OceanCluster>> {
        tracing::debug!("Listing Ocean clusters");
        let clusters = ctx
            .run(async { self.api.list_clusters().await.map_err(CloudError::vendor) })
            .await?;

        Ok(clusters.into_iter().map(cluster_envelope).collect())
    }

    async fn get_cluster(&self, ctx: &Context, cluster_id: &str) -> Result<OceanCluster> {
        if cluster_id.is_empty() {
            return Err(CloudError::MissingId("cluster id"));
        }
        tracing::debug!("Reading Ocean cluster: {}", cluster_id);
        let cluster = ctx
            .run(async {
                self.api
                    .read_cluster(cluster_id)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(cluster_envelope(cluster))
    }

    async fn create_cluster(&self, ctx: &Context, cluster: &OceanCluster) -> Result<OceanCluster> {
        let payload = self.cluster_payload(cluster)?;
        tracing::debug!("Creating Ocean cluster: {:?}", payload.name);

        let created = ctx
            .run(async {
                self.api
                    .create_cluster(payload)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(cluster_envelope(created))
    }

    async fn update_cluster(&self, ctx: &Context, cluster: &OceanCluster) -> Result<OceanCluster> {
        let payload = self.cluster_payload(cluster)?;
        let cluster_id = target_id(cluster.id(), payload.id.as_ref())
            .ok_or(CloudError::MissingId("cluster id"))?;

        // Remove read-only fields.
        let mut request = payload.clone();
        request.region = None;
        request.created_at = None;
        request.updated_at = None;

        tracing::debug!("Updating Ocean cluster: {}", cluster_id);
        let updated = ctx
            .run(async {
                self.api
                    .update_cluster(&cluster_id, &request)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(cluster_envelope(updated))
    }

    async fn delete_cluster(&self, ctx: &Context, cluster_id: &str) -> Result<()> {
        if cluster_id.is_empty() {
            return Err(CloudError::MissingId("cluster id"));
        }
        tracing::debug!("Deleting Ocean cluster: {}", cluster_id);
        ctx.run(async {
            self.api
                .delete_cluster(cluster_id)
                .await
                .map_err(CloudError::vendor)
        })
        .await
    }

    async fn list_launch_specs(&self, ctx: &Context) -> Result<Vec<OceanLaunchSpec>> {
        tracing::debug!("Listing Ocean launch specs");
        let specs = ctx
            .run(async {
                self.api
                    .list_launch_specs()
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(specs.into_iter().map(launch_spec_envelope).collect())
    }

    async fn get_launch_spec(&self, ctx: &Context, spec_id: &str) -> Result<OceanLaunchSpec> {
        if spec_id.is_empty() {
            return Err(CloudError::MissingId("launch spec id"));
        }
        tracing::debug!("Reading Ocean launch spec: {}", spec_id);
        let spec = ctx
            .run(async {
                self.api
                    .read_launch_spec(spec_id)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(launch_spec_envelope(spec))
    }

    async fn create_launch_spec(
        &self,
        ctx: &Context,
        spec: &OceanLaunchSpec,
    ) -> Result<OceanLaunchSpec> {
        let payload = self.launch_spec_payload(spec)?;
        tracing::debug!("Creating Ocean launch spec: {:?}", payload.name);

        let created = ctx
            .run(async {
                self.api
                    .create_launch_spec(payload)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(launch_spec_envelope(created))
    }

    async fn update_launch_spec(
        &self,
        ctx: &Context,
        spec: &OceanLaunchSpec,
    ) -> Result<OceanLaunchSpec> {
        let payload = self.launch_spec_payload(spec)?;
        let spec_id = target_id(spec.id(), payload.id.as_ref())
            .ok_or(CloudError::MissingId("launch spec id"))?;

        // Remove read-only fields.
        let mut request = payload.clone();
        request.created_at = None;
        request.updated_at = None;

        tracing::debug!("Updating Ocean launch spec: {}", spec_id);
        let updated = ctx
            .run(async {
                self.api
                    .update_launch_spec(&spec_id, &request)
                    .await
                    .map_err(CloudError::vendor)
            })
            .await?;

        Ok(launch_spec_envelope(updated))
    }

    async fn delete_launch_spec(&self, ctx: &Context, spec_id: &str) -> Result<()> {
        if spec_id.is_empty() {
            return Err(CloudError::MissingId("launch spec id"));
        }
        tracing::debug!("Deleting Ocean launch spec: {}", spec_id);
        ctx.run(async {
            self.api
                .delete_launch_spec(spec_id)
                .await
                .map_err(CloudError::vendor)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Result as ApiResult};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    /// Records requests and echoes them back with server-side fields filled in
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        last_cluster: Mutex<Option<Cluster>>,
        last_spec: Mutex<Option<LaunchSpec>>,
        fail_with_status: Option<u16>,
    }

    impl RecordingApi {
        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with_status {
                Some(status) => Err(ApiError::Response {
                    method: "GET".to_string(),
                    path: "/ocean/aws/k8s/cluster".to_string(),
                    status,
                    code: "UNAUTHORIZED".to_string(),
                    message: "invalid token".to_string(),
                }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn server_cluster(id: &str, name: &str) -> Cluster {
        Cluster {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            region: Some("us-west-2".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap()),
            ..Default::default()
        }
    }

    #[async_trait]
    impl OceanAwsApi for RecordingApi {
        async fn list_clusters(&self) -> ApiResult<Vec<Cluster>> {
            self.record("list_clusters".to_string())?;
            Ok(vec![server_cluster("o-1", "a"), server_cluster("o-2", "b")])
        }

        async fn read_cluster(&self, cluster_id: &str) -> ApiResult<Cluster> {
            self.record(format!("read_cluster {cluster_id}"))?;
            Ok(server_cluster(cluster_id, "read"))
        }

        async fn create_cluster(&self, cluster: &Cluster) -> ApiResult<Cluster> {
            self.record("create_cluster".to_string())?;
            *self.last_cluster.lock().unwrap() = Some(cluster.clone());
            let mut created = server_cluster("o-new", "");
            created.name = cluster.name.clone();
            Ok(created)
        }

        async fn update_cluster(&self, cluster_id: &str, cluster: &Cluster) -> ApiResult<Cluster> {
            self.record(format!("update_cluster {cluster_id}"))?;
            *self.last_cluster.lock().unwrap() = Some(cluster.clone());
            Ok(server_cluster(cluster_id, "updated"))
        }

        async fn delete_cluster(&self, cluster_id: &str) -> ApiResult<()> {
            self.record(format!("delete_cluster {cluster_id}"))
        }

        async fn list_launch_specs(&self) -> ApiResult<Vec<LaunchSpec>> {
            self.record("list_launch_specs".to_string())?;
            Ok(Vec::new())
        }

        async fn read_launch_spec(&self, spec_id: &str) -> ApiResult<LaunchSpec> {
            self.record(format!("read_launch_spec {spec_id}"))?;
            Ok(LaunchSpec {
                id: Some(spec_id.to_string()),
                ..Default::default()
            })
        }

        async fn create_launch_spec(&self, spec: &LaunchSpec) -> ApiResult<LaunchSpec> {
            self.record("create_launch_spec".to_string())?;
            *self.last_spec.lock().unwrap() = Some(spec.clone());
            let mut created = spec.clone();
            created.id = Some("ols-new".to_string());
            Ok(created)
        }

        async fn update_launch_spec(&self, spec_id: &str, spec: &LaunchSpec) -> ApiResult<LaunchSpec> {
            self.record(format!("update_launch_spec {spec_id}"))?;
            *self.last_spec.lock().unwrap() = Some(spec.clone());
            let mut updated = spec.clone();
            updated.id = Some(spec_id.to_string());
            Ok(updated)
        }

        async fn delete_launch_spec(&self, spec_id: &str) -> ApiResult<()> {
            self.record(format!("delete_launch_spec {spec_id}"))
        }
    }

    fn backend() -> (Arc<RecordingApi>, OceanKubernetesAws) {
        let api = Arc::new(RecordingApi::default());
        (api.clone(), OceanKubernetesAws::new(api))
    }

    #[tokio::test]
    async fn test_list_maps_identity_verbatim() {
        let (_, backend) = backend();
        let clusters = backend.list_clusters(&Context::new()).await.unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].kind(), "Cluster");
        assert_eq!(clusters[0].id(), "o-1");
        assert_eq!(clusters[1].name(), "b");
        assert_eq!(
            clusters[0].created_at(),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[tokio::test]
    async fn test_create_sends_payload_untouched() {
        let (api, backend) = backend();
        let cluster = OceanCluster::new(ClusterPayload::Aws(Cluster {
            name: Some("foo".to_string()),
            region: Some("us-east-1".to_string()),
            ..Default::default()
        }));

        let created = backend
            .create_cluster(&Context::new(), &cluster)
            .await
            .unwrap();
        assert_eq!(created.id(), "o-new");
        assert_eq!(created.name(), "foo");

        let sent = api.last_cluster.lock().unwrap().clone().unwrap();
        assert_eq!(sent.region.as_deref(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn test_update_cluster_strips_read_only_fields() {
        let (api, backend) = backend();
        let mut payload = server_cluster("o-1", "prod");
        payload.capacity = Some(Default::default());
        let cluster = OceanCluster::new(ClusterPayload::Aws(payload)).with_id("o-1");

        let updated = backend
            .update_cluster(&Context::new(), &cluster)
            .await
            .unwrap();
        assert_eq!(updated.id(), "o-1");

        let sent = api.last_cluster.lock().unwrap().clone().unwrap();
        assert!(sent.region.is_none());
        assert!(sent.created_at.is_none());
        assert!(sent.updated_at.is_none());
        assert!(sent.capacity.is_some());
        assert_eq!(api.calls(), vec!["update_cluster o-1".to_string()]);

        // Caller's envelope is left alone
        match cluster.payload() {
            ClusterPayload::Aws(c) => assert!(c.region.is_some()),
            ClusterPayload::Unspecified => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_update_launch_spec_strips_timestamps() {
        let (api, backend) = backend();
        let spec = OceanLaunchSpec::new(LaunchSpecPayload::Aws(LaunchSpec {
            id: Some("ols-1".to_string()),
            image_id: Some("ami-123".to_string()),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            ..Default::default()
        }));

        backend
            .update_launch_spec(&Context::new(), &spec)
            .await
            .unwrap();

        let sent = api.last_spec.lock().unwrap().clone().unwrap();
        assert!(sent.created_at.is_none());
        assert!(sent.updated_at.is_none());
        assert_eq!(sent.image_id.as_deref(), Some("ami-123"));
        assert_eq!(api.calls(), vec!["update_launch_spec ols-1".to_string()]);
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let (api, backend) = backend();
        let cluster = OceanCluster::new(ClusterPayload::Aws(Cluster::default()));

        let err = backend
            .update_cluster(&Context::new(), &cluster)
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::MissingId(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unspecified_payload_is_a_mismatch() {
        let (api, backend) = backend();
        let cluster = OceanCluster::new(ClusterPayload::Unspecified);

        let err = backend
            .create_cluster(&Context::new(), &cluster)
            .await
            .unwrap_err();
        match err {
            CloudError::PayloadMismatch {
                backend, kind, found,
            } => {
                assert_eq!(backend, "ocean-aws-kubernetes");
                assert_eq!(kind, "Cluster");
                assert_eq!(found, "unspecified");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_vendor_error_passes_through() {
        let api = Arc::new(RecordingApi {
            fail_with_status: Some(401),
            ..Default::default()
        });
        let backend = OceanKubernetesAws::new(api);

        let err = backend.list_clusters(&Context::new()).await.unwrap_err();
        assert!(matches!(err, CloudError::Vendor(_)));
        assert_eq!(
            err.to_string(),
            "GET /ocean/aws/k8s/cluster: 401 UNAUTHORIZED: invalid token"
        );
    }

    #[tokio::test]
    async fn test_cancelled_context_skips_vendor_call() {
        let (api, backend) = backend();
        let ctx = Context::new();
        ctx.cancel();

        let err = backend.delete_cluster(&ctx, "o-1").await.unwrap_err();
        assert!(err.is_cancellation());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let (api, backend) = backend();
        let err = backend
            .delete_launch_spec(&Context::new(), "")
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::MissingId("launch spec id")));
        assert!(api.calls().is_empty());

        backend
            .delete_launch_spec(&Context::new(), "ols-9")
            .await
            .unwrap();
        assert_eq!(api.calls(), vec!["delete_launch_spec ols-9".to_string()]);
    }
}
