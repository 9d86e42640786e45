//! Options to provider payload conversion
//!
//! Each resource kind has a decision table from provider to build function.
//! Build functions only copy options that were explicitly set: non-empty
//! strings and lists, non-zero numbers and `true` flags. A provider without
//! an entry yields the `Unspecified` payload.

use crate::options::{ClusterKubernetesOptions, LaunchSpecKubernetesOptions};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use spotctl_cloud::payload::aws;
use spotctl_cloud::{
    CloudProviderName, ClusterPayload, LaunchSpecPayload, OceanCluster, OceanLaunchSpec,
};
use std::collections::HashMap;

type ClusterBuildFn = fn(&ClusterKubernetesOptions) -> ClusterPayload;
type LaunchSpecBuildFn = fn(&LaunchSpecKubernetesOptions) -> LaunchSpecPayload;

pub struct PayloadBuilder {
    clusters: HashMap<CloudProviderName, ClusterBuildFn>,
    launch_specs: HashMap<CloudProviderName, LaunchSpecBuildFn>,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        let mut clusters: HashMap<CloudProviderName, ClusterBuildFn> = HashMap::new();
        clusters.insert(CloudProviderName::Aws, build_cluster_aws);

        let mut launch_specs: HashMap<CloudProviderName, LaunchSpecBuildFn> = HashMap::new();
        launch_specs.insert(CloudProviderName::Aws, build_launch_spec_aws);

        Self {
            clusters,
            launch_specs,
        }
    }
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelope for a create or update request, addressed by `--cluster-id` when given
    pub fn cluster(&self, opts: &ClusterKubernetesOptions) -> OceanCluster {
        let provider = opts.global().cloud_provider;
        let payload = match self.clusters.get(&provider) {
            Some(build) => build(opts),
            None => ClusterPayload::Unspecified,
        };

        let cluster = OceanCluster::new(payload);
        match opts.cluster().cluster_id.as_str() {
            "" => cluster,
            id => cluster.with_id(id),
        }
    }

    pub fn launch_spec(&self, opts: &LaunchSpecKubernetesOptions) -> OceanLaunchSpec {
        let provider = opts.global().cloud_provider;
        let payload = match self.launch_specs.get(&provider) {
            Some(build) => build(opts),
            None => LaunchSpecPayload::Unspecified,
        };

        let spec = OceanLaunchSpec::new(payload);
        match opts.launch_spec().spec_id.as_str() {
            "" => spec,
            id => spec.with_id(id),
        }
    }
}

/// Store user data base64-encoded exactly once
///
/// Input that already decodes as standard base64 is kept, with any line
/// wrapping (`base64` wraps at 76 columns) removed.
pub fn normalize_user_data(user_data: &str) -> String {
    let unwrapped: String = user_data
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    if STANDARD.decode(&unwrapped).is_ok() {
        return unwrapped;
    }
    STANDARD.encode(user_data)
}

fn string(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn number(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

fn list(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

/// `Some` only when at least one field of the block was set
fn block<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

fn build_cluster_aws(opts: &ClusterKubernetesOptions) -> ClusterPayload {
    let capacity = block(aws::Capacity {
        minimum: number(opts.min_size),
        maximum: number(opts.max_size),
        target: number(opts.target_size),
    });

    let strategy = block(aws::Strategy {
        spot_percentage: (opts.spot_percentage != 0.0).then_some(opts.spot_percentage),
        utilize_reserved_instances: flag(opts.utilize_reserved_instances),
        fallback_to_od: flag(opts.fallback_to_on_demand),
    });

    let instance_types = block(aws::InstanceTypes {
        whitelist: list(&opts.instance_types_whitelist),
        blacklist: list(&opts.instance_types_blacklist),
    });

    let launch_specification = block(aws::LaunchSpecification {
        security_group_ids: list(&opts.security_group_ids),
        image_id: string(&opts.image_id),
        key_pair: string(&opts.key_pair),
        user_data: string(&opts.user_data).map(|u| normalize_user_data(&u)),
        root_volume_size: number(opts.root_volume_size),
        associate_public_ip_address: flag(opts.associate_public_ip_address),
        monitoring: flag(opts.enable_monitoring),
        ebs_optimized: flag(opts.enable_ebs_optimization),
    });

    let compute = block(aws::Compute {
        subnet_ids: list(&opts.subnet_ids),
        instance_types,
        launch_specification,
    });

    let auto_scaler = block(aws::AutoScaler {
        is_enabled: flag(opts.enable_auto_scaler),
        is_auto_config: flag(opts.enable_auto_config),
        cooldown: number(opts.cooldown),
    });

    ClusterPayload::Aws(aws::Cluster {
        name: string(&opts.cluster().name),
        region: string(&opts.region),
        capacity,
        strategy,
        compute,
        auto_scaler,
        ..Default::default()
    })
}

fn build_launch_spec_aws(opts: &LaunchSpecKubernetesOptions) -> LaunchSpecPayload {
    LaunchSpecPayload::Aws(aws::LaunchSpec {
        name: string(&opts.launch_spec().name),
        ocean_id: string(&opts.ocean_id),
        image_id: string(&opts.image_id),
        user_data: string(&opts.user_data).map(|u| normalize_user_data(&u)),
        security_group_ids: list(&opts.security_group_ids),
        ..Default::default()
    })
}
