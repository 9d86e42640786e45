//! Command-line definition

use crate::options::{
    Action, ClusterKubernetesOptions, ClusterOptions, DEFAULT_OUTPUT, GlobalOptions,
    LaunchSpecKubernetesOptions, LaunchSpecOptions,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use spotctl_cloud::CloudProviderName;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "spotctl")]
#[command(version, about = "Manage Ocean clusters and launch specs on the Spot platform", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Cloud provider (aws, gcp, azure)
    #[arg(
        long,
        global = true,
        env = "SPOTINST_CLOUD_PROVIDER",
        default_value = "aws"
    )]
    pub cloud_provider: CloudProviderName,

    /// Credentials profile to use
    #[arg(long, global = true, env = "SPOTINST_PROFILE")]
    pub profile: Option<String>,

    /// Never prompt for missing values
    #[arg(long, global = true)]
    pub noninteractive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format (json, yaml, table)
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Abort API calls after this many seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl GlobalArgs {
    pub fn into_options(self) -> GlobalOptions {
        GlobalOptions {
            cloud_provider: self.cloud_provider,
            profile: self.profile.filter(|p| !p.is_empty()),
            noninteractive: self.noninteractive,
            verbosity: self.verbose,
            output: self.output,
            timeout: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a resource
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },
    /// Show one resource, or list all of them
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
    /// Update an existing resource
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },
    /// Delete a resource
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
    /// Check credentials and helper tools
    Doctor,
    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create an Ocean cluster
    Cluster {
        #[command(subcommand)]
        orchestrator: CreateCluster,
    },
    /// Create an Ocean launch spec
    #[command(name = "launchspec")]
    LaunchSpec {
        #[command(subcommand)]
        orchestrator: CreateLaunchSpec,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateCluster {
    /// Create a new Kubernetes cluster
    Kubernetes(CreateClusterKubernetesArgs),
}

#[derive(Subcommand, Debug)]
pub enum CreateLaunchSpec {
    /// Create a new Kubernetes launch spec
    Kubernetes(LaunchSpecSpecArgs),
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get Ocean clusters
    Cluster {
        #[command(subcommand)]
        orchestrator: GetCluster,
    },
    /// Get Ocean launch specs
    #[command(name = "launchspec")]
    LaunchSpec {
        #[command(subcommand)]
        orchestrator: GetLaunchSpec,
    },
}

#[derive(Subcommand, Debug)]
pub enum GetCluster {
    /// Get Kubernetes clusters
    Kubernetes(ClusterIdArgs),
}

#[derive(Subcommand, Debug)]
pub enum GetLaunchSpec {
    /// Get Kubernetes launch specs
    Kubernetes(SpecIdArgs),
}

#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update an Ocean cluster
    Cluster {
        #[command(subcommand)]
        orchestrator: UpdateCluster,
    },
    /// Update an Ocean launch spec
    #[command(name = "launchspec")]
    LaunchSpec {
        #[command(subcommand)]
        orchestrator: UpdateLaunchSpec,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateCluster {
    /// Update a Kubernetes cluster
    Kubernetes(UpdateClusterKubernetesArgs),
}

#[derive(Subcommand, Debug)]
pub enum UpdateLaunchSpec {
    /// Update a Kubernetes launch spec
    Kubernetes(UpdateLaunchSpecKubernetesArgs),
}

#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete an Ocean cluster
    Cluster {
        #[command(subcommand)]
        orchestrator: DeleteCluster,
    },
    /// Delete an Ocean launch spec
    #[command(name = "launchspec")]
    LaunchSpec {
        #[command(subcommand)]
        orchestrator: DeleteLaunchSpec,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeleteCluster {
    /// Delete a Kubernetes cluster
    Kubernetes(ClusterIdArgs),
}

#[derive(Subcommand, Debug)]
pub enum DeleteLaunchSpec {
    /// Delete a Kubernetes launch spec
    Kubernetes(SpecIdArgs),
}

// ============ Flag groups ============

#[derive(Args, Debug, Clone, Default)]
pub struct ClusterIdArgs {
    /// ID of the cluster
    #[arg(long)]
    pub cluster_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SpecIdArgs {
    /// ID of the launch spec
    #[arg(long)]
    pub spec_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateClusterKubernetesArgs {
    /// Name of the cluster
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub spec: ClusterSpecArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateClusterKubernetesArgs {
    /// ID of the cluster
    #[arg(long)]
    pub cluster_id: Option<String>,

    /// New name of the cluster
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub spec: ClusterSpecArgs,
}

/// Cluster configuration flags shared by create and update
#[derive(Args, Debug, Clone, Default)]
pub struct ClusterSpecArgs {
    /// Region of the cluster
    #[arg(long)]
    pub region: Option<String>,

    /// Percentage of spot instances (0-100)
    #[arg(long)]
    pub spot_percentage: Option<f64>,

    /// Use reserved instances when available
    #[arg(long)]
    pub utilize_reserved_instances: bool,

    /// Fall back to on-demand instances when spot capacity is unavailable
    #[arg(long = "fallback-ondemand")]
    pub fallback_ondemand: bool,

    /// Minimum number of nodes
    #[arg(long)]
    pub min_size: Option<u32>,

    /// Maximum number of nodes
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Desired number of nodes
    #[arg(long)]
    pub target_size: Option<u32>,

    /// Subnet IDs (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub subnet_ids: Vec<String>,

    /// Allowed instance types (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub instance_types_whitelist: Vec<String>,

    /// Forbidden instance types (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub instance_types_blacklist: Vec<String>,

    /// Security group IDs (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub security_group_ids: Vec<String>,

    /// Image ID for the nodes
    #[arg(long)]
    pub image_id: Option<String>,

    /// Key pair name
    #[arg(long)]
    pub key_pair: Option<String>,

    /// User data for the nodes (plain text or base64)
    #[arg(long)]
    pub user_data: Option<String>,

    /// Root volume size in GB
    #[arg(long)]
    pub root_volume_size: Option<u32>,

    /// Assign a public IP address to the nodes
    #[arg(long)]
    pub associate_public_ip_address: bool,

    /// Enable detailed monitoring
    #[arg(long)]
    pub enable_monitoring: bool,

    /// Enable EBS optimization
    #[arg(long = "enable-ebs-optimization")]
    pub enable_ebs_optimization: bool,

    /// Enable the auto scaler
    #[arg(long)]
    pub enable_auto_scaler: bool,

    /// Let the auto scaler configure headroom automatically
    #[arg(long = "enable-auto-scaler-autoconfig")]
    pub enable_auto_config: bool,

    /// Auto scaler cooldown in seconds
    #[arg(long)]
    pub cooldown: Option<u32>,
}

impl ClusterSpecArgs {
    fn apply(self, opts: &mut ClusterKubernetesOptions) {
        opts.region = self.region.unwrap_or_default();
        opts.spot_percentage = self.spot_percentage.unwrap_or_default();
        opts.utilize_reserved_instances = self.utilize_reserved_instances;
        opts.fallback_to_on_demand = self.fallback_ondemand;
        opts.min_size = self.min_size.unwrap_or_default();
        opts.max_size = self.max_size.unwrap_or_default();
        opts.target_size = self.target_size.unwrap_or_default();
        opts.subnet_ids = self.subnet_ids;
        opts.instance_types_whitelist = self.instance_types_whitelist;
        opts.instance_types_blacklist = self.instance_types_blacklist;
        opts.security_group_ids = self.security_group_ids;
        opts.image_id = self.image_id.unwrap_or_default();
        opts.key_pair = self.key_pair.unwrap_or_default();
        opts.user_data = self.user_data.unwrap_or_default();
        opts.root_volume_size = self.root_volume_size.unwrap_or_default();
        opts.associate_public_ip_address = self.associate_public_ip_address;
        opts.enable_monitoring = self.enable_monitoring;
        opts.enable_ebs_optimization = self.enable_ebs_optimization;
        opts.enable_auto_scaler = self.enable_auto_scaler;
        opts.enable_auto_config = self.enable_auto_config;
        opts.cooldown = self.cooldown.unwrap_or_default();
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateLaunchSpecKubernetesArgs {
    /// ID of the launch spec
    #[arg(long)]
    pub spec_id: Option<String>,

    #[command(flatten)]
    pub spec: LaunchSpecSpecArgs,
}

/// Launch spec configuration flags shared by create and update
#[derive(Args, Debug, Clone, Default)]
pub struct LaunchSpecSpecArgs {
    /// Name of the launch spec
    #[arg(long)]
    pub name: Option<String>,

    /// ID of the cluster
    #[arg(long)]
    pub ocean_id: Option<String>,

    /// ID of the image
    #[arg(long)]
    pub image_id: Option<String>,

    /// User data to provide when launching a node (plain text or base64)
    #[arg(long)]
    pub user_data: Option<String>,

    /// Security group IDs (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub security_group_ids: Vec<String>,
}

impl LaunchSpecSpecArgs {
    fn apply(self, opts: &mut LaunchSpecKubernetesOptions) {
        opts.launch_spec_mut().name = self.name.unwrap_or_default();
        opts.ocean_id = self.ocean_id.unwrap_or_default();
        opts.image_id = self.image_id.unwrap_or_default();
        opts.user_data = self.user_data.unwrap_or_default();
        opts.security_group_ids = self.security_group_ids;
    }
}

// ============ Options chain construction ============

pub fn create_cluster_options(
    global: Arc<GlobalOptions>,
    args: CreateClusterKubernetesArgs,
) -> ClusterKubernetesOptions {
    let mut cluster = ClusterOptions::new(global, Action::Create);
    cluster.name = args.name.unwrap_or_default();

    let mut opts = ClusterKubernetesOptions::new(cluster);
    args.spec.apply(&mut opts);
    opts
}

pub fn update_cluster_options(
    global: Arc<GlobalOptions>,
    args: UpdateClusterKubernetesArgs,
) -> ClusterKubernetesOptions {
    let mut cluster = ClusterOptions::new(global, Action::Update);
    cluster.cluster_id = args.cluster_id.unwrap_or_default();
    cluster.name = args.name.unwrap_or_default();

    let mut opts = ClusterKubernetesOptions::new(cluster);
    args.spec.apply(&mut opts);
    opts
}

pub fn cluster_id_options(
    global: Arc<GlobalOptions>,
    action: Action,
    args: ClusterIdArgs,
) -> ClusterKubernetesOptions {
    let mut cluster = ClusterOptions::new(global, action);
    cluster.cluster_id = args.cluster_id.unwrap_or_default();
    ClusterKubernetesOptions::new(cluster)
}

pub fn create_launch_spec_options(
    global: Arc<GlobalOptions>,
    args: LaunchSpecSpecArgs,
) -> LaunchSpecKubernetesOptions {
    let mut opts =
        LaunchSpecKubernetesOptions::new(LaunchSpecOptions::new(global, Action::Create));
    args.apply(&mut opts);
    opts
}

pub fn update_launch_spec_options(
    global: Arc<GlobalOptions>,
    args: UpdateLaunchSpecKubernetesArgs,
) -> LaunchSpecKubernetesOptions {
    let mut spec = LaunchSpecOptions::new(global, Action::Update);
    spec.spec_id = args.spec_id.unwrap_or_default();

    let mut opts = LaunchSpecKubernetesOptions::new(spec);
    args.spec.apply(&mut opts);
    opts
}

pub fn spec_id_options(
    global: Arc<GlobalOptions>,
    action: Action,
    args: SpecIdArgs,
) -> LaunchSpecKubernetesOptions {
    let mut spec = LaunchSpecOptions::new(global, action);
    spec.spec_id = args.spec_id.unwrap_or_default();
    LaunchSpecKubernetesOptions::new(spec)
}
