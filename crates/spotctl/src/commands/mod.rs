//! Command implementations
//!
//! Each command is a [`Steps`] implementation over its options chain; the
//! dispatcher builds the chain from the parsed CLI and hands the command to
//! the shared pipeline runner.

mod create;
mod delete;
mod doctor;
mod get;
mod update;
mod version;

pub use create::{CreateClusterKubernetes, CreateLaunchSpecKubernetes};
pub use delete::{DeleteClusterKubernetes, DeleteLaunchSpecKubernetes};
pub use doctor::Doctor;
pub use get::{GetClusterKubernetes, GetLaunchSpecKubernetes};
pub use update::{UpdateClusterKubernetes, UpdateLaunchSpecKubernetes};
pub use version::Version;

use crate::cli::{
    self, Cli, Commands, CreateCluster, CreateLaunchSpec, CreateResource, DeleteCluster,
    DeleteLaunchSpec, DeleteResource, GetCluster, GetLaunchSpec, GetResource, UpdateCluster,
    UpdateLaunchSpec, UpdateResource,
};
use crate::error::Result;
use crate::factory::ClientFactory;
use crate::logging::LogHandle;
use crate::options::{Action, GlobalOptions};
use crate::pipeline::{self, Steps};
use crate::spotinst::ClientOption;
use crate::survey::Prompter;
use spotctl_cloud::{Context, OceanBackend, Orchestrator};
use std::io::Write;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Collaborators every command receives
#[derive(Clone)]
pub struct CommandEnv {
    pub factory: Arc<dyn ClientFactory>,
    pub log: LogHandle,
}

impl CommandEnv {
    pub fn new(factory: Arc<dyn ClientFactory>, log: LogHandle) -> Self {
        Self { factory, log }
    }

    /// Resolve the Kubernetes backend for the selected cloud provider
    pub(crate) fn ocean(&self, global: &GlobalOptions) -> Result<Arc<dyn OceanBackend>> {
        let client = self.factory.new_api_client(client_options(global))?;
        let ocean = client
            .services()
            .ocean(global.cloud_provider, Orchestrator::Kubernetes)?;
        Ok(ocean)
    }

    pub(crate) fn print_id(&self, id: &str) -> Result<()> {
        let mut out = self.factory.out();
        writeln!(out, "{}", id)?;
        Ok(())
    }

    pub(crate) fn log_options(
        &self,
        global: &GlobalOptions,
        command: &str,
        options: &dyn std::fmt::Debug,
    ) {
        self.log.set_verbosity(global.verbosity);
        tracing::debug!("{} options: {:?}", command, options);
    }
}

pub(crate) fn client_options(global: &GlobalOptions) -> Vec<ClientOption> {
    global
        .profile
        .iter()
        .map(|p| ClientOption::CredentialsProfile(p.clone()))
        .collect()
}

/// Prompt for `value` when it is empty
pub(crate) fn ask_if_empty(
    prompter: &mut dyn Prompter,
    value: &mut String,
    message: &str,
    default: Option<&str>,
) -> Result<()> {
    if value.is_empty() {
        *value = prompter.input(message, default)?;
    }
    Ok(())
}

/// Build the command for a parsed invocation
pub fn command_for(cli: Cli, env: CommandEnv) -> Box<dyn Steps> {
    let global = Arc::new(cli.global.into_options());

    match cli.command {
        Commands::Create { resource } => match resource {
            CreateResource::Cluster {
                orchestrator: CreateCluster::Kubernetes(args),
            } => Box::new(CreateClusterKubernetes::new(
                cli::create_cluster_options(global, args),
                env,
            )),
            CreateResource::LaunchSpec {
                orchestrator: CreateLaunchSpec::Kubernetes(args),
            } => Box::new(CreateLaunchSpecKubernetes::new(
                cli::create_launch_spec_options(global, args),
                env,
            )),
        },
        Commands::Get { resource } => match resource {
            GetResource::Cluster {
                orchestrator: GetCluster::Kubernetes(args),
            } => Box::new(GetClusterKubernetes::new(
                cli::cluster_id_options(global, Action::Get, args),
                env,
            )),
            GetResource::LaunchSpec {
                orchestrator: GetLaunchSpec::Kubernetes(args),
            } => Box::new(GetLaunchSpecKubernetes::new(
                cli::spec_id_options(global, Action::Get, args),
                env,
            )),
        },
        Commands::Update { resource } => match resource {
            UpdateResource::Cluster {
                orchestrator: UpdateCluster::Kubernetes(args),
            } => Box::new(UpdateClusterKubernetes::new(
                cli::update_cluster_options(global, args),
                env,
            )),
            UpdateResource::LaunchSpec {
                orchestrator: UpdateLaunchSpec::Kubernetes(args),
            } => Box::new(UpdateLaunchSpecKubernetes::new(
                cli::update_launch_spec_options(global, args),
                env,
            )),
        },
        Commands::Delete { resource } => match resource {
            DeleteResource::Cluster {
                orchestrator: DeleteCluster::Kubernetes(args),
            } => Box::new(DeleteClusterKubernetes::new(
                cli::cluster_id_options(global, Action::Delete, args),
                env,
            )),
            DeleteResource::LaunchSpec {
                orchestrator: DeleteLaunchSpec::Kubernetes(args),
            } => Box::new(DeleteLaunchSpecKubernetes::new(
                cli::spec_id_options(global, Action::Delete, args),
                env,
            )),
        },
        Commands::Doctor => Box::new(Doctor::new(global, env)),
        Commands::Version => Box::new(Version::new(global, env)),
    }
}

/// Run a parsed invocation to completion
///
/// `token` is the root cancellation token; cancelling it aborts the
/// in-flight API call.
pub async fn execute(cli: Cli, env: CommandEnv, token: CancellationToken) -> Result<()> {
    let timeout = cli.global.clone().into_options().timeout();
    let ctx = Context::with_token(token);

    let mut command = command_for(cli, env);
    pipeline::run(command.as_mut(), &ctx, timeout).await
}
