use super::{CommandEnv, ask_if_empty};
use crate::error::Result;
use crate::options::{ClusterKubernetesOptions, LaunchSpecKubernetesOptions, Validate};
use crate::pipeline::Steps;
use async_trait::async_trait;
use spotctl_cloud::Context;

/// `spotctl delete cluster kubernetes --cluster-id ID`
///
/// Prints nothing on success.
pub struct DeleteClusterKubernetes {
    opts: ClusterKubernetesOptions,
    env: CommandEnv,
}

impl DeleteClusterKubernetes {
    pub fn new(opts: ClusterKubernetesOptions, env: CommandEnv) -> Self {
        Self { opts, env }
    }
}

#[async_trait]
impl Steps for DeleteClusterKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        if !self.opts.global().interactive() {
            return Ok(());
        }

        let mut prompter = self.env.factory.new_prompter();
        ask_if_empty(
            prompter.as_mut(),
            &mut self.opts.cluster_mut().cluster_id,
            "Cluster ID",
            None,
        )
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "delete cluster kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let id = &self.opts.cluster().cluster_id;

        ocean.delete_cluster(ctx, id).await?;
        tracing::info!("Deleted Ocean cluster {}", id);
        Ok(())
    }
}

/// `spotctl delete launchspec kubernetes --spec-id ID`
pub struct DeleteLaunchSpecKubernetes {
    opts: LaunchSpecKubernetesOptions,
    env: CommandEnv,
}

impl DeleteLaunchSpecKubernetes {
    pub fn new(opts: LaunchSpecKubernetesOptions, env: CommandEnv) -> Self {
        Self { opts, env }
    }
}

#[async_trait]
impl Steps for DeleteLaunchSpecKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        if !self.opts.global().interactive() {
            return Ok(());
        }

        let mut prompter = self.env.factory.new_prompter();
        ask_if_empty(
            prompter.as_mut(),
            &mut self.opts.launch_spec_mut().spec_id,
            "Launch spec ID",
            None,
        )
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "delete launchspec kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let id = &self.opts.launch_spec().spec_id;

        ocean.delete_launch_spec(ctx, id).await?;
        tracing::info!("Deleted Ocean launch spec {}", id);
        Ok(())
    }
}
