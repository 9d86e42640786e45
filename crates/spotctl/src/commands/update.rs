use super::{CommandEnv, ask_if_empty};
use crate::builder::PayloadBuilder;
use crate::error::Result;
use crate::options::{ClusterKubernetesOptions, LaunchSpecKubernetesOptions, Validate};
use crate::pipeline::Steps;
use async_trait::async_trait;
use spotctl_cloud::Context;

/// `spotctl update cluster kubernetes --cluster-id ID`
pub struct UpdateClusterKubernetes {
    opts: ClusterKubernetesOptions,
    env: CommandEnv,
    builder: PayloadBuilder,
}

impl UpdateClusterKubernetes {
    pub fn new(opts: ClusterKubernetesOptions, env: CommandEnv) -> Self {
        Self {
            opts,
            env,
            builder: PayloadBuilder::new(),
        }
    }
}

#[async_trait]
impl Steps for UpdateClusterKubernetes {
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
            .log_options(self.opts.global(), "update cluster kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let cluster = self.builder.cluster(&self.opts);

        let updated = ocean.update_cluster(ctx, &cluster).await?;
        tracing::info!("Updated Ocean cluster {}", updated.id());

        self.env.print_id(updated.id())
    }
}

/// `spotctl update launchspec kubernetes --spec-id ID`
pub struct UpdateLaunchSpecKubernetes {
    opts: LaunchSpecKubernetesOptions,
    env: CommandEnv,
    builder: PayloadBuilder,
}

impl UpdateLaunchSpecKubernetes {
    pub fn new(opts: LaunchSpecKubernetesOptions, env: CommandEnv) -> Self {
        Self {
            opts,
            env,
            builder: PayloadBuilder::new(),
        }
    }
}

#[async_trait]
impl Steps for UpdateLaunchSpecKubernetes {
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
            .log_options(self.opts.global(), "update launchspec kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let spec = self.builder.launch_spec(&self.opts);

        let updated = ocean.update_launch_spec(ctx, &spec).await?;
        tracing::info!("Updated Ocean launch spec {}", updated.id());

        self.env.print_id(updated.id())
    }
}
