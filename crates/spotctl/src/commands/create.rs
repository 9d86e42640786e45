use super::{CommandEnv, ask_if_empty};
use crate::builder::PayloadBuilder;
use crate::error::Result;
use crate::options::{ClusterKubernetesOptions, LaunchSpecKubernetesOptions, Validate};
use crate::pipeline::Steps;
use async_trait::async_trait;
use spotctl_cloud::Context;

/// `spotctl create cluster kubernetes`
pub struct CreateClusterKubernetes {
    opts: ClusterKubernetesOptions,
    env: CommandEnv,
    builder: PayloadBuilder,
}

impl CreateClusterKubernetes {
    pub fn new(opts: ClusterKubernetesOptions, env: CommandEnv) -> Self {
        Self {
            opts,
            env,
            builder: PayloadBuilder::new(),
        }
    }

    pub fn options(&self) -> &ClusterKubernetesOptions {
        &self.opts
    }

    fn default_region(&self) -> Option<String> {
        let provider = self.opts.global().cloud_provider;
        match self.env.factory.new_cloud_provider(provider.as_str()) {
            Ok(cloud) => cloud.default_region(),
            Err(e) => {
                tracing::debug!("No cloud handle for {}: {}", provider, e);
                None
            }
        }
    }
}

#[async_trait]
impl Steps for CreateClusterKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        if !self.opts.global().interactive() {
            return Ok(());
        }

        let mut prompter = self.env.factory.new_prompter();
        ask_if_empty(
            prompter.as_mut(),
            &mut self.opts.cluster_mut().name,
            "Cluster name",
            None,
        )?;

        if self.opts.region.is_empty() {
            let default = self.default_region();
            ask_if_empty(
                prompter.as_mut(),
                &mut self.opts.region,
                "Region",
                default.as_deref(),
            )?;
        }

        Ok(())
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "create cluster kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let cluster = self.builder.cluster(&self.opts);

        let created = ocean.create_cluster(ctx, &cluster).await?;
        tracing::info!("Created Ocean cluster {}", created.id());

        self.env.print_id(created.id())
    }
}

/// `spotctl create launchspec kubernetes`
pub struct CreateLaunchSpecKubernetes {
    opts: LaunchSpecKubernetesOptions,
    env: CommandEnv,
    builder: PayloadBuilder,
}

impl CreateLaunchSpecKubernetes {
    pub fn new(opts: LaunchSpecKubernetesOptions, env: CommandEnv) -> Self {
        Self {
            opts,
            env,
            builder: PayloadBuilder::new(),
        }
    }

    pub fn options(&self) -> &LaunchSpecKubernetesOptions {
        &self.opts
    }
}

#[async_trait]
impl Steps for CreateLaunchSpecKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        if !self.opts.global().interactive() {
            return Ok(());
        }

        let mut prompter = self.env.factory.new_prompter();
        ask_if_empty(
            prompter.as_mut(),
            &mut self.opts.launch_spec_mut().name,
            "Launch spec name",
            None,
        )?;
        ask_if_empty(
            prompter.as_mut(),
            &mut self.opts.ocean_id,
            "Ocean cluster ID",
            None,
        )?;

        Ok(())
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "create launchspec kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let ocean = self.env.ocean(self.opts.global())?;
        let spec = self.builder.launch_spec(&self.opts);

        let created = ocean.create_launch_spec(ctx, &spec).await?;
        tracing::info!("Created Ocean launch spec {}", created.id());

        self.env.print_id(created.id())
    }
}
