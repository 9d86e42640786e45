use super::CommandEnv;
use crate::error::Result;
use crate::options::{ClusterKubernetesOptions, LaunchSpecKubernetesOptions, Validate};
use crate::pipeline::Steps;
use crate::writer::{Output, Record};
use async_trait::async_trait;
use spotctl_cloud::Context;

/// `spotctl get cluster kubernetes [--cluster-id ID]`
pub struct GetClusterKubernetes {
    opts: ClusterKubernetesOptions,
    env: CommandEnv,
}

impl GetClusterKubernetes {
    pub fn new(opts: ClusterKubernetesOptions, env: CommandEnv) -> Self {
        Self { opts, env }
    }
}

#[async_trait]
impl Steps for GetClusterKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "get cluster kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        // Resolve the writer first so a bad --output fails before any API call.
        let mut writer = self.env.factory.new_writer(&self.opts.global().output)?;
        let ocean = self.env.ocean(self.opts.global())?;

        let output = match self.opts.cluster().cluster_id.as_str() {
            "" => {
                let clusters = ocean.list_clusters(ctx).await?;
                let records = clusters
                    .iter()
                    .map(Record::from_envelope)
                    .collect::<Result<Vec<_>>>()?;
                Output::List(records)
            }
            id => Output::Single(Record::from_envelope(&ocean.get_cluster(ctx, id).await?)?),
        };

        writer.write(&output)
    }
}

/// `spotctl get launchspec kubernetes [--spec-id ID]`
pub struct GetLaunchSpecKubernetes {
    opts: LaunchSpecKubernetesOptions,
    env: CommandEnv,
}

impl GetLaunchSpecKubernetes {
    pub fn new(opts: LaunchSpecKubernetesOptions, env: CommandEnv) -> Self {
        Self { opts, env }
    }
}

#[async_trait]
impl Steps for GetLaunchSpecKubernetes {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    fn log(&self) {
        self.env
            .log_options(self.opts.global(), "get launchspec kubernetes", &self.opts);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.opts.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let mut writer = self.env.factory.new_writer(&self.opts.global().output)?;
        let ocean = self.env.ocean(self.opts.global())?;

        let output = match self.opts.launch_spec().spec_id.as_str() {
            "" => {
                let specs = ocean.list_launch_specs(ctx).await?;
                let records = specs
                    .iter()
                    .map(Record::from_envelope)
                    .collect::<Result<Vec<_>>>()?;
                Output::List(records)
            }
            id => Output::Single(Record::from_envelope(
                &ocean.get_launch_spec(ctx, id).await?,
            )?),
        };

        writer.write(&output)
    }
}
