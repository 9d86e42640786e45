//! Four-stage command pipeline
//!
//! Every command runs survey, log setup, validation and execution in that
//! order. The first failing stage ends the run; nothing is retried. The
//! deadline starts after the survey, so prompts do not consume it.

use crate::error::Result;
use async_trait::async_trait;
use spotctl_cloud::Context;
use std::time::Duration;

#[async_trait]
pub trait Steps: Send {
    /// Fill missing options interactively; a no-op when non-interactive
    async fn survey(&mut self, ctx: &Context) -> Result<()>;

    /// Apply verbosity and record the resolved options
    fn log(&self);

    fn validate(&self) -> Result<()>;

    async fn run(&mut self, ctx: &Context) -> Result<()>;
}

pub async fn run<S>(steps: &mut S, ctx: &Context, timeout: Option<Duration>) -> Result<()>
where
    S: Steps + ?Sized,
{
    tracing::trace!("Pipeline stage: survey");
    steps.survey(ctx).await?;

    let ctx = match timeout {
        Some(timeout) => ctx.clone().with_timeout(timeout),
        None => ctx.clone(),
    };

    tracing::trace!("Pipeline stage: log");
    steps.log();

    tracing::trace!("Pipeline stage: validate");
    steps.validate()?;

    tracing::trace!("Pipeline stage: run");
    steps.run(&ctx).await
}
