use super::{CommandEnv, client_options};
use crate::dep::DependencyStatus;
use crate::error::Result;
use crate::options::{GlobalOptions, Validate};
use crate::pipeline::Steps;
use crate::thirdparty::{CommandName, HelperCommand};
use async_trait::async_trait;
use colored::Colorize;
use spotctl_cloud::{Context, Orchestrator};
use std::io::Write;
use std::sync::Arc;

/// `spotctl doctor`
///
/// Reports credentials, the cloud handle, the registered backend and helper
/// binaries, then fails if a helper is missing and the user does not agree
/// to continue.
pub struct Doctor {
    global: Arc<GlobalOptions>,
    env: CommandEnv,
}

impl Doctor {
    pub fn new(global: Arc<GlobalOptions>, env: CommandEnv) -> Self {
        Self { global, env }
    }

    fn report_credentials(&self, out: &mut impl Write) -> Result<bool> {
        match self.env.factory.credentials(self.global.profile.as_deref()) {
            Ok(source) => {
                writeln!(out, "{} credentials ({})", "✓".green(), source)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(out, "{} credentials: {}", "✗".red().bold(), e)?;
                Ok(false)
            }
        }
    }

    fn report_cloud(&self, out: &mut impl Write) -> Result<()> {
        let provider = self.global.cloud_provider;
        match self.env.factory.new_cloud_provider(provider.as_str()) {
            Ok(cloud) => {
                let region = cloud
                    .default_region()
                    .unwrap_or_else(|| "not set".to_string());
                writeln!(
                    out,
                    "{} cloud provider {} (default region: {})",
                    "✓".green(),
                    cloud.name(),
                    region
                )?;
            }
            Err(e) => writeln!(out, "{} cloud provider: {}", "✗".red().bold(), e)?,
        }
        Ok(())
    }

    fn report_backend(&self, out: &mut impl Write) -> Result<()> {
        let provider = self.global.cloud_provider;
        let client = self.env.factory.new_api_client(client_options(&self.global))?;
        if client
            .services()
            .is_registered(provider, Orchestrator::Kubernetes)
        {
            writeln!(out, "{} ocean backend {}/kubernetes", "✓".green(), provider)?;
        } else {
            writeln!(
                out,
                "{} ocean backend: {}/kubernetes is not supported",
                "✗".red().bold(),
                provider
            )?;
        }
        Ok(())
    }
}

#[async_trait]
impl Steps for Doctor {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    fn log(&self) {
        self.env.log_options(&self.global, "doctor", &self.global);
    }

    fn validate(&self) -> Result<()> {
        Ok(self.global.validate()?)
    }

    async fn run(&mut self, ctx: &Context) -> Result<()> {
        let mut out = self.env.factory.out();

        if self.report_credentials(&mut out)? {
            self.report_backend(&mut out)?;
        }
        self.report_cloud(&mut out)?;

        let mut checker = self.env.factory.new_dependency_checker();
        let mut helpers: Vec<HelperCommand> = Vec::new();

        for name in CommandName::ALL {
            let helper = self.env.factory.new_helper_command(name.as_str())?;
            match checker.check(&helper) {
                DependencyStatus::Found(path) => {
                    writeln!(out, "{} {} ({})", "✓".green(), name, path.display())?;
                    if let Err(e) = helper.run(ctx, name.version_args()).await {
                        writeln!(out, "  {} {}", "warning:".yellow(), e)?;
                    }
                }
                DependencyStatus::Missing => {
                    writeln!(out, "{} {} not found on PATH", "✗".red().bold(), name)?;
                }
            }
            helpers.push(helper);
        }

        checker.ensure(&helpers, self.global.interactive())
    }
}
