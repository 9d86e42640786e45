use super::CommandEnv;
use crate::error::Result;
use crate::options::GlobalOptions;
use crate::pipeline::Steps;
use async_trait::async_trait;
use spotctl_cloud::Context;
use std::io::Write;
use std::sync::Arc;

pub struct Version {
    global: Arc<GlobalOptions>,
    env: CommandEnv,
}

impl Version {
    pub fn new(global: Arc<GlobalOptions>, env: CommandEnv) -> Self {
        Self { global, env }
    }
}

#[async_trait]
impl Steps for Version {
    async fn survey(&mut self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    fn log(&self) {
        self.env.log.set_verbosity(self.global.verbosity);
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    async fn run(&mut self, _ctx: &Context) -> Result<()> {
        let mut out = self.env.factory.out();
        writeln!(out, "spotctl {}", env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }
}
