//! Third-party helper CLIs (kubectl, aws)
//!
//! Helpers run as child processes; their output is copied to the
//! invocation's streams once they exit.

use crate::error::{CliError, Result};
use crate::streams::Streams;
use spotctl_cloud::{CloudError, Context};
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::str::FromStr;
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Kubectl,
    Aws,
}

impl CommandName {
    pub const ALL: [CommandName; 2] = [CommandName::Kubectl, CommandName::Aws];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Kubectl => "kubectl",
            CommandName::Aws => "aws",
        }
    }

    /// Arguments that print the helper's version without side effects
    pub fn version_args(&self) -> &'static [&'static str] {
        match self {
            CommandName::Kubectl => &["version", "--client"],
            CommandName::Aws => &["--version"],
        }
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| CliError::UnknownCommand(s.to_string()))
    }
}

/// A helper CLI wired to the invocation's streams
#[derive(Clone)]
pub struct HelperCommand {
    name: CommandName,
    program: String,
    streams: Streams,
}

impl HelperCommand {
    pub fn new(name: CommandName, streams: Streams) -> Self {
        Self {
            name,
            program: name.as_str().to_string(),
            streams,
        }
    }

    /// Run a different binary under this helper's name
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn name(&self) -> CommandName {
        self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Find the helper binary on PATH
    pub fn locate(&self) -> Option<PathBuf> {
        let candidate = PathBuf::from(&self.program);
        if candidate.components().count() > 1 {
            return candidate.is_file().then_some(candidate);
        }

        let paths = std::env::var_os("PATH")?;
        std::env::split_paths(&paths)
            .map(|dir| dir.join(&self.program))
            .find(|path| path.is_file())
    }

    /// Run the helper to completion, then copy its output to the invocation streams
    pub async fn run(&self, ctx: &Context, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!("Running: {} {}", self.program, args.join(" "));

        let output = ctx
            .run(async { Ok::<_, CloudError>(cmd.output().await) })
            .await??;

        let mut out = self.streams.out.clone();
        out.write_all(&output.stdout)?;
        let mut err = self.streams.err.clone();
        err.write_all(&output.stderr)?;

        if !output.status.success() {
            return Err(CliError::CommandFailed {
                name: self.name.to_string(),
                status: output.status.to_string(),
            });
        }

        Ok(())
    }
}

/// Look up a helper by name
pub fn get_instance(name: &str, streams: Streams) -> Result<HelperCommand> {
    let name = CommandName::from_str(name)?;
    Ok(HelperCommand::new(name, streams))
}
