//! Helper dependency checks

use crate::error::{CliError, Result};
use crate::survey::Prompter;
use crate::thirdparty::HelperCommand;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    Found(PathBuf),
    Missing,
}

impl DependencyStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, DependencyStatus::Found(_))
    }
}

pub struct DependencyChecker {
    prompter: Box<dyn Prompter>,
}

impl DependencyChecker {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    pub fn check(&self, command: &HelperCommand) -> DependencyStatus {
        match command.locate() {
            Some(path) => DependencyStatus::Found(path),
            None => DependencyStatus::Missing,
        }
    }

    /// Fail on missing helpers unless the user agrees to continue without them
    pub fn ensure(&mut self, commands: &[HelperCommand], interactive: bool) -> Result<()> {
        let missing: Vec<String> = commands
            .iter()
            .filter(|c| !self.check(c).is_found())
            .map(|c| c.name().to_string())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let missing = missing.join(", ");
        tracing::debug!("Missing helper commands: {}", missing);

        if interactive
            && self
                .prompter
                .confirm(&format!("{} not found on PATH. Continue anyway?", missing), false)?
        {
            return Ok(());
        }

        Err(CliError::MissingDependency(missing))
    }
}
