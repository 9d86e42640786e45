//! Layered command options
//!
//! Every command builds a chain of option layers once per invocation:
//!
//! ```text
//! GlobalOptions  <-  ClusterOptions     <-  ClusterKubernetesOptions
//!                <-  LaunchSpecOptions  <-  LaunchSpecKubernetesOptions
//! ```
//!
//! Each layer owns a disjoint set of flags and an explicit `Arc` to its
//! parent. [`Validate::validate`] always runs the parent's checks first, so
//! the first failing check in the chain is the one reported.

mod cluster;
mod global;
mod launchspec;

pub use cluster::{ClusterKubernetesOptions, ClusterOptions};
pub use global::{DEFAULT_OUTPUT, GlobalOptions};
pub use launchspec::{LaunchSpecKubernetesOptions, LaunchSpecOptions};

use crate::error::ValidationError;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// The verb a command performs, which decides the required identity flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    Create,
    Get,
    Update,
    Delete,
}

impl Action {
    /// Update and delete address an existing resource
    pub fn requires_id(&self) -> bool {
        matches!(self, Action::Update | Action::Delete)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Create => "create",
            Action::Get => "get",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(s)
    }
}
