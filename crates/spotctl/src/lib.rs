//! spotctl: manage Ocean clusters and launch specs from the command line
//!
//! The binary parses flags into an options chain, then every command runs
//! through [`pipeline::run`] with collaborators built by a
//! [`factory::ClientFactory`].

pub mod builder;
pub mod cli;
pub mod cloud;
pub mod commands;
pub mod dep;
pub mod error;
pub mod factory;
pub mod logging;
pub mod options;
pub mod pipeline;
pub mod spotinst;
pub mod streams;
pub mod survey;
pub mod thirdparty;
pub mod writer;

pub use cli::Cli;
pub use commands::{CommandEnv, execute};
pub use error::{CliError, Result, ValidationError};
pub use factory::{ClientFactory, DefaultFactory};
pub use streams::Streams;
