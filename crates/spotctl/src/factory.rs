//! Client factory
//!
//! Builds the external collaborators a command needs, on demand and bound
//! to the invocation's streams. Nothing is cached between calls.

use crate::cloud::{self, Cloud};
use crate::dep::DependencyChecker;
use crate::error::Result;
use crate::spotinst::{ClientOption, SpotClient};
use crate::streams::{OutputStream, Streams};
use crate::survey::{Prompter, StreamPrompter};
use crate::thirdparty::{self, HelperCommand};
use crate::writer::{self, Writer};
use spotctl_config::CredentialsSource;

pub trait ClientFactory: Send + Sync {
    /// Locate the credentials the API client would use, without building it
    fn credentials(&self, profile: Option<&str>) -> Result<CredentialsSource>;

    fn new_api_client(&self, options: Vec<ClientOption>) -> Result<SpotClient>;

    fn new_cloud_provider(&self, name: &str) -> Result<Box<dyn Cloud>>;

    fn new_helper_command(&self, name: &str) -> Result<HelperCommand>;

    fn new_prompter(&self) -> Box<dyn Prompter>;

    fn new_dependency_checker(&self) -> DependencyChecker;

    fn new_writer(&self, format: &str) -> Result<Box<dyn Writer>>;

    /// Stream command results are printed to
    fn out(&self) -> OutputStream;
}

/// Factory for real processes
pub struct DefaultFactory {
    streams: Streams,
}

impl DefaultFactory {
    pub fn new(streams: Streams) -> Self {
        Self { streams }
    }
}

impl ClientFactory for DefaultFactory {
    fn credentials(&self, profile: Option<&str>) -> Result<CredentialsSource> {
        let (_, source) = spotctl_config::load_credentials(profile)?;
        Ok(source)
    }

    fn new_api_client(&self, options: Vec<ClientOption>) -> Result<SpotClient> {
        tracing::debug!("Instantiating new Spot API client");
        SpotClient::new(options)
    }

    fn new_cloud_provider(&self, name: &str) -> Result<Box<dyn Cloud>> {
        tracing::debug!("Instantiating new cloud provider ({})", name);
        cloud::get_instance(name)
    }

    fn new_helper_command(&self, name: &str) -> Result<HelperCommand> {
        tracing::debug!("Instantiating new helper command ({})", name);
        thirdparty::get_instance(name, self.streams.clone())
    }

    fn new_prompter(&self) -> Box<dyn Prompter> {
        tracing::debug!("Instantiating new prompter");
        Box::new(StreamPrompter::new(
            self.streams.input.clone(),
            self.streams.err.clone(),
        ))
    }

    fn new_dependency_checker(&self) -> DependencyChecker {
        tracing::debug!("Instantiating new dependency checker");
        DependencyChecker::new(self.new_prompter())
    }

    fn new_writer(&self, format: &str) -> Result<Box<dyn Writer>> {
        tracing::debug!("Instantiating new writer ({})", format);
        writer::get_instance(format, self.streams.out.clone())
    }

    fn out(&self) -> OutputStream {
        self.streams.out.clone()
    }
}
