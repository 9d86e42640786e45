use super::Validate;
use crate::error::ValidationError;
use spotctl_cloud::CloudProviderName;
use std::time::Duration;

pub const DEFAULT_OUTPUT: &str = "table";

/// Options shared by every command
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalOptions {
    pub cloud_provider: CloudProviderName,
    pub profile: Option<String>,
    pub noninteractive: bool,
    pub verbosity: u8,
    pub output: String,
    /// Per-invocation deadline in seconds
    pub timeout: Option<u64>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            cloud_provider: CloudProviderName::Aws,
            profile: None,
            noninteractive: false,
            verbosity: 0,
            output: DEFAULT_OUTPUT.to_string(),
            timeout: None,
        }
    }
}

impl GlobalOptions {
    pub fn interactive(&self) -> bool {
        !self.noninteractive
    }

    /// Configured API deadline, armed by the pipeline once the survey is done
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Validate for GlobalOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.output.trim().is_empty() {
            return Err(ValidationError::required("output"));
        }

        if self.timeout == Some(0) {
            return Err(ValidationError::invalid(
                "timeout",
                "must be greater than zero",
            ));
        }

        Ok(())
    }
}
