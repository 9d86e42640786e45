//! Ocean abstraction error types

use crate::name::{CloudProviderName, Orchestrator};
use thiserror::Error;

/// Errors raised by the provider-neutral layer and the backends behind it
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("unknown cloud provider: {0}")]
    UnknownProvider(String),

    #[error("unknown orchestrator: {0}")]
    UnknownOrchestrator(String),

    #[error("unsupported combination: cloud provider {provider} with orchestrator {orchestrator}")]
    Unsupported {
        provider: CloudProviderName,
        orchestrator: Orchestrator,
    },

    /// A payload reached a backend that cannot handle its provider variant.
    /// This is a programming error in the caller, not a user mistake.
    #[error("internal error: {backend} backend received a {kind} payload for {found}")]
    PayloadMismatch {
        backend: &'static str,
        kind: &'static str,
        found: String,
    },

    #[error("{0} is required to address the resource")]
    MissingId(&'static str),

    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Failure reported by the vendor API or its transport, passed through untouched.
    #[error(transparent)]
    Vendor(Box<dyn std::error::Error + Send + Sync>),
}

impl CloudError {
    pub fn vendor<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CloudError::Vendor(Box::new(error))
    }

    /// Whether the error was produced by cancelling the invocation context.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, CloudError::Cancelled | CloudError::DeadlineExceeded)
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("HTTP 401: invalid token")]
    struct FakeVendorError;

    #[test]
    fn test_vendor_error_is_transparent() {
        let err = CloudError::vendor(FakeVendorError);
        assert_eq!(err.to_string(), "HTTP 401: invalid token");
    }

    #[test]
    fn test_unsupported_message_names_both_sides() {
        let err = CloudError::Unsupported {
            provider: CloudProviderName::Gcp,
            orchestrator: Orchestrator::Ecs,
        };
        assert_eq!(
            err.to_string(),
            "unsupported combination: cloud provider gcp with orchestrator ecs"
        );
    }
}
