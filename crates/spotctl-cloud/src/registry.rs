//! Service registry resolving `(cloud provider, orchestrator)` to a backend

use crate::backend::OceanBackend;
use crate::error::{CloudError, Result};
use crate::name::{CloudProviderName, Orchestrator};
use std::collections::HashMap;
use std::sync::Arc;

/// Explicit map of registered Ocean backends.
///
/// Lookups are pure: no connection is opened until a backend method runs.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    backends: HashMap<(CloudProviderName, Orchestrator), Arc<dyn OceanBackend>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend, returning the one it replaced if any
    pub fn register(
        &mut self,
        provider: CloudProviderName,
        orchestrator: Orchestrator,
        backend: Arc<dyn OceanBackend>,
    ) -> Option<Arc<dyn OceanBackend>> {
        tracing::debug!(
            "Registering {} backend for ({}, {})",
            backend.name(),
            provider,
            orchestrator
        );
        self.backends.insert((provider, orchestrator), backend)
    }

    pub fn with(
        mut self,
        provider: CloudProviderName,
        orchestrator: Orchestrator,
        backend: Arc<dyn OceanBackend>,
    ) -> Self {
        self.register(provider, orchestrator, backend);
        self
    }

    /// Resolve the Ocean backend for a provider/orchestrator pair
    pub fn ocean(
        &self,
        provider: CloudProviderName,
        orchestrator: Orchestrator,
    ) -> Result<Arc<dyn OceanBackend>> {
        self.backends
            .get(&(provider, orchestrator))
            .cloned()
            .ok_or(CloudError::Unsupported {
                provider,
                orchestrator,
            })
    }

    pub fn is_registered(&self, provider: CloudProviderName, orchestrator: Orchestrator) -> bool {
        self.backends.contains_key(&(provider, orchestrator))
    }

    /// Registered pairs, sorted for stable output
    pub fn keys(&self) -> Vec<(CloudProviderName, Orchestrator)> {
        let mut keys: Vec<_> = self.backends.keys().copied().collect();
        keys.sort_by_key(|(p, o)| (p.as_str(), o.as_str()));
        keys
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("backends", &self.keys())
            .finish()
    }
}
