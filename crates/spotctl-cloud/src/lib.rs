//! spotctl Ocean abstraction
//!
//! This crate provides the provider-neutral layer every spotctl command is
//! built on: resource envelopes, provider-typed payloads, the backend CRUD
//! contract and the registry that resolves a `(cloud provider, orchestrator)`
//! pair to a concrete backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   spotctl CLI                    │
//! │         (create / get / update / delete)         │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                 spotctl-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │   ServiceRegistry (provider, orch)       │   │
//! │  │   trait OceanBackend { ... }             │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │   Envelope   │  │   Payloads   │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │ ocean aws k8s │
//! │    backend    │
//! └───────────────┘
//! ```

pub mod backend;
pub mod context;
pub mod envelope;
pub mod error;
pub mod name;
pub mod payload;
pub mod registry;

// Re-exports
pub use backend::OceanBackend;
pub use context::Context;
pub use envelope::{Envelope, ObjectMeta, OceanCluster, OceanLaunchSpec, Resource};
pub use error::{CloudError, Result};
pub use name::{CloudProviderName, Orchestrator};
pub use payload::{ClusterPayload, LaunchSpecPayload};
pub use registry::ServiceRegistry;
