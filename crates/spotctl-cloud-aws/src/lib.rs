//! Ocean on AWS backend for spotctl
//!
//! This crate implements the `OceanBackend` contract for the
//! `(aws, kubernetes)` pair on top of the Spot management API.
//!
//! # Layers
//!
//! - [`api::OceanAwsApi`]: the vendor service seam (one method per API call)
//! - [`http::HttpOceanAws`]: the reqwest transport behind that seam
//! - [`backend::OceanKubernetesAws`]: envelope mapping and the update
//!   stripping rules
//!
//! # Example
//!
//! ```ignore
//! use spotctl_cloud::{Context, OceanBackend};
//! use spotctl_cloud_aws::{HttpConfig, HttpOceanAws, OceanKubernetesAws};
//! use std::sync::Arc;
//!
//! let api = HttpOceanAws::new(HttpConfig::new("token").with_account("act-123"));
//! let backend = OceanKubernetesAws::new(Arc::new(api));
//!
//! let clusters = backend.list_clusters(&Context::new()).await?;
//! ```

pub mod api;
pub mod backend;
pub mod error;
pub mod http;

pub use api::OceanAwsApi;
pub use backend::OceanKubernetesAws;
pub use error::{ApiError, Result};
pub use http::{HttpConfig, HttpOceanAws};
