use super::{Action, GlobalOptions, Validate};
use crate::error::ValidationError;
use std::sync::Arc;

/// Cluster identity flags, shared by every orchestrator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterOptions {
    pub parent: Arc<GlobalOptions>,
    pub action: Action,
    pub cluster_id: String,
    pub name: String,
}

impl ClusterOptions {
    pub fn new(parent: Arc<GlobalOptions>, action: Action) -> Self {
        Self {
            parent,
            action,
            cluster_id: String::new(),
            name: String::new(),
        }
    }

    pub fn global(&self) -> &GlobalOptions {
        &self.parent
    }
}

impl Validate for ClusterOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.parent.validate()?;

        if self.action.requires_id() && self.cluster_id.is_empty() {
            return Err(ValidationError::required("cluster-id"));
        }

        Ok(())
    }
}

/// Ocean Kubernetes cluster flags
///
/// Zero values mean "not set": the payload builder skips empty strings,
/// zero numbers, empty lists and `false` flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterKubernetesOptions {
    pub parent: Arc<ClusterOptions>,

    // Base
    pub region: String,

    // Strategy
    pub spot_percentage: f64,
    pub utilize_reserved_instances: bool,
    pub fallback_to_on_demand: bool,

    // Capacity
    pub min_size: u32,
    pub max_size: u32,
    pub target_size: u32,

    // Compute
    pub subnet_ids: Vec<String>,
    pub instance_types_whitelist: Vec<String>,
    pub instance_types_blacklist: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub image_id: String,
    pub key_pair: String,
    pub user_data: String,
    pub root_volume_size: u32,
    pub associate_public_ip_address: bool,
    pub enable_monitoring: bool,
    pub enable_ebs_optimization: bool,

    // Auto scaling
    pub enable_auto_scaler: bool,
    pub enable_auto_config: bool,
    pub cooldown: u32,
}

impl ClusterKubernetesOptions {
    pub fn new(parent: ClusterOptions) -> Self {
        Self {
            parent: Arc::new(parent),
            ..Default::default()
        }
    }

    pub fn cluster(&self) -> &ClusterOptions {
        &self.parent
    }

    pub fn cluster_mut(&mut self) -> &mut ClusterOptions {
        Arc::make_mut(&mut self.parent)
    }

    pub fn global(&self) -> &GlobalOptions {
        self.parent.global()
    }
}

impl Validate for ClusterKubernetesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.parent.validate()?;

        if !(0.0..=100.0).contains(&self.spot_percentage) {
            return Err(ValidationError::invalid(
                "spot-percentage",
                format!("{} is not between 0 and 100", self.spot_percentage),
            ));
        }

        if self.max_size > 0 && self.min_size > self.max_size {
            return Err(ValidationError::invalid(
                "min-size",
                format!(
                    "{} is greater than max-size {}",
                    self.min_size, self.max_size
                ),
            ));
        }

        if self.target_size > 0 {
            if self.target_size < self.min_size {
                return Err(ValidationError::invalid(
                    "target-size",
                    format!(
                        "{} is below min-size {}",
                        self.target_size, self.min_size
                    ),
                ));
            }
            if self.max_size > 0 && self.target_size > self.max_size {
                return Err(ValidationError::invalid(
                    "target-size",
                    format!(
                        "{} is above max-size {}",
                        self.target_size, self.max_size
                    ),
                ));
            }
        }

        Ok(())
    }
}
