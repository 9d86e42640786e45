use super::{Action, GlobalOptions, Validate};
use crate::error::ValidationError;
use std::sync::Arc;

/// Launch spec identity flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchSpecOptions {
    pub parent: Arc<GlobalOptions>,
    pub action: Action,
    pub spec_id: String,
    pub name: String,
}

impl LaunchSpecOptions {
    pub fn new(parent: Arc<GlobalOptions>, action: Action) -> Self {
        Self {
            parent,
            action,
            spec_id: String::new(),
            name: String::new(),
        }
    }

    pub fn global(&self) -> &GlobalOptions {
        &self.parent
    }
}

impl Validate for LaunchSpecOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.parent.validate()?;

        if self.action.requires_id() && self.spec_id.is_empty() {
            return Err(ValidationError::required("spec-id"));
        }

        Ok(())
    }
}

/// Ocean Kubernetes launch spec flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchSpecKubernetesOptions {
    pub parent: Arc<LaunchSpecOptions>,
    pub ocean_id: String,
    pub image_id: String,
    /// Plain text or base64; normalized by the payload builder
    pub user_data: String,
    pub security_group_ids: Vec<String>,
}

impl LaunchSpecKubernetesOptions {
    pub fn new(parent: LaunchSpecOptions) -> Self {
        Self {
            parent: Arc::new(parent),
            ..Default::default()
        }
    }

    pub fn launch_spec(&self) -> &LaunchSpecOptions {
        &self.parent
    }

    pub fn launch_spec_mut(&mut self) -> &mut LaunchSpecOptions {
        Arc::make_mut(&mut self.parent)
    }

    pub fn global(&self) -> &GlobalOptions {
        self.parent.global()
    }
}

impl Validate for LaunchSpecKubernetesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        self.parent.validate()?;

        if self.security_group_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ValidationError::invalid(
                "security-group-ids",
                "contains an empty ID",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kubernetes(action: Action) -> LaunchSpecKubernetesOptions {
        LaunchSpecKubernetesOptions::new(LaunchSpecOptions::new(
            Arc::new(GlobalOptions::default()),
            action,
        ))
    }

    #[test]
    fn test_update_and_delete_require_spec_id() {
        for action in [Action::Update, Action::Delete] {
            let mut opts = kubernetes(action);
            assert_eq!(opts.validate(), Err(ValidationError::required("spec-id")));

            opts.launch_spec_mut().spec_id = "ols-1".to_string();
            assert!(opts.validate().is_ok());
        }
    }

    #[test]
    fn test_create_without_flags_is_valid() {
        assert!(kubernetes(Action::Create).validate().is_ok());
    }

    #[test]
    fn test_blank_security_group_is_invalid() {
        let mut opts = kubernetes(Action::Create);
        opts.security_group_ids = vec!["sg-1".to_string(), " ".to_string()];
        assert_eq!(
            opts.validate().unwrap_err().field(),
            "security-group-ids"
        );
    }
}
