//! Artifacts domain state

use std::sync::Arc;

use crate::domain::registration::RegistrationWorkflow;

/// Application state for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsState {
    pub workflow: Arc<RegistrationWorkflow>,
}

impl ArtifactsState {
    pub fn new(workflow: RegistrationWorkflow) -> Self {
        Self {
            workflow: Arc::new(workflow),
        }
    }
}
