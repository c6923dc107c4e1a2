use std::sync::Arc;

use super::{orchestrator::ReviewOrchestrator, templates::Templates};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ReviewOrchestrator>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(orchestrator: ReviewOrchestrator) -> Result<Self, minijinja::Error> {
        Ok(Self {
            orchestrator: Arc::new(orchestrator),
            templates: Arc::new(Templates::new()?),
        })
    }
}
