//! Shared handler state

use std::sync::Arc;

use crate::agent::EmailAgent;

#[derive(Debug, Clone)]
pub struct AppState {
    pub agent: Arc<EmailAgent>,
}

impl AppState {
    pub fn new(agent: EmailAgent) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EmailAgent::new())
    }
}
