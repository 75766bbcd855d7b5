// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::commands::credentials::CredentialCommandService;

pub struct ApplicationServices {
    pub credential_commands: Arc<CredentialCommandService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(trace_scans: bool) -> Self {
        Self {
            credential_commands: Arc::new(CredentialCommandService::new(trace_scans)),
        }
    }
}
