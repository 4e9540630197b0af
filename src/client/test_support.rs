//! Shared fixtures for client tests

use std::sync::Arc;
use std::time::Duration;

use super::logger::{ClientLogger, MemoryLogger};
use super::safetyculture::{ExportPolicy, SafetyCultureClient};

pub const TOKEN: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub const AUDIT_ID: &str = "audit_01ca38a821504cda885736cccbb9ba40";

pub const JOB_ID: &str = "4d1bd4aa-1b12-4c4b-a0a8-ba2ed1ec4a92";

pub const PROFILE_ID: &str =
    "template_0123456789abcdef0123456789abcdef:4d1bd4aa-1b12-4c4b-a0a8-ba2ed1ec4a92";

/// Poll policy fast enough for tests
pub fn fast_policy() -> ExportPolicy {
    ExportPolicy {
        poll_interval: Duration::from_millis(5),
        max_polls: 10,
        max_attempts: 2,
    }
}

/// Client pointed at a mock server, logging into memory
pub fn client_for(server: &mockito::ServerGuard) -> (SafetyCultureClient, Arc<MemoryLogger>) {
    let memory = MemoryLogger::new();
    let client = SafetyCultureClient::builder(TOKEN)
        .base_url(server.url())
        .logger(ClientLogger::new(memory.clone()))
        .export_policy(fast_policy())
        .build()
        .expect("test token is valid");
    (client, memory)
}
