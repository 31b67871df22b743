//! Host State
//!
//! Shared state accessible by the health handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared state for all handlers
#[derive(Clone)]
pub struct HostState {
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl HostState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Seconds since the host started
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the built client's entry point exists
    pub fn client_present(&self) -> bool {
        self.config.dist_dir.join("index.html").is_file()
    }

    pub fn data_present(&self) -> bool {
        self.config.data_dir.is_dir()
    }
}
